use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const URL_PROMPT: &str = "Enter the YouTube playlist URL: ";

/// Prints the prompt and reads one line, without the line terminator.
pub async fn prompt_line<R, W>(prompt: &str, reader: &mut R, writer: &mut W) -> Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(prompt.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_line_trims_input() {
        let mut input: &[u8] = b"  https://www.youtube.com/playlist?list=PL1 \r\nignored\n";
        let mut output = Vec::new();

        let line = prompt_line(URL_PROMPT, &mut input, &mut output).await.unwrap();

        assert_eq!(line, "https://www.youtube.com/playlist?list=PL1");
        assert_eq!(output, URL_PROMPT.as_bytes());
    }

    #[tokio::test]
    async fn test_prompt_line_at_eof() {
        let mut input: &[u8] = b"";
        let mut output = Vec::new();
        assert_eq!(prompt_line(URL_PROMPT, &mut input, &mut output).await.unwrap(), "");
    }
}
