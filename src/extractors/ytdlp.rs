use crate::core::{ExtractionError, Extractor, PlaylistInfo};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use url::Url;

/// Delegates extraction to an installed `yt-dlp` binary.
pub struct YtDlpExtractor {
    binary: PathBuf,
    force_generic_extractor: bool,
}

impl YtDlpExtractor {
    pub fn new(binary: impl Into<PathBuf>, force_generic_extractor: bool) -> Self {
        Self {
            binary: binary.into(),
            force_generic_extractor,
        }
    }

    /// Flat, quiet, single JSON document on stdout.
    pub fn build_args(&self, url: &Url) -> Vec<String> {
        let mut args = vec![
            "--flat-playlist".to_string(),
            "--dump-single-json".to_string(),
            "--quiet".to_string(),
            "--no-warnings".to_string(),
        ];
        if self.force_generic_extractor {
            args.push("--force-generic-extractor".to_string());
        }
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    pub fn parse_output(stdout: &[u8]) -> Result<PlaylistInfo, ExtractionError> {
        let text = String::from_utf8_lossy(stdout);
        let document = text.trim();
        if document.is_empty() {
            return Err(ExtractionError::Parse("yt-dlp produced no output".to_string()));
        }
        Ok(serde_json::from_str(document)?)
    }

    fn download_error(status: ExitStatus, stderr: &[u8]) -> ExtractionError {
        let stderr = String::from_utf8_lossy(stderr);
        let message = stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(|line| line.to_string())
            .unwrap_or_else(|| format!("yt-dlp exited with {}", status));
        ExtractionError::Download(message)
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    fn suitable(&self, url: &Url) -> bool {
        matches!(url.scheme(), "http" | "https")
    }

    async fn extract_playlist(&mut self, url: &Url) -> Result<PlaylistInfo, ExtractionError> {
        let args = self.build_args(url);
        tracing::debug!("Running {} {}", self.binary.display(), args.join(" "));

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ExtractionError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Self::download_error(output.status, &output.stderr));
        }

        Self::parse_output(&output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args_with_generic_extractor() {
        let extractor = YtDlpExtractor::new("yt-dlp", true);
        let url = Url::parse("https://www.youtube.com/playlist?list=PL1").unwrap();

        assert_eq!(
            extractor.build_args(&url),
            vec![
                "--flat-playlist",
                "--dump-single-json",
                "--quiet",
                "--no-warnings",
                "--force-generic-extractor",
                "--",
                "https://www.youtube.com/playlist?list=PL1",
            ]
        );
    }

    #[test]
    fn test_build_args_without_generic_extractor() {
        let extractor = YtDlpExtractor::new("yt-dlp", false);
        let url = Url::parse("https://example.com/list").unwrap();
        let args = extractor.build_args(&url);

        assert!(!args.iter().any(|a| a == "--force-generic-extractor"));
        assert_eq!(args.last().map(String::as_str), Some("https://example.com/list"));
    }

    #[test]
    fn test_parse_output() {
        let stdout = br#"{"_type": "playlist", "entries": [{"url": "a", "duration": 60}]}
"#;
        let info = YtDlpExtractor::parse_output(stdout).unwrap();
        assert_eq!(info.entries.unwrap()[0].duration, Some(60));
    }

    #[test]
    fn test_parse_output_rejects_garbage() {
        assert!(matches!(
            YtDlpExtractor::parse_output(b""),
            Err(ExtractionError::Parse(_))
        ));
        assert!(matches!(
            YtDlpExtractor::parse_output(b"not json"),
            Err(ExtractionError::Parse(_))
        ));
    }

    #[test]
    fn test_suitable_for_http_urls_only() {
        let extractor = YtDlpExtractor::new("yt-dlp", true);
        assert!(extractor.suitable(&Url::parse("https://vimeo.com/showcase/1").unwrap()));
        assert!(!extractor.suitable(&Url::parse("file:///tmp/list.json").unwrap()));
    }

    #[tokio::test]
    async fn test_missing_binary_is_a_spawn_error() {
        let mut extractor = YtDlpExtractor::new("/nonexistent/yt-dlp-binary", true);
        let url = Url::parse("https://example.com/list").unwrap();

        let err = extractor.extract_playlist(&url).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Spawn { .. }));
    }
}
