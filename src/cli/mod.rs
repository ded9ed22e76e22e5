use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tokio::io::BufReader;

use crate::config::{Config, ExtractorKind};
use crate::core::{pipeline, ExtractorEngine, ReportWriter, RunOutcome};
use crate::extractors::{YouTubePlaylistExtractor, YtDlpExtractor};
use crate::utils::{prompt_line, URL_PROMPT};

#[derive(Parser)]
#[command(name = "yt-playlist-report")]
#[command(about = "Write the links and durations of a playlist to CSV and total its watch time")]
#[command(version)]
pub struct Cli {
    /// Playlist URL (prompted for when omitted)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// CSV file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preferred extraction backend
    #[arg(short, long, value_enum)]
    pub extractor: Option<ExtractorKind>,

    /// Path to the yt-dlp binary
    #[arg(long = "yt-dlp", value_name = "PATH")]
    pub yt_dlp: Option<PathBuf>,

    /// Let yt-dlp pick a site-specific extractor
    #[arg(long)]
    pub no_force_generic: bool,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Loads the config file and applies command line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(extractor) = self.extractor {
            config.extractor = extractor;
        }
        if let Some(binary) = &self.yt_dlp {
            config.yt_dlp_binary = binary.clone();
        }
        if self.no_force_generic {
            config.force_generic_extractor = false;
        }

        Ok(config)
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        let config = self.resolve_config()?;
        tracing::debug!("Resolved configuration: {:?}", config);

        let url = match &self.url {
            Some(url) => url.trim().to_string(),
            None => {
                let mut stdin = BufReader::new(tokio::io::stdin());
                let mut stdout = tokio::io::stdout();
                prompt_line(URL_PROMPT, &mut stdin, &mut stdout).await?
            }
        };

        let mut engine = build_engine(&config)?;
        let writer = ReportWriter::new(&config.output_path);
        let mut console = std::io::stdout();

        pipeline::run(&mut engine, &url, &writer, &mut console).await
    }
}

/// Registers both backends, preferred one first.
pub fn build_engine(config: &Config) -> Result<ExtractorEngine> {
    let yt_dlp = Box::new(YtDlpExtractor::new(
        &config.yt_dlp_binary,
        config.force_generic_extractor,
    ));
    let native = Box::new(YouTubePlaylistExtractor::new(
        &config.user_agent,
        config.timeout,
    )?);

    let mut engine = ExtractorEngine::new();
    match config.extractor {
        ExtractorKind::YtDlp => {
            engine.register_extractor(yt_dlp);
            engine.register_extractor(native);
        }
        ExtractorKind::Native => {
            engine.register_extractor(native);
            engine.register_extractor(yt_dlp);
        }
    }
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["yt-playlist-report"]).unwrap();
        assert!(cli.url.is_none());

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.extractor, ExtractorKind::YtDlp);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "yt-playlist-report",
            "https://www.youtube.com/playlist?list=PL1",
            "--output",
            "report.csv",
            "--extractor",
            "native",
            "--yt-dlp",
            "/usr/local/bin/yt-dlp",
            "--no-force-generic",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.output_path, PathBuf::from("report.csv"));
        assert_eq!(config.extractor, ExtractorKind::Native);
        assert_eq!(config.yt_dlp_binary, PathBuf::from("/usr/local/bin/yt-dlp"));
        assert!(!config.force_generic_extractor);
    }

    #[test]
    fn test_engine_order_follows_preference() {
        let mut config = Config::default();
        let names = |engine: &ExtractorEngine| -> Vec<&'static str> {
            engine.extractors.iter().map(|e| e.name()).collect()
        };

        assert_eq!(names(&build_engine(&config).unwrap()), vec!["yt-dlp", "YouTube"]);
        config.extractor = ExtractorKind::Native;
        assert_eq!(names(&build_engine(&config).unwrap()), vec!["YouTube", "yt-dlp"]);
    }
}
