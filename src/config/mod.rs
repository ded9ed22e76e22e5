use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::DEFAULT_OUTPUT_PATH;

pub const DEFAULT_CONFIG_FILE: &str = "yt-playlist-report.toml";

/// YouTube serves reduced pages to non-browser agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractorKind {
    /// External yt-dlp program
    #[value(name = "yt-dlp")]
    YtDlp,
    /// Built-in YouTube playlist page reader
    Native,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_path: PathBuf,
    pub extractor: ExtractorKind,
    pub yt_dlp_binary: PathBuf,
    pub force_generic_extractor: bool,
    pub user_agent: String,
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            extractor: ExtractorKind::YtDlp,
            yt_dlp_binary: PathBuf::from("yt-dlp"),
            force_generic_extractor: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: 30,
        }
    }
}

impl Config {
    /// An explicit path must exist. Without one, `yt-playlist-report.toml` in
    /// the working directory is used if present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
