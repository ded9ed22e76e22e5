pub mod cli;
pub mod config;
pub mod core;
pub mod extractors;
pub mod utils;

pub use crate::core::{Duration, Entry, ExtractorEngine, PlaylistReport, ReportWriter};
pub use extractors::{YouTubePlaylistExtractor, YtDlpExtractor};
