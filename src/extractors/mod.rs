pub mod youtube;
pub mod ytdlp;

pub use youtube::YouTubePlaylistExtractor;
pub use ytdlp::YtDlpExtractor;
