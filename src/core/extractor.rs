use crate::core::{Entry, ExtractionError, PlaylistInfo};
use async_trait::async_trait;
use tracing::{debug, error, info, warn};
use url::Url;

#[async_trait]
pub trait Extractor: Send + Sync {
    fn name(&self) -> &'static str;
    fn suitable(&self, url: &Url) -> bool;
    async fn extract_playlist(&mut self, url: &Url) -> Result<PlaylistInfo, ExtractionError>;
}

pub struct ExtractorEngine {
    pub extractors: Vec<Box<dyn Extractor>>,
}

impl Default for ExtractorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorEngine {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    pub fn register_extractor(&mut self, extractor: Box<dyn Extractor>) {
        debug!("Registered extractor: {}", extractor.name());
        self.extractors.push(extractor);
    }

    /// Runs the first suitable extractor once.
    pub async fn extract(&mut self, url: &str) -> Result<PlaylistInfo, ExtractionError> {
        let parsed_url = Url::parse(url.trim()).map_err(|source| ExtractionError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        for extractor in &mut self.extractors {
            if extractor.suitable(&parsed_url) {
                info!("Extracting {} with {}", parsed_url, extractor.name());
                return extractor.extract_playlist(&parsed_url).await;
            }
        }

        Err(ExtractionError::Unsupported(url.to_string()))
    }

    /// Resolves a playlist URL into its entries.
    ///
    /// Never fails: extraction errors and non-collection results are logged
    /// and yield an empty list.
    pub async fn fetch_playlist_info(&mut self, url: &str) -> Vec<Entry> {
        match self.extract(url).await {
            Ok(PlaylistInfo {
                entries: Some(entries),
                title,
                ..
            }) => {
                info!(
                    "Fetched {} entries from playlist {}",
                    entries.len(),
                    title.as_deref().unwrap_or("(untitled)")
                );
                entries
            }
            Ok(_) => {
                warn!("Failed to fetch playlist information.");
                Vec::new()
            }
            Err(e) => {
                error!("An error occurred: {}", e);
                Vec::new()
            }
        }
    }
}
