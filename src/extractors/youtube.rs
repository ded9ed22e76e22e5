use crate::core::metadata::seconds_from_value;
use crate::core::{Entry, ExtractionError, Extractor, PlaylistInfo};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Reads the first page of a YouTube playlist without the external tool.
pub struct YouTubePlaylistExtractor {
    client: reqwest::Client,
}

impl YouTubePlaylistExtractor {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, ExtractionError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    pub fn extract_playlist_id(&self, url: &Url) -> Option<String> {
        url.query_pairs()
            .find(|(key, _)| key == "list")
            .map(|(_, value)| value.to_string())
            .filter(|id| !id.is_empty())
    }

    /// Pulls the `ytInitialData` document out of a playlist page and collects its videos.
    pub fn parse_playlist_page(html: &str) -> Result<PlaylistInfo, ExtractionError> {
        let initial_data = extract_initial_data(html)?;

        let mut entries = Vec::new();
        collect_video_renderers(&initial_data, &mut entries);
        tracing::debug!("Found {} playlist video renderers", entries.len());

        let title = initial_data
            .pointer("/metadata/playlistMetadataRenderer/title")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Ok(PlaylistInfo {
            kind: Some("playlist".to_string()),
            id: None,
            title,
            entries: Some(entries),
        })
    }
}

fn extract_initial_data(html: &str) -> Result<Value, ExtractionError> {
    let patterns = [
        r#"(?s)var\s+ytInitialData\s*=\s*(\{.+?\});\s*</script>"#,
        r#"(?s)window\["ytInitialData"\]\s*=\s*(\{.+?\});\s*</script>"#,
        r#"(?s)ytInitialData\s*=\s*(\{.+?\});"#,
    ];

    for pattern in &patterns {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        if let Some(json_str) = re.captures(html).and_then(|c| c.get(1)) {
            match serde_json::from_str::<Value>(json_str.as_str()) {
                Ok(parsed) => return Ok(parsed),
                Err(e) => tracing::debug!("ytInitialData candidate did not parse: {}", e),
            }
        }
    }

    Err(ExtractionError::Parse(
        "could not find ytInitialData in playlist page".to_string(),
    ))
}

fn collect_video_renderers(value: &Value, entries: &mut Vec<Entry>) {
    match value {
        Value::Object(map) => {
            if let Some(renderer) = map.get("playlistVideoRenderer") {
                if let Some(entry) = entry_from_renderer(renderer) {
                    entries.push(entry);
                }
                return;
            }
            for child in map.values() {
                collect_video_renderers(child, entries);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_video_renderers(item, entries);
            }
        }
        _ => {}
    }
}

fn entry_from_renderer(renderer: &Value) -> Option<Entry> {
    let video_id = renderer.get("videoId").and_then(|v| v.as_str())?;

    let title = renderer
        .pointer("/title/runs/0/text")
        .or_else(|| renderer.pointer("/title/simpleText"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    // Unplayable items carry no length
    let duration = renderer.get("lengthSeconds").and_then(seconds_from_value);

    Some(Entry {
        id: Some(video_id.to_string()),
        title,
        url: Some(format!("https://www.youtube.com/watch?v={}", video_id)),
        duration,
    })
}

#[async_trait]
impl Extractor for YouTubePlaylistExtractor {
    fn name(&self) -> &'static str {
        "YouTube"
    }

    fn suitable(&self, url: &Url) -> bool {
        let is_youtube = url
            .host_str()
            .map(|host| host.contains("youtube.com") || host == "youtu.be")
            .unwrap_or(false);
        is_youtube && self.extract_playlist_id(url).is_some()
    }

    async fn extract_playlist(&mut self, url: &Url) -> Result<PlaylistInfo, ExtractionError> {
        let playlist_id = self
            .extract_playlist_id(url)
            .ok_or_else(|| ExtractionError::Unsupported(url.to_string()))?;

        let playlist_url = format!("https://www.youtube.com/playlist?list={}", playlist_id);
        let response = self
            .client
            .get(&playlist_url)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.5")
            .header("Accept-Encoding", "identity")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExtractionError::Status(response.status()));
        }

        let html = response.text().await?;
        let mut info = Self::parse_playlist_page(&html)?;
        info.id = Some(playlist_id);
        Ok(info)
    }
}
