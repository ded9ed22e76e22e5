use crate::core::{Duration, Entry, TransformError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub link: String,
    pub duration: Duration,
}

/// CSV record layout.
#[derive(Debug, Serialize)]
pub(crate) struct CsvRow<'a> {
    #[serde(rename = "Video Link")]
    pub link: &'a str,
    #[serde(rename = "Duration")]
    pub duration: String,
}

impl<'a> From<&'a ReportRow> for CsvRow<'a> {
    fn from(row: &'a ReportRow) -> Self {
        Self {
            link: &row.link,
            duration: row.duration.to_string(),
        }
    }
}

/// Index-aligned links and durations of a playlist, plus their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistReport {
    rows: Vec<ReportRow>,
    total: Duration,
}

impl PlaylistReport {
    /// Keeps only entries carrying both a non-empty link and a duration, so
    /// links and durations never drift apart.
    pub fn from_entries(entries: &[Entry]) -> Result<Self, TransformError> {
        let rows: Vec<ReportRow> = entries
            .iter()
            .filter_map(|entry| {
                let link = entry.url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
                let duration = entry.duration?;
                Some(ReportRow {
                    link: link.to_string(),
                    duration: Duration::from_secs(duration),
                })
            })
            .collect();

        if rows.is_empty() {
            return Err(TransformError::Empty);
        }

        let total = rows.iter().map(|row| row.duration).sum();
        Ok(Self { rows, total })
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn links(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.link.as_str()).collect()
    }

    pub fn durations(&self) -> Vec<Duration> {
        self.rows.iter().map(|row| row.duration).collect()
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_complete_entries() {
        let entries = vec![Entry::new(Some("a"), Some(60)), Entry::new(Some("b"), Some(3661))];
        let report = PlaylistReport::from_entries(&entries).unwrap();

        assert_eq!(report.links(), vec!["a", "b"]);
        let rendered: Vec<String> = report.durations().iter().map(|d| d.to_string()).collect();
        assert_eq!(rendered, vec!["0:01:00", "1:01:01"]);
        assert_eq!(report.total().to_string(), "1:02:01");
    }

    #[test]
    fn test_missing_fields_are_dropped_together() {
        let entries = vec![
            Entry::new(Some("a"), None),
            Entry::new(None, Some(30)),
            Entry::new(Some("c"), Some(45)),
        ];
        let report = PlaylistReport::from_entries(&entries).unwrap();

        assert_eq!(report.links(), vec!["c"]);
        assert_eq!(report.durations(), vec![Duration::from_secs(45)]);
        assert_eq!(report.total(), Duration::from_secs(45));
    }

    #[test]
    fn test_half_populated_entries_never_pair_up() {
        let entries = vec![Entry::new(Some("a"), None), Entry::new(None, Some(30))];
        assert_eq!(PlaylistReport::from_entries(&entries), Err(TransformError::Empty));
    }

    #[test]
    fn test_blank_link_is_dropped() {
        let entries = vec![Entry::new(Some("  "), Some(10)), Entry::new(Some("x"), Some(5))];
        let report = PlaylistReport::from_entries(&entries).unwrap();
        assert_eq!(report.links(), vec!["x"]);
        assert_eq!(report.total(), Duration::from_secs(5));
    }

    #[test]
    fn test_duplicates_and_order_are_preserved() {
        let entries = vec![
            Entry::new(Some("b"), Some(1)),
            Entry::new(Some("a"), Some(2)),
            Entry::new(Some("b"), Some(3)),
        ];
        let report = PlaylistReport::from_entries(&entries).unwrap();
        assert_eq!(report.links(), vec!["b", "a", "b"]);
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_zero_length_video_counts() {
        let entries = vec![Entry::new(Some("live"), Some(0))];
        let report = PlaylistReport::from_entries(&entries).unwrap();
        assert_eq!(report.len(), 1);
        assert!(report.total().is_zero());
    }

    #[test]
    fn test_no_entries() {
        assert_eq!(PlaylistReport::from_entries(&[]), Err(TransformError::Empty));
    }
}
