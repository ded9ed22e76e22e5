use crate::core::{Duration, ExtractorEngine, PlaylistReport, ReportWriter};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoEntries,
    NoLinksOrDurations,
    Written { rows: usize, total: Duration },
}

/// Extract, tabulate, and write one playlist report. Console messages go to
/// `console`; only report write failures are returned as errors.
pub async fn run<W: Write>(
    engine: &mut ExtractorEngine,
    url: &str,
    writer: &ReportWriter,
    console: &mut W,
) -> Result<RunOutcome> {
    let entries = engine.fetch_playlist_info(url).await;
    if entries.is_empty() {
        writeln!(console, "No video details were found.")?;
        return Ok(RunOutcome::NoEntries);
    }

    let report = match PlaylistReport::from_entries(&entries) {
        Ok(report) => report,
        Err(e) => {
            writeln!(console, "{}", e)?;
            return Ok(RunOutcome::NoLinksOrDurations);
        }
    };
    debug!(
        "Kept {} of {} entries with both a link and a duration",
        report.len(),
        entries.len()
    );

    writer.write(&report)?;

    writeln!(console, "Total time to watch the playlist: {}", report.total())?;
    writeln!(
        console,
        "Playlist details saved to '{}'.",
        writer.path().display()
    )?;

    Ok(RunOutcome::Written {
        rows: report.len(),
        total: report.total(),
    })
}
