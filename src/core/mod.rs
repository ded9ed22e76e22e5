pub mod duration;
pub mod error;
pub mod extractor;
pub mod metadata;
pub mod pipeline;
pub mod report;
pub mod writer;

pub use duration::{Duration, DurationParseError};
pub use error::{ExtractionError, ReportError, TransformError};
pub use extractor::{Extractor, ExtractorEngine};
pub use metadata::{Entry, PlaylistInfo};
pub use pipeline::RunOutcome;
pub use report::{PlaylistReport, ReportRow};
pub use writer::{ReportWriter, DEFAULT_OUTPUT_PATH};
