//! Saving the backend's report: filename derivation and the save affordance.
//!
//! The report is named after the address it was generated for, with commas and
//! whitespace collapsed so the result is a single filesystem-safe path segment.

mod filename;
mod sink;

pub use filename::{report_filename, REPORT_SUFFIX};
pub use sink::{DirectorySink, ReportSink};

/// True if `payload` starts with the PDF magic bytes. Only used for logging;
/// the payload is saved as-is either way.
pub fn looks_like_pdf(payload: &[u8]) -> bool {
    payload.starts_with(b"%PDF-")
}
