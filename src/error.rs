// ❗ Error types

use thiserror::Error;

/// Errors surfaced by the aggregation pipeline.
///
/// Degenerate ratios (no previous-month spend, no current-month records) are
/// recovered to 0 inside the aggregators and never reach this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzerError {
    /// A statement was requested for an empty transaction set. The latest-date
    /// fallback has already been tried; there is nothing left to report on.
    #[error("cannot build a statement from an empty transaction set")]
    EmptyInput,
}
