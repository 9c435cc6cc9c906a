//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the document layout.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("tree marker not found: {marker}")]
    MarkerNotFound { marker: String },

    #[error("tree markers out of order: {end} must come after {start}")]
    MarkersOutOfOrder { start: String, end: String },
}
