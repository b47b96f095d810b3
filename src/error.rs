//! Error types for the change-detection engine.

use crate::validation::ValidationError;

/// Result type for engine operations.
pub type DiffResult<T> = Result<T, DiffError>;

/// Error type for engine operations.
///
/// Diffing itself is total over valid input. Every variant here is either
/// a caller contract violation or a failure of a caller-owned collaborator.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A snapshot failed validation. `role` names which input was rejected.
    #[error(
        "invalid {role} snapshot: {} issue(s), first: {}",
        .errors.len(),
        first_message(.errors)
    )]
    InvalidSnapshot {
        role: &'static str,
        errors: Vec<ValidationError>,
    },

    /// Policy configuration could not be read or is out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller-owned snapshot cache failed to load or store.
    #[error("Snapshot cache error: {0}")]
    Cache(String),
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map_or("none", |e| e.message.as_str())
}
