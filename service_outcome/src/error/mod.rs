//! Error types produced by the validated outcome factory.

mod constructors;
mod types;

pub use types::OutcomeError;

/// Result alias used by the validated factory.
pub type OutcomeResult<T> = Result<T, OutcomeError>;
