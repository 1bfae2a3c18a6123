//! Primary error enum for outcome construction.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors raised when an outcome record violates the factory contract.
///
/// Every variant describes a programmer error at the call site; the factory
/// performs no recovery.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// A required argument was absent from the record.
    #[error("missing required argument: {name}")]
    MissingArgument {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// The discriminator was neither absent nor a symbolic atom.
    #[error("{parameter} must be absent or a symbolic atom (found {found})")]
    InvalidType {
        /// Record key holding the offending discriminator.
        parameter: &'static str,
        /// JSON type of the value that was supplied instead.
        found: &'static str,
    },

    /// The record contained a key the factory does not recognise.
    #[error("unknown argument: {name}")]
    UnknownArgument {
        /// The unrecognised key.
        name: String,
    },

    /// The record itself was not a JSON object.
    #[error("outcome record must be an object (found {found})")]
    InvalidRecord {
        /// JSON type of the value that was supplied instead.
        found: &'static str,
    },

    /// The payload could not be decoded into the requested value type.
    #[error("failed to decode outcome value: {source}")]
    Decode {
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// Extracting the record from configuration providers failed.
    #[error("failed to gather outcome record: {0}")]
    Gathering(#[from] Box<FigmentError>),
}
