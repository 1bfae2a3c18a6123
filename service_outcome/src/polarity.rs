//! The success/failure tag carried by every outcome.

use std::fmt;

/// Whether an outcome reports a success or a failure.
///
/// The set of polarities is closed. Code that branches on a polarity must
/// handle both, so an outcome can never be left without an answer to
/// "did it succeed?":
///
/// ```compile_fail
/// use service_outcome::Polarity;
///
/// fn label(polarity: Polarity) -> &'static str {
///     match polarity {
///         Polarity::Success => "ok",
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Polarity {
    /// The computation succeeded.
    Success,
    /// The computation failed.
    Failure,
}

impl Polarity {
    /// Returns `true` for [`Polarity::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        match self {
            Self::Success => true,
            Self::Failure => false,
        }
    }

    /// Returns `true` for [`Polarity::Failure`].
    #[must_use]
    pub const fn is_failure(self) -> bool {
        match self {
            Self::Success => false,
            Self::Failure => true,
        }
    }

    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
