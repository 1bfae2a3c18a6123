//! The outcome type shared by success and failure reports.

use crate::{Kind, Polarity};

/// The result of a computation: a success or a failure carrying a payload
/// and an optional discriminator.
///
/// Outcomes compare by value. Two outcomes are equal when they share a
/// variant, an equal payload and the same discriminator; a success and a
/// failure are never equal, whatever they carry.
///
/// The plain constructors ([`Outcome::new`], [`Outcome::success`],
/// [`Outcome::failure`]) never fail and perform no validation. Use the
/// validated factory ([`Outcome::try_success`] and friends) for records that
/// come from outside the program.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome<T> {
    /// The computation succeeded.
    Success {
        /// Payload produced by the computation.
        value: T,
        /// Optional discriminator routing hooks.
        kind: Option<Kind>,
    },
    /// The computation failed.
    Failure {
        /// Payload describing the failure.
        value: T,
        /// Optional discriminator routing hooks.
        kind: Option<Kind>,
    },
}

impl<T> Outcome<T> {
    /// Builds an outcome of the given polarity.
    #[must_use]
    pub const fn new(polarity: Polarity, value: T, kind: Option<Kind>) -> Self {
        match polarity {
            Polarity::Success => Self::Success { value, kind },
            Polarity::Failure => Self::Failure { value, kind },
        }
    }

    /// Builds a success without a discriminator.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success { value, kind: None }
    }

    /// Builds a failure without a discriminator.
    #[must_use]
    pub const fn failure(value: T) -> Self {
        Self::Failure { value, kind: None }
    }

    /// Rebuilds this outcome with `kind` as its discriminator.
    ///
    /// ```
    /// use service_outcome::{Kind, Outcome};
    ///
    /// let outcome = Outcome::failure("timeout").with_kind("upstream");
    /// assert_eq!(outcome.kind(), Some(&Kind::new("upstream")));
    /// ```
    #[must_use]
    pub fn with_kind(self, kind: impl Into<Kind>) -> Self {
        let (polarity, value, _) = self.into_parts();
        Self::new(polarity, value, Some(kind.into()))
    }

    /// Which variant this outcome is.
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        match self {
            Self::Success { .. } => Polarity::Success,
            Self::Failure { .. } => Polarity::Failure,
        }
    }

    /// Returns `true` for a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.polarity().is_success()
    }

    /// Returns `true` for a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.polarity().is_failure()
    }

    /// The payload.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Success { value, .. } | Self::Failure { value, .. } => value,
        }
    }

    /// The discriminator, if one was supplied.
    #[must_use]
    pub const fn kind(&self) -> Option<&Kind> {
        match self {
            Self::Success { kind, .. } | Self::Failure { kind, .. } => kind.as_ref(),
        }
    }

    /// Consumes the outcome, returning its payload.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Success { value, .. } | Self::Failure { value, .. } => value,
        }
    }

    /// Consumes the outcome, returning its polarity, payload and
    /// discriminator.
    #[must_use]
    pub fn into_parts(self) -> (Polarity, T, Option<Kind>) {
        match self {
            Self::Success { value, kind } => (Polarity::Success, value, kind),
            Self::Failure { value, kind } => (Polarity::Failure, value, kind),
        }
    }
}
