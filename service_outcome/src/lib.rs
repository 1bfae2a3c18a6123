//! Success and failure outcomes for service objects.
//!
//! An [`Outcome`] tags the result of a computation as either a success or a
//! failure, carries the payload produced by that computation and, optionally,
//! a [`Kind`] discriminator that sub-classifies it. Callers react to an
//! outcome through chainable hooks which fire only when both the polarity and
//! the discriminator match:
//!
//! ```
//! use service_outcome::Outcome;
//!
//! let outcome = Outcome::success(42).with_kind("valid");
//! let mut seen = Vec::new();
//!
//! outcome
//!     .on_failure(|_| panic!("a success never fires failure hooks"))
//!     .on_success_of("invalid", |_| panic!("discriminator does not match"))
//!     .on_success_of("valid", |value| seen.push(*value));
//!
//! assert_eq!(seen, [42]);
//! ```
//!
//! Outcomes built from untrusted input should go through the validated
//! factory ([`Outcome::try_success`], [`Outcome::try_failure`] and
//! [`Outcome::try_from_figment`]), which checks the shape of the record before
//! building anything.

mod conversions;
mod error;
mod factory;
mod hooks;
mod kind;
mod outcome;
mod polarity;

pub use error::{OutcomeError, OutcomeResult};
pub use kind::Kind;
pub use outcome::Outcome;
pub use polarity::Polarity;

pub use figment;
pub use serde_json;
