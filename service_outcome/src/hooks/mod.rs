//! Chainable reaction hooks.
//!
//! A hook fires when the outcome's polarity matches the hook family and,
//! when the hook names a discriminator, the outcome carries that same
//! discriminator. Every hook returns the outcome it was called on so calls
//! chain in any order; each call in a chain is evaluated on its own, so a
//! firing hook never suppresses the ones after it.
//!
//! ```
//! use service_outcome::Outcome;
//!
//! let mut counter = 0;
//! let outcome = Outcome::success(42).with_kind("valid");
//!
//! let returned = outcome
//!     .on_success_of("invalid", |_| panic!("not routed here"))
//!     .on_success_of("valid", |value| assert_eq!(*value, 42))
//!     .on_success(|_| counter += 1);
//!
//! assert_eq!(returned, &outcome);
//! assert_eq!(counter, 1);
//! ```

use tracing::trace;

use crate::{Kind, Outcome, Polarity};

impl<T> Outcome<T> {
    /// Returns `true` when a hook for `polarity` and `kind` would fire.
    ///
    /// A hook without a discriminator matches any outcome of its polarity.
    /// A hook with a discriminator only matches outcomes carrying an equal
    /// one; an outcome without a discriminator never matches it.
    #[must_use]
    pub fn matches(&self, polarity: Polarity, kind: Option<&Kind>) -> bool {
        self.polarity() == polarity && kind.is_none_or(|wanted| self.kind() == Some(wanted))
    }

    /// Calls `f` with the payload if this is a success.
    pub fn on_success<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&T),
    {
        self.dispatch(Polarity::Success, None, f)
    }

    /// Calls `f` with the payload if this is a success tagged `kind`.
    pub fn on_success_of<K, F>(&self, kind: K, f: F) -> &Self
    where
        K: Into<Kind>,
        F: FnOnce(&T),
    {
        self.dispatch(Polarity::Success, Some(kind.into()), f)
    }

    /// Calls `f` with the payload if this is a failure.
    pub fn on_failure<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&T),
    {
        self.dispatch(Polarity::Failure, None, f)
    }

    /// Calls `f` with the payload if this is a failure tagged `kind`.
    pub fn on_failure_of<K, F>(&self, kind: K, f: F) -> &Self
    where
        K: Into<Kind>,
        F: FnOnce(&T),
    {
        self.dispatch(Polarity::Failure, Some(kind.into()), f)
    }

    /// Fallible form of [`Outcome::on_success`].
    ///
    /// # Errors
    ///
    /// Returns the callback's error unchanged when the hook fires and the
    /// callback fails.
    ///
    /// ```
    /// use service_outcome::Outcome;
    ///
    /// fn audit(outcome: &Outcome<u32>) -> Result<(), String> {
    ///     outcome
    ///         .try_on_success(|value| {
    ///             if *value > 10 {
    ///                 return Err(format!("{value} too large"));
    ///             }
    ///             Ok(())
    ///         })?
    ///         .try_on_failure(|_| Err("failures are not audited".to_owned()))?;
    ///     Ok(())
    /// }
    ///
    /// assert!(audit(&Outcome::success(3)).is_ok());
    /// assert_eq!(audit(&Outcome::success(30)), Err("30 too large".to_owned()));
    /// ```
    pub fn try_on_success<F, E>(&self, f: F) -> Result<&Self, E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        self.try_dispatch(Polarity::Success, None, f)
    }

    /// Fallible form of [`Outcome::on_success_of`].
    ///
    /// # Errors
    ///
    /// Returns the callback's error unchanged when the hook fires and the
    /// callback fails.
    pub fn try_on_success_of<K, F, E>(&self, kind: K, f: F) -> Result<&Self, E>
    where
        K: Into<Kind>,
        F: FnOnce(&T) -> Result<(), E>,
    {
        self.try_dispatch(Polarity::Success, Some(kind.into()), f)
    }

    /// Fallible form of [`Outcome::on_failure`].
    ///
    /// # Errors
    ///
    /// Returns the callback's error unchanged when the hook fires and the
    /// callback fails.
    pub fn try_on_failure<F, E>(&self, f: F) -> Result<&Self, E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        self.try_dispatch(Polarity::Failure, None, f)
    }

    /// Fallible form of [`Outcome::on_failure_of`].
    ///
    /// # Errors
    ///
    /// Returns the callback's error unchanged when the hook fires and the
    /// callback fails.
    pub fn try_on_failure_of<K, F, E>(&self, kind: K, f: F) -> Result<&Self, E>
    where
        K: Into<Kind>,
        F: FnOnce(&T) -> Result<(), E>,
    {
        self.try_dispatch(Polarity::Failure, Some(kind.into()), f)
    }

    fn dispatch<F>(&self, polarity: Polarity, kind: Option<Kind>, f: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if self.matches(polarity, kind.as_ref()) {
            trace!(%polarity, ?kind, "outcome hook fired");
            f(self.value());
        }
        self
    }

    fn try_dispatch<F, E>(&self, polarity: Polarity, kind: Option<Kind>, f: F) -> Result<&Self, E>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        if self.matches(polarity, kind.as_ref()) {
            trace!(%polarity, ?kind, "outcome hook fired");
            f(self.value())?;
        }
        Ok(self)
    }
}
