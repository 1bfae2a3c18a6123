//! Bridges between outcomes and `std::result::Result`.

use crate::Outcome;

impl<T> Outcome<T> {
    /// Converts the outcome into a [`Result`], dropping the discriminator.
    ///
    /// Successes become `Ok`, failures become `Err`.
    ///
    /// ```
    /// use service_outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success(1).into_result(), Ok(1));
    /// assert_eq!(Outcome::failure(0).with_kind("empty").into_result(), Err(0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the payload as `Err` when the outcome is a failure.
    pub fn into_result(self) -> Result<T, T> {
        match self {
            Self::Success { value, .. } => Ok(value),
            Self::Failure { value, .. } => Err(value),
        }
    }
}

impl<T> From<Result<T, T>> for Outcome<T> {
    fn from(result: Result<T, T>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(value) => Self::failure(value),
        }
    }
}
