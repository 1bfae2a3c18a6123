//! Constructors for `OutcomeError`.

use figment::Error as FigmentError;
use serde_json::Value;

use super::OutcomeError;

impl OutcomeError {
    /// Construct a missing-argument error for `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use service_outcome::OutcomeError;
    /// let e = OutcomeError::missing("value");
    /// assert_eq!(e.to_string(), "missing required argument: value");
    /// ```
    #[must_use]
    pub const fn missing(name: &'static str) -> Self {
        Self::MissingArgument { name }
    }

    /// Construct an invalid-type error describing the JSON value `found`
    /// under `parameter`.
    #[must_use]
    pub const fn invalid_type(parameter: &'static str, found: &Value) -> Self {
        Self::InvalidType {
            parameter,
            found: json_type_name(found),
        }
    }

    /// Construct an error for a record that is not a JSON object.
    #[must_use]
    pub const fn invalid_record(found: &Value) -> Self {
        Self::InvalidRecord {
            found: json_type_name(found),
        }
    }

    /// Construct an unknown-argument error for `name`.
    #[must_use]
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownArgument { name: name.into() }
    }

    /// Construct a decode error from a [`serde_json::Error`].
    #[must_use]
    pub const fn decode(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }

    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use service_outcome::OutcomeError;
    /// let fe = service_outcome::figment::Error::from("boom");
    /// let e = OutcomeError::gathering(fe);
    /// assert!(matches!(e, OutcomeError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }
}

impl From<FigmentError> for OutcomeError {
    fn from(e: FigmentError) -> Self {
        Self::gathering(e)
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
