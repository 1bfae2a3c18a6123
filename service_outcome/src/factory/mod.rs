//! Validated construction of outcomes from configuration records.
//!
//! A record is a JSON object with a required `value` key and an optional
//! `type` key naming the discriminator. Records are checked in a fixed
//! order: the record shape, then the presence of `value`, then unknown keys,
//! then the discriminator, and finally the decoding of the payload.

use figment::Figment;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{Kind, Outcome, OutcomeError, OutcomeResult, Polarity};

const VALUE_KEY: &str = "value";
const TYPE_KEY: &str = "type";

impl<T: DeserializeOwned> Outcome<T> {
    /// Builds a success from a record after validating it.
    ///
    /// # Examples
    ///
    /// ```
    /// use service_outcome::{Kind, Outcome, serde_json::json};
    ///
    /// let outcome: Outcome<String> =
    ///     Outcome::try_success(json!({ "value": "saved", "type": "created" }))?;
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.kind(), Some(&Kind::new("created")));
    /// # Ok::<(), service_outcome::OutcomeError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`OutcomeError`] when the record is malformed; see
    /// [`Outcome::try_from_record`].
    pub fn try_success(record: Value) -> OutcomeResult<Self> {
        Self::try_from_record(Polarity::Success, record)
    }

    /// Builds a failure from a record after validating it.
    ///
    /// # Errors
    ///
    /// Returns an [`OutcomeError`] when the record is malformed; see
    /// [`Outcome::try_from_record`].
    pub fn try_failure(record: Value) -> OutcomeResult<Self> {
        Self::try_from_record(Polarity::Failure, record)
    }

    /// Builds an outcome of `polarity` from a record after validating it.
    ///
    /// `null` is accepted as an empty record. A `type` of `null` or `""`
    /// means no discriminator.
    ///
    /// # Errors
    ///
    /// - [`OutcomeError::InvalidRecord`] when the record is not an object.
    /// - [`OutcomeError::MissingArgument`] when `value` is absent.
    /// - [`OutcomeError::UnknownArgument`] for keys other than `value` and
    ///   `type`.
    /// - [`OutcomeError::InvalidType`] when `type` is not a string.
    /// - [`OutcomeError::Decode`] when `value` does not decode into `T`.
    pub fn try_from_record(polarity: Polarity, record: Value) -> OutcomeResult<Self> {
        let outcome = parse_record(record)
            .and_then(|(raw, kind)| decode(raw).map(|decoded| Self::new(polarity, decoded, kind)));
        match &outcome {
            Ok(_) => trace!(%polarity, "outcome record accepted"),
            Err(err) => debug!(%polarity, error = %err, "outcome record rejected"),
        }
        outcome
    }

    /// Extracts a record from `figment` and builds an outcome of `polarity`
    /// from it.
    ///
    /// This lets a record be layered from any provider stack, for example
    /// serialized defaults overridden by environment variables.
    ///
    /// Providers such as [`figment::providers::Env`] parse scalar values
    /// before the record is checked. `OUTCOME_TYPE=404` therefore arrives as
    /// a number and `OUTCOME_TYPE=true` as a boolean; both are rejected with
    /// [`OutcomeError::InvalidType`] like any other non-atom discriminator.
    /// Quote the value (`OUTCOME_TYPE='"404"'`) to keep it a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use service_outcome::{Outcome, Polarity, figment::{Figment, providers::Serialized}};
    /// use service_outcome::serde_json::json;
    ///
    /// let figment = Figment::from(Serialized::defaults(json!({ "value": 7 })));
    /// let outcome: Outcome<u32> = Outcome::try_from_figment(Polarity::Failure, &figment)?;
    /// assert_eq!(outcome, Outcome::failure(7));
    /// # Ok::<(), service_outcome::OutcomeError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::Gathering`] when the providers fail, and
    /// otherwise the same errors as [`Outcome::try_from_record`].
    pub fn try_from_figment(polarity: Polarity, figment: &Figment) -> OutcomeResult<Self> {
        let record: Value = figment.extract().map_err(|e| {
            debug!(%polarity, error = %e, "outcome record could not be gathered");
            OutcomeError::gathering(e)
        })?;
        Self::try_from_record(polarity, record)
    }
}

fn parse_record(record: Value) -> OutcomeResult<(Value, Option<Kind>)> {
    let mut fields = match record {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => return Err(OutcomeError::invalid_record(&other)),
    };
    let value = fields
        .remove(VALUE_KEY)
        .ok_or_else(|| OutcomeError::missing(VALUE_KEY))?;
    let raw_kind = fields.remove(TYPE_KEY);
    if let Some(name) = fields.keys().next() {
        return Err(OutcomeError::unknown(name.as_str()));
    }
    let kind = raw_kind.map(parse_kind).transpose()?.flatten();
    Ok((value, kind))
}

fn parse_kind(raw: Value) -> OutcomeResult<Option<Kind>> {
    match raw {
        Value::Null => Ok(None),
        Value::String(name) if name.is_empty() => Ok(None),
        Value::String(name) => Ok(Some(Kind::new(&name))),
        other => Err(OutcomeError::invalid_type(TYPE_KEY, &other)),
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> OutcomeResult<T> {
    serde_json::from_value(value).map_err(OutcomeError::decode)
}
