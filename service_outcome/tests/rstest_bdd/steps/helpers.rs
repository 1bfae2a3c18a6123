//! Parsing helpers shared by the step modules.

use anyhow::{Result, bail};
use service_outcome::{Kind, Polarity};
use test_helpers::text::{normalize_scalar, optional_scalar};

/// Parses `success` or `failure` from a step placeholder.
pub fn parse_polarity(raw: &str) -> Result<Polarity> {
    match normalize_scalar(raw).as_str() {
        "success" => Ok(Polarity::Success),
        "failure" => Ok(Polarity::Failure),
        other => bail!("unknown polarity `{other}`"),
    }
}

/// Parses a quoted discriminator, or `none` for no discriminator.
pub fn parse_kind(raw: &str) -> Option<Kind> {
    optional_scalar(raw).map(Kind::from)
}
