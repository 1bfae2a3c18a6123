//! Steps exercising the validated factory.

use anyhow::{Context as _, Result, anyhow, bail, ensure};
use rstest_bdd_macros::{given, then, when};
use service_outcome::Outcome;
use service_outcome::serde_json::{self, Value};
use test_helpers::text::{normalize_scalar, unquote};

use super::helpers::{parse_kind, parse_polarity};
use crate::fixtures::FactoryContext;

#[given("an outcome record {record}")]
fn store_record(factory_context: &FactoryContext, record: String) -> Result<()> {
    let parsed: Value =
        serde_json::from_str(unquote(&record)).context("feature record must be valid JSON")?;
    factory_context.record.set(parsed);
    Ok(())
}

#[when("a {polarity} is built from the record")]
fn build_from_record(factory_context: &FactoryContext, polarity: String) -> Result<()> {
    let record = factory_context
        .record
        .take()
        .ok_or_else(|| anyhow!("record missing"))?;
    let result = Outcome::try_from_record(parse_polarity(&polarity)?, record);
    factory_context.result.set(result);
    Ok(())
}

#[then("construction fails with {message}")]
fn assert_failure(factory_context: &FactoryContext, message: String) -> Result<()> {
    let result = factory_context
        .result
        .take()
        .ok_or_else(|| anyhow!("factory result missing"))?;
    let err = match result {
        Ok(outcome) => bail!("expected the factory to fail, got {outcome:?}"),
        Err(failure) => failure,
    };
    let expected = normalize_scalar(&message);
    ensure!(
        err.to_string() == expected,
        "expected `{expected}`, got `{err}`"
    );
    Ok(())
}

#[then("the outcome is a {polarity} with value {value:u32} and type {kind}")]
fn assert_outcome(
    factory_context: &FactoryContext,
    polarity: String,
    value: u32,
    kind: String,
) -> Result<()> {
    let outcome = factory_context
        .result
        .take()
        .ok_or_else(|| anyhow!("factory result missing"))??;
    let expected = Outcome::new(parse_polarity(&polarity)?, value, parse_kind(&kind));
    ensure!(outcome == expected, "expected {expected:?}, got {outcome:?}");
    Ok(())
}
