//! Steps exercising hook selection and chaining.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use service_outcome::{Kind, Outcome, Polarity};

use super::helpers::{parse_kind, parse_polarity};
use crate::fixtures::HookContext;

fn attach(hook_context: &HookContext, polarity: Polarity, kind: Option<Kind>) -> Result<()> {
    let outcome = hook_context
        .outcome
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("outcome missing"))?;
    let mut fired = hook_context.fired.take().unwrap_or_default();
    let mut record = |value: &u32| fired.push(*value);
    let returned = match (polarity, kind) {
        (Polarity::Success, None) => outcome.on_success(&mut record),
        (Polarity::Success, Some(wanted)) => outcome.on_success_of(wanted, &mut record),
        (Polarity::Failure, None) => outcome.on_failure(&mut record),
        (Polarity::Failure, Some(wanted)) => outcome.on_failure_of(wanted, &mut record),
    };
    let returned_original = std::ptr::eq(returned, &outcome);
    hook_context.fired.set(fired);
    let intact = hook_context.chain_intact.take().unwrap_or(true);
    hook_context.chain_intact.set(intact && returned_original);
    Ok(())
}

#[given("a {polarity} outcome with value {value:u32} and type {kind}")]
fn build_outcome(
    hook_context: &HookContext,
    polarity: String,
    value: u32,
    kind: String,
) -> Result<()> {
    let outcome = Outcome::new(parse_polarity(&polarity)?, value, parse_kind(&kind));
    hook_context.outcome.set(outcome);
    Ok(())
}

#[when("a {polarity} hook is attached")]
fn attach_plain_hook(hook_context: &HookContext, polarity: String) -> Result<()> {
    attach(hook_context, parse_polarity(&polarity)?, None)
}

#[when("a {polarity} hook for {kind} is attached")]
fn attach_discriminated_hook(
    hook_context: &HookContext,
    polarity: String,
    kind: String,
) -> Result<()> {
    let wanted = parse_kind(&kind).ok_or_else(|| anyhow!("a discriminated hook needs a kind"))?;
    attach(hook_context, parse_polarity(&polarity)?, Some(wanted))
}

#[then("{count:usize} hooks fired")]
fn assert_fired(hook_context: &HookContext, count: usize) -> Result<()> {
    let fired = hook_context
        .fired
        .with_ref(Vec::len)
        .unwrap_or_default();
    ensure!(fired == count, "expected {count} hooks to fire, saw {fired}");
    Ok(())
}

#[then("every fired hook received {value:u32}")]
fn assert_payloads(hook_context: &HookContext, value: u32) -> Result<()> {
    let fired = hook_context
        .fired
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("no hook fired"))?;
    ensure!(
        fired.iter().all(|seen| *seen == value),
        "hooks received {fired:?}, expected only {value}"
    );
    Ok(())
}

#[then("every hook returned the original outcome")]
fn assert_chain_intact(hook_context: &HookContext) -> Result<()> {
    let intact = hook_context
        .chain_intact
        .take()
        .ok_or_else(|| anyhow!("no hook was attached"))?;
    ensure!(intact, "a hook returned something other than the outcome");
    Ok(())
}
