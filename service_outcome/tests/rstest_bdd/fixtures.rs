//! Shared fixtures for the behavioural scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use service_outcome::serde_json::Value;
use service_outcome::{Outcome, OutcomeError};

/// State shared by the hook dispatch steps.
#[derive(Debug, Default, ScenarioState)]
pub struct HookContext {
    /// Outcome under test.
    pub outcome: Slot<Outcome<u32>>,
    /// Payloads received by the hooks that fired, in order.
    pub fired: Slot<Vec<u32>>,
    /// Whether every hook so far returned the original outcome.
    pub chain_intact: Slot<bool>,
}

/// State shared by the factory steps.
#[derive(Debug, Default, ScenarioState)]
pub struct FactoryContext {
    /// Record handed to the factory.
    pub record: Slot<Value>,
    /// What the factory produced.
    pub result: Slot<Result<Outcome<u32>, OutcomeError>>,
}

/// Creates a clean hook context.
#[fixture]
pub fn hook_context() -> HookContext {
    HookContext::default()
}

/// Creates a clean factory context.
#[fixture]
pub fn factory_context() -> FactoryContext {
    FactoryContext::default()
}
