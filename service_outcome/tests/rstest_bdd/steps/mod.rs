//! Behavioural step modules registered with `rstest-bdd`.

pub mod factory_steps;
pub mod helpers;
pub mod hook_steps;
