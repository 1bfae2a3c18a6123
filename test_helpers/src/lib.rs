//! Test helpers shared across crates in the workspace.
//!
//! - [`env`] layers jailed environment variables over a base figment.
//! - [`recorder`] records hook invocations so tests can count them.
//! - [`text`] normalises scalar placeholders captured by behavioural steps.

pub mod env;
pub mod recorder;
pub mod text;
