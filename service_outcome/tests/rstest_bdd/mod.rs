//! `rstest-bdd` scaffolding for `service_outcome`.
//!
//! Fixtures and step implementations live beside this entrypoint and
//! [`scenarios`] binds the `.feature` files to them, so the behavioural suite
//! runs under `cargo test` with the default harness.

mod fixtures;
mod steps;
