//! Environment-driven figments for record tests.
//!
//! Records gathered from the environment need variables that do not leak
//! between tests, so every helper here runs inside a `figment::Jail`.

use anyhow::{Result, anyhow};
use figment::{Figment, Jail, providers::Env};

/// Sets `vars` in a jailed environment, layers variables starting with
/// `prefix` over `base`, and hands the merged figment to `f`.
///
/// The environment is restored once `f` returns. Whatever `f` returns is
/// passed back untouched, so tests can inspect an `Ok` outcome or an error
/// from the factory alike.
///
/// # Examples
///
/// ```
/// use figment::Figment;
/// use service_outcome_test_helpers::env::with_outcome_env;
///
/// let vars = [("OUTCOME_VALUE", "7")];
/// let value = with_outcome_env(Figment::new(), "OUTCOME_", &vars, |figment| {
///     figment.extract_inner::<u32>("value")
/// })??;
/// assert_eq!(value, 7);
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error when the jail cannot be set up.
pub fn with_outcome_env<F, T>(
    base: Figment,
    prefix: &str,
    vars: &[(&str, &str)],
    f: F,
) -> Result<T>
where
    F: FnOnce(&Figment) -> T,
{
    let mut output = None;
    Jail::try_with(|jail| {
        for &(name, value) in vars {
            jail.set_env(name, value);
        }
        output = Some(f(&base.merge(Env::prefixed(prefix))));
        Ok(())
    })
    .map_err(|err| anyhow!("environment jail failed: {err}"))?;
    output.ok_or_else(|| anyhow!("environment jail skipped the closure"))
}
