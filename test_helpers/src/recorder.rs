//! Recording callbacks for hook tests.
//!
//! A [`HookRecorder`] hands out callbacks that remember every payload they are
//! called with, so a test can assert how often a hook fired and with what.
//!
//! # Examples
//!
//! ```
//! use service_outcome_test_helpers::recorder::HookRecorder;
//!
//! let recorder = HookRecorder::new();
//! let record = recorder.callback();
//! record(&7);
//! assert_eq!(recorder.calls(), 1);
//! assert_eq!(recorder.values(), [7]);
//! ```

use std::cell::RefCell;

/// Collects the payloads passed to the callbacks it creates.
#[derive(Debug)]
pub struct HookRecorder<T> {
    seen: RefCell<Vec<T>>,
}

impl<T> Default for HookRecorder<T> {
    fn default() -> Self {
        Self {
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> HookRecorder<T> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` as one invocation.
    pub fn record(&self, value: &T) {
        self.seen.borrow_mut().push(value.clone());
    }

    /// Returns a callback that records each payload it receives.
    pub fn callback(&self) -> impl Fn(&T) + '_ {
        move |value| self.record(value)
    }

    /// Number of recorded invocations.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.seen.borrow().len()
    }

    /// Payloads recorded so far, in invocation order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.seen.borrow().clone()
    }
}
