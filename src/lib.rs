#![doc(test(attr(deny(warnings))))]

//! Wizard Core drives the CashCompass guided budget-creation flow: the step
//! state machine, category selection rules, 50/30/20 allocation computation,
//! and resumable session persistence that host applications build upon.

pub mod allocation;
pub mod config;
pub mod domain;
pub mod errors;
pub mod selection;
pub mod services;
pub mod storage;
pub mod taxonomy;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Wizard Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
