#![doc(test(attr(deny(warnings))))]

//! FinDash Core models a personal-banking dashboard: payees and scheduled
//! bill payments, transfers behind a confirmation step, and the read-only
//! account and spending views around them.

pub mod cli;
pub mod config;
pub mod confirm;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod seed;
pub mod store;
pub mod time;
pub mod utils;
pub mod validation;

pub use crate::core::Dashboard;
pub use crate::validation::{
    validate_external_transfer, validate_internal_transfer, validate_payee,
    validate_scheduled_payment, FieldErrors,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FinDash tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
