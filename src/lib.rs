#![doc(test(attr(deny(warnings))))]

//! Ledger Core turns a flat list of recorded money movements into
//! period-scoped balances, credit-card statement attribution, and
//! category/account rollups for higher level finance dashboards.

pub mod engine;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
