#![doc(test(attr(deny(warnings))))]

//! Wallet Core holds the data layer of a student wallet app: fixture-backed
//! transactions and users, date and category interpretation, money
//! formatting, monthly aggregation, filtering, and the in-memory session and
//! wallet flows built on top of them.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Wallet Core tracing initialized.");
    });
}
