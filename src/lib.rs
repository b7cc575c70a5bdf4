#![doc(test(attr(deny(warnings))))]

//! Bill Core tracks recurring and one-time financial obligations, decides when
//! due-date reminders fire, and aggregates spending by category and by month.
//!
//! The crate is pure library: storage, notification delivery, and scheduling
//! are trait seams ([`storage::BillStore`], [`notify::Notifier`],
//! [`core::Clock`]) so every date-dependent decision is deterministic under
//! test.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod format;
pub mod notify;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bill Core tracing initialized.");
    });
}
