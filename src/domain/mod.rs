//! Pure domain models for bill tracking. No I/O, no storage.

pub mod bill;
pub mod category;
pub mod history;

pub use bill::{Bill, KNOWN_FREQUENCIES};
pub use category::Category;
pub use history::PaymentHistoryEntry;
