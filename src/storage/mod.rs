pub mod json_backend;

use chrono::{DateTime, Utc};

use crate::domain::{Bill, PaymentHistoryEntry};
use crate::errors::BillError;

pub type Result<T> = std::result::Result<T, BillError>;

/// Abstraction over persistence backends holding the active bill collection.
///
/// Implementations own the entities and are responsible for serializing
/// concurrent writes to the same bill identity; the core assumes at most one
/// logical writer per bill per call.
pub trait BillStore: Send + Sync {
    /// Returns every active bill, ordered by due date ascending.
    fn list_all(&self) -> Result<Vec<Bill>>;
    /// Returns bills whose due date falls within `[from, to]`.
    fn list_in_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Bill>>;
    /// Persists a new bill, assigning its identity. Returns the stored copy.
    fn insert(&self, bill: Bill) -> Result<Bill>;
    /// Replaces the stored bill with the same id.
    fn update(&self, bill: &Bill) -> Result<()>;
    /// Removes the bill with the given id.
    fn delete(&self, id: i64) -> Result<()>;
}

/// Abstraction over the payment history archive.
pub trait HistoryStore: Send + Sync {
    /// Persists an immutable history entry, assigning its identity.
    fn append(&self, entry: PaymentHistoryEntry) -> Result<PaymentHistoryEntry>;
    /// Returns all entries, newest payment first.
    fn entries(&self) -> Result<Vec<PaymentHistoryEntry>>;
    /// Removes every history entry.
    fn clear(&self) -> Result<()>;
}

pub use json_backend::JsonStorage;
