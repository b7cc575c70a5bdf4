//! Immutable audit records for settled bills.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Bill, Category};

/// Snapshot of a bill taken at the moment it was paid.
///
/// Fields are copied, not referenced; the source bill may later change or be
/// deleted without affecting history. Entries are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentHistoryEntry {
    #[serde(default)]
    pub id: i64,
    pub bill_name: String,
    pub amount: f64,
    pub category: Category,
    pub payment_date: DateTime<Utc>,
}

impl PaymentHistoryEntry {
    /// Captures a snapshot of `bill` stamped with the wall-clock payment time.
    pub fn snapshot(bill: &Bill, payment_date: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            bill_name: bill.name.clone(),
            amount: bill.amount,
            category: bill.category,
            payment_date,
        }
    }
}
