//! Use-case layer tying bill renewal to history archival.
//!
//! The recurring vs. one-time branch lives here and nowhere else: callers
//! hand a bill to [`LifecycleService::settle`] and get back a tagged outcome
//! instead of re-deriving the branch at every call site.

use chrono::{DateTime, Utc};

use crate::core::recurrence::advance_due_date;
use crate::domain::{Bill, PaymentHistoryEntry};
use crate::storage::{BillStore, HistoryStore};

use super::ServiceResult;

/// Outcome of settling a bill: exactly one of two variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// The bill renewed in place; the carried copy has the advanced due date.
    Renewed(Bill),
    /// A one-time bill was paid off and should be removed from the active set.
    Completed,
}

pub struct LifecycleService;

impl LifecycleService {
    /// Archives a history snapshot, then advances the due date by at least one
    /// recurrence cycle, catching up any missed cycles.
    ///
    /// # Panics
    ///
    /// Panics when the bill is one-time. Use [`LifecycleService::mark_paid`]
    /// for the non-recurring path, or [`LifecycleService::settle`] to branch.
    pub fn renew(bill: &Bill, now: DateTime<Utc>) -> (PaymentHistoryEntry, Bill) {
        assert!(bill.is_recurring(), "renew requires a recurring bill");
        let entry = PaymentHistoryEntry::snapshot(bill, now);
        let mut renewed = bill.clone();
        renewed.due_date = advance_due_date(bill.due_date, bill.frequency_months, now);
        (entry, renewed)
    }

    /// Archives a history snapshot for a one-time bill. The caller is expected
    /// to delete the bill afterwards; no date advance occurs.
    pub fn mark_paid(bill: &Bill, now: DateTime<Utc>) -> PaymentHistoryEntry {
        PaymentHistoryEntry::snapshot(bill, now)
    }

    /// Settles a bill of either kind, producing the history snapshot and the
    /// tagged follow-up action.
    pub fn settle(bill: &Bill, now: DateTime<Utc>) -> (PaymentHistoryEntry, Settlement) {
        if bill.is_recurring() {
            let (entry, renewed) = Self::renew(bill, now);
            (entry, Settlement::Renewed(renewed))
        } else {
            (Self::mark_paid(bill, now), Settlement::Completed)
        }
    }

    /// Settles a bill and writes the outcome through the stores: one history
    /// insert plus either one bill update (renewed) or one delete (completed).
    /// Store failures surface unchanged; no retry happens at this layer.
    pub fn settle_and_store(
        bills: &dyn BillStore,
        history: &dyn HistoryStore,
        bill: &Bill,
        now: DateTime<Utc>,
    ) -> ServiceResult<Settlement> {
        let (entry, outcome) = Self::settle(bill, now);
        history.append(entry)?;
        match &outcome {
            Settlement::Renewed(renewed) => {
                bills.update(renewed)?;
                tracing::info!(
                    bill_id = renewed.id,
                    due_date = %renewed.due_date,
                    "bill renewed"
                );
            }
            Settlement::Completed => {
                bills.delete(bill.id)?;
                tracing::info!(bill_id = bill.id, "one-time bill paid and removed");
            }
        }
        Ok(outcome)
    }
}
