//! Selects bills that need a due-date reminder and fires them.

use chrono::{DateTime, Duration, Utc};

use crate::core::clock::Clock;
use crate::domain::Bill;
use crate::format::{reminder_text, Locale};
use crate::notify::Notifier;
use crate::storage::BillStore;

use super::ServiceResult;

/// Lookahead the periodic scan uses when no override is configured.
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 3;

pub struct ReminderService;

impl ReminderService {
    /// Returns every bill whose due date falls within `lookahead` of `now`.
    ///
    /// Overdue bills are always included: there is no lower bound on how far
    /// in the past the due date may be. A bill due exactly at `now + lookahead`
    /// is inside the window. Output order is unspecified.
    pub fn due_for_notice(bills: &[Bill], now: DateTime<Utc>, lookahead: Duration) -> Vec<Bill> {
        bills
            .iter()
            .filter(|bill| bill.due_date - now <= lookahead)
            .cloned()
            .collect()
    }

    /// One evaluation pass of the periodic reminder job: reads the full bill
    /// collection, selects bills in the notice window, and issues one reminder
    /// per bill keyed by its id.
    ///
    /// Re-running the scan while a bill stays in the window re-fires its
    /// reminder; the notifier's per-key idempotence keeps that from piling up.
    /// Returns the number of reminders issued.
    pub fn run_scan(
        store: &dyn BillStore,
        notifier: &dyn Notifier,
        clock: &dyn Clock,
        lookahead: Duration,
        locale: Locale,
    ) -> ServiceResult<usize> {
        let now = clock.now();
        let bills = store.list_all()?;
        let due = Self::due_for_notice(&bills, now, lookahead);
        for bill in &due {
            let (title, body) = reminder_text(bill, locale);
            notifier.notify(bill.id, &title, &body)?;
        }
        tracing::debug!(
            scanned = bills.len(),
            notified = due.len(),
            "reminder scan complete"
        );
        Ok(due.len())
    }
}
