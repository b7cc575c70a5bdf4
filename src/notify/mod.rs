//! Reminder delivery seam.

use crate::errors::BillError;

/// Delivers a due-date reminder keyed by bill identity.
///
/// Implementations must be idempotent per key: re-notifying the same key
/// replaces or refreshes the existing reminder rather than duplicating it.
/// The reminder scan re-fires for every bill still inside the notice window,
/// so delivery is at-least-once.
pub trait Notifier: Send + Sync {
    fn notify(&self, key: i64, title: &str, body: &str) -> Result<(), BillError>;
}

/// Notifier that emits reminders to the tracing log.
///
/// Useful as a default sink and in environments without an OS notification
/// surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, key: i64, title: &str, body: &str) -> Result<(), BillError> {
        tracing::info!(bill_id = key, title, body, "bill reminder");
        Ok(())
    }
}
