//! Domain type representing a single financial obligation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::BillError;

use super::Category;

/// Recurrence periods the application recognises, in months.
pub const KNOWN_FREQUENCIES: [u32; 4] = [1, 3, 6, 12];

/// A single obligation, one-time or recurring.
///
/// `id` is assigned by storage on insert; `0` marks a bill that has not been
/// persisted yet. `frequency_months == 0` means one-time; `1`, `3`, `6` and
/// `12` denote monthly, quarterly, half-yearly and yearly recurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    pub category: Category,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub frequency_months: u32,
}

impl Bill {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        due_date: DateTime<Utc>,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            amount,
            due_date,
            category,
            notes: String::new(),
            created_at,
            frequency_months: 0,
        }
    }

    pub fn with_frequency(mut self, frequency_months: u32) -> Self {
        self.frequency_months = frequency_months;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Returns `true` when the bill renews instead of being destroyed on payment.
    pub fn is_recurring(&self) -> bool {
        self.frequency_months > 0
    }

    /// Returns `true` when the bill has been assigned a storage identity.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Checks the structural invariants required before persistence.
    pub fn validate(&self) -> Result<(), BillError> {
        if self.name.trim().is_empty() {
            return Err(BillError::Validation("bill name must not be empty".into()));
        }
        if self.amount <= 0.0 {
            return Err(BillError::Validation(format!(
                "bill amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    /// Human-readable recurrence label for the canonical frequencies.
    pub fn frequency_label(&self) -> &'static str {
        match self.frequency_months {
            0 => "One-time",
            1 => "Monthly",
            3 => "Quarterly",
            6 => "Half-yearly",
            12 => "Yearly",
            _ => "Custom",
        }
    }
}
