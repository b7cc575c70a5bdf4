pub mod lifecycle_service;
pub mod reminder_service;
pub mod summary_service;

pub use lifecycle_service::{LifecycleService, Settlement};
pub use reminder_service::{ReminderService, DEFAULT_LOOKAHEAD_DAYS};
pub use summary_service::{FixedCostBreakdown, MonthlySummary, SummaryService};

use crate::errors::BillError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Bill(#[from] BillError),
    #[error("{0}")]
    Invalid(String),
}
