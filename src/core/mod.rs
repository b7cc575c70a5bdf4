pub mod clock;
pub mod recurrence;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use recurrence::advance_due_date;
