//! Due-date arithmetic for recurring bills.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Rolls a recurring bill's due date forward to the first occurrence at or
/// after `now`.
///
/// The date always advances by at least one cycle, even when the current due
/// date is still in the future; a renewal is never a no-op. Bills missed for
/// several cycles catch up in one call instead of replaying every missed
/// occurrence.
///
/// # Panics
///
/// Panics when `frequency_months` is zero. One-time bills never renew; callers
/// must branch on recurrence before dispatching here.
pub fn advance_due_date(
    current_due: DateTime<Utc>,
    frequency_months: u32,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    assert!(
        frequency_months >= 1,
        "advance_due_date requires a recurring frequency"
    );

    let mut next = shift_months(current_due, frequency_months as i32);
    while next < now {
        next = shift_months(next, frequency_months as i32);
    }
    next
}

/// Adds calendar months to a timestamp, preserving day-of-month where the
/// target month has enough days and clamping to the last valid day otherwise.
/// Time-of-day carries over unchanged.
pub fn shift_months(from: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let date = shift_month_naive(from.date_naive(), months);
    DateTime::from_naive_utc_and_offset(date.and_time(from.time()), Utc)
}

fn shift_month_naive(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day)
        .expect("clamped day is always valid for the target month")
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always valid");
    (first_next - Duration::days(1)).day()
}
