//! Read-only aggregation over a bill collection snapshot.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};

use crate::domain::{Bill, Category, KNOWN_FREQUENCIES};

/// Dashboard summary line for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlySummary {
    pub total: f64,
    pub count: usize,
}

/// Recurring bills split by cadence, with their monthly-equivalent total.
#[derive(Debug, Clone, Default)]
pub struct FixedCostBreakdown {
    pub monthly: Vec<Bill>,
    pub quarterly: Vec<Bill>,
    pub half_yearly: Vec<Bill>,
    pub yearly: Vec<Bill>,
    pub monthly_equivalent: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums amounts per category for bills due in the same calendar month and
    /// year as `month_of`.
    ///
    /// Raw sums are returned for every category present; filtering out
    /// non-positive entries is left to the presentation layer.
    pub fn category_totals(bills: &[Bill], month_of: DateTime<Utc>) -> HashMap<Category, f64> {
        let mut totals = HashMap::new();
        for bill in bills.iter().filter(|b| same_month(b.due_date, month_of)) {
            *totals.entry(bill.category).or_insert(0.0) += bill.amount;
        }
        totals
    }

    /// Monthly-equivalent fixed cost across recurring bills: each bill
    /// contributes `amount / frequency_months`, amortized linearly over its
    /// cycle (a yearly 1200 contributes 100 per month).
    ///
    /// Inputs are assumed recurring. A frequency outside the recognised set
    /// contributes 0 rather than failing.
    pub fn monthly_equivalent(bills: &[Bill]) -> f64 {
        bills
            .iter()
            .map(|bill| {
                if KNOWN_FREQUENCIES.contains(&bill.frequency_months) {
                    bill.amount / bill.frequency_months as f64
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// Total amount and bill count for the calendar month of `month_of`,
    /// regardless of recurrence.
    pub fn monthly_summary(bills: &[Bill], month_of: DateTime<Utc>) -> MonthlySummary {
        let mut summary = MonthlySummary::default();
        for bill in bills.iter().filter(|b| same_month(b.due_date, month_of)) {
            summary.total += bill.amount;
            summary.count += 1;
        }
        summary
    }

    /// Splits recurring bills into cadence buckets for the fixed-costs view.
    /// One-time bills are ignored.
    pub fn fixed_cost_breakdown(bills: &[Bill]) -> FixedCostBreakdown {
        let recurring: Vec<Bill> = bills.iter().filter(|b| b.is_recurring()).cloned().collect();
        let mut breakdown = FixedCostBreakdown {
            monthly_equivalent: Self::monthly_equivalent(&recurring),
            ..FixedCostBreakdown::default()
        };
        for bill in recurring {
            match bill.frequency_months {
                1 => breakdown.monthly.push(bill),
                3 => breakdown.quarterly.push(bill),
                6 => breakdown.half_yearly.push(bill),
                12 => breakdown.yearly.push(bill),
                _ => {}
            }
        }
        breakdown
    }
}

fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
