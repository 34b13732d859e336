// 🧾 Statement Builder
// Current-month subset (latest-date fallback) plus its summary block

use crate::error::AnalyzerError;
use crate::model::{round2, Transaction};
use crate::stats::category_totals;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Summary block of one monthly statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementSummary {
    pub current_month_spending: f64,
    pub transactions_this_month: usize,
    pub daily_average: f64,
    pub statement_period: String,
    pub top_category: String,
    pub top_category_amount: f64,
}

/// Build the monthly statement for `transactions` relative to `today`.
///
/// Scopes to the calendar month of `today`; when that month has no records,
/// falls back to all records sharing the latest date in the set. The daily
/// average divides by the count of distinct calendar days in the subset (the
/// aggregator's record-count convention does not apply here). The statement
/// period spans the subset's own date range.
///
/// Returns the summary plus the subset it was computed from, preserving the
/// input's descending date order. Errors with [`AnalyzerError::EmptyInput`]
/// when the input set is empty.
pub fn build_statement(
    transactions: &[Transaction],
    today: NaiveDate,
) -> Result<(StatementSummary, Vec<Transaction>), AnalyzerError> {
    let mut subset: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| tx.date.year() == today.year() && tx.date.month() == today.month())
        .cloned()
        .collect();

    if subset.is_empty() {
        // Fall back to the latest date present in the full set
        let latest = transactions
            .iter()
            .map(|tx| tx.date)
            .max()
            .ok_or(AnalyzerError::EmptyInput)?;
        subset = transactions
            .iter()
            .filter(|tx| tx.date == latest)
            .cloned()
            .collect();
    }

    let total: f64 = subset.iter().map(|tx| tx.amount).sum();

    let distinct_days: HashSet<NaiveDate> = subset.iter().map(|tx| tx.date).collect();
    let daily_average = total / distinct_days.len() as f64;

    // Subset is non-empty here, so min/max always exist
    let earliest = subset.iter().map(|tx| tx.date).min().unwrap_or(today);
    let latest = subset.iter().map(|tx| tx.date).max().unwrap_or(today);

    let totals = category_totals(&subset);
    let (top_category, top_category_amount) = totals
        .first()
        .map(|(category, amount)| (category.as_str().to_string(), *amount))
        .unwrap_or_else(|| ("N/A".to_string(), 0.0));

    let summary = StatementSummary {
        current_month_spending: round2(total),
        transactions_this_month: subset.len(),
        daily_average: round2(daily_average),
        statement_period: format!(
            "{} to {}",
            earliest.format("%Y-%m-%d"),
            latest.format("%Y-%m-%d")
        ),
        top_category,
        top_category_amount,
    };

    Ok((summary, subset))
}

// ============================================================================
// TESTS
// ============================================================================
