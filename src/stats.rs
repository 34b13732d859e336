// 📊 Statistics Aggregator
// Whole-set totals, current/previous month comparison and shared group helpers

use crate::model::{round2, Category, Transaction};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weekday labels in canonical chart order.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// ============================================================================
// SPENDING STATS
// ============================================================================

/// Read-only aggregate over one transaction set. Recomputed fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingStats {
    pub total_spent: f64,
    pub total_transactions: usize,
    pub average_transaction: f64,
    pub largest_transaction: f64,
    pub favorite_category: String,
    pub this_month_spending: f64,
    pub prev_month_spending: f64,
    pub transactions_this_month: usize,
    pub daily_average: f64,
    pub statement_period: String,
    pub spending_change: f64,
}

/// Compute spending statistics for `transactions` relative to `today`.
///
/// "This month" is the calendar month of `today`; "previous month" wraps
/// December→January across the year boundary. The daily average divides this
/// month's spend by `min(30, record count)` — record count, not distinct
/// calendar days (the statement builder uses the distinct-day convention; the
/// two are intentionally different). The statement period is the fixed 30-day
/// window ending at `today`, regardless of data span.
pub fn analyze_spending(transactions: &[Transaction], today: NaiveDate) -> SpendingStats {
    let (this_year, this_month) = (today.year(), today.month());
    let (prev_year, prev_month) = if this_month == 1 {
        (this_year - 1, 12)
    } else {
        (this_year, this_month - 1)
    };

    let in_month = |tx: &&Transaction, year: i32, month: u32| {
        tx.date.year() == year && tx.date.month() == month
    };

    let this_month_txs: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| in_month(tx, this_year, this_month))
        .collect();
    let this_month_spending: f64 = this_month_txs.iter().map(|tx| tx.amount).sum();

    let prev_month_spending: f64 = transactions
        .iter()
        .filter(|tx| in_month(tx, prev_year, prev_month))
        .map(|tx| tx.amount)
        .sum();

    let days_in_current_month = this_month_txs.len().min(30);
    let daily_average = if days_in_current_month > 0 {
        this_month_spending / days_in_current_month as f64
    } else {
        0.0
    };

    let total_spent: f64 = transactions.iter().map(|tx| tx.amount).sum();
    let average_transaction = if transactions.is_empty() {
        0.0
    } else {
        total_spent / transactions.len() as f64
    };
    let largest_transaction = transactions
        .iter()
        .map(|tx| tx.amount)
        .fold(0.0_f64, f64::max);

    let statement_start = today - Duration::days(30);

    SpendingStats {
        total_spent: round2(total_spent),
        total_transactions: transactions.len(),
        average_transaction: round2(average_transaction),
        largest_transaction: round2(largest_transaction),
        favorite_category: modal_category(transactions)
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        this_month_spending: round2(this_month_spending),
        prev_month_spending: round2(prev_month_spending),
        transactions_this_month: this_month_txs.len(),
        daily_average: round2(daily_average),
        statement_period: format!(
            "{} to {}",
            statement_start.format("%Y-%m-%d"),
            today.format("%Y-%m-%d")
        ),
        spending_change: round2(this_month_spending - prev_month_spending),
    }
}

// ============================================================================
// GROUP / REDUCE HELPERS
// ============================================================================

/// Total amount per category, sorted descending by amount. Categories with no
/// records are omitted. Ties keep first-encountered order.
pub fn category_totals(transactions: &[Transaction]) -> Vec<(Category, f64)> {
    let mut totals: HashMap<Category, f64> = HashMap::new();
    let mut order: Vec<Category> = Vec::new();

    for tx in transactions {
        if !totals.contains_key(&tx.category) {
            order.push(tx.category);
        }
        *totals.entry(tx.category).or_insert(0.0) += tx.amount;
    }

    let mut result: Vec<(Category, f64)> = order
        .into_iter()
        .map(|category| (category, round2(totals[&category])))
        .collect();
    // Stable sort keeps first-encountered order among equal totals
    result.sort_by(|a, b| b.1.total_cmp(&a.1));
    result
}

/// Most frequent category, ties broken by first-encountered order.
/// `None` for an empty set.
pub fn modal_category(transactions: &[Transaction]) -> Option<Category> {
    let mut counts: HashMap<Category, usize> = HashMap::new();
    let mut order: Vec<Category> = Vec::new();

    for tx in transactions {
        if !counts.contains_key(&tx.category) {
            order.push(tx.category);
        }
        *counts.entry(tx.category).or_insert(0) += 1;
    }

    // max_by_key would keep the last maximum; ties must keep the first
    let mut best: Option<Category> = None;
    let mut best_count = 0;
    for category in order {
        let count = counts[&category];
        if count > best_count {
            best = Some(category);
            best_count = count;
        }
    }
    best
}

/// Mean amount per weekday, indexed Monday=0…Sunday=6. Weekdays with no
/// records yield 0.
pub fn weekday_means(transactions: &[Transaction]) -> [f64; 7] {
    let mut sums = [0.0_f64; 7];
    let mut counts = [0_usize; 7];

    for tx in transactions {
        let index = tx.date.weekday().num_days_from_monday() as usize;
        sums[index] += tx.amount;
        counts[index] += 1;
    }

    let mut means = [0.0_f64; 7];
    for i in 0..7 {
        if counts[i] > 0 {
            means[i] = round2(sums[i] / counts[i] as f64);
        }
    }
    means
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(date: &str, amount: f64, merchant: &str, category: Category) -> Transaction {
        Transaction {
            date: date.parse().unwrap(),
            amount,
            merchant: merchant.to_string(),
            category,
        }
    }

    #[test]
    fn test_three_record_scenario() {
        let transactions = vec![
            tx("2024-01-05", 50.0, "Groceries", Category::FoodAndDining),
            tx("2024-01-05", 100.0, "Amazon", Category::Shopping),
            tx("2024-02-10", 20.0, "Netflix", Category::Entertainment),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();

        let stats = analyze_spending(&transactions, today);
        assert_eq!(stats.total_spent, 170.0);
        assert_eq!(stats.total_transactions, 3);
        assert_eq!(stats.average_transaction, 56.67);
        assert_eq!(stats.largest_transaction, 100.0);
        // Three-way tie resolves to the first category encountered
        assert_eq!(stats.favorite_category, "Food & Dining");
        assert_eq!(stats.this_month_spending, 20.0);
        assert_eq!(stats.prev_month_spending, 150.0);
        assert_eq!(stats.transactions_this_month, 1);
        assert_eq!(stats.daily_average, 20.0);
        assert_eq!(stats.spending_change, -130.0);
    }

    #[test]
    fn test_empty_set() {
        let stats = analyze_spending(&[], NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(stats.total_spent, 0.0);
        assert_eq!(stats.total_transactions, 0);
        assert_eq!(stats.average_transaction, 0.0);
        assert_eq!(stats.largest_transaction, 0.0);
        assert_eq!(stats.favorite_category, "N/A");
        assert_eq!(stats.daily_average, 0.0);
        assert_eq!(stats.spending_change, 0.0);
    }

    #[test]
    fn test_statement_period_is_fixed_30_day_window() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let stats = analyze_spending(&[], today);
        assert_eq!(stats.statement_period, "2024-05-16 to 2024-06-15");
    }

    #[test]
    fn test_previous_month_wraps_year_boundary() {
        let transactions = vec![
            tx("2024-01-10", 30.0, "Rent", Category::BillsAndUtilities),
            tx("2023-12-20", 80.0, "Airline", Category::Travel),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let stats = analyze_spending(&transactions, today);
        assert_eq!(stats.this_month_spending, 30.0);
        assert_eq!(stats.prev_month_spending, 80.0);
        assert_eq!(stats.spending_change, -50.0);
    }

    #[test]
    fn test_daily_average_divides_by_record_count() {
        // Two records on the same day still divide by 2, not by 1
        let transactions = vec![
            tx("2024-06-10", 40.0, "Gym", Category::Healthcare),
            tx("2024-06-10", 20.0, "Pharmacy", Category::Healthcare),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let stats = analyze_spending(&transactions, today);
        assert_eq!(stats.daily_average, 30.0);
    }

    #[test]
    fn test_modal_category_tie_break() {
        let transactions = vec![
            tx("2024-03-01", 10.0, "Movies", Category::Entertainment),
            tx("2024-03-02", 10.0, "Amazon", Category::Shopping),
            tx("2024-03-03", 10.0, "Games", Category::Entertainment),
            tx("2024-03-04", 10.0, "Electronics", Category::Shopping),
        ];
        assert_eq!(modal_category(&transactions), Some(Category::Entertainment));
        assert_eq!(modal_category(&[]), None);
    }

    #[test]
    fn test_category_totals_sorted_descending() {
        let transactions = vec![
            tx("2024-03-01", 10.0, "Movies", Category::Entertainment),
            tx("2024-03-02", 500.0, "Rent", Category::BillsAndUtilities),
            tx("2024-03-03", 25.0, "Games", Category::Entertainment),
        ];

        let totals = category_totals(&transactions);
        assert_eq!(totals[0], (Category::BillsAndUtilities, 500.0));
        assert_eq!(totals[1], (Category::Entertainment, 35.0));
    }

    #[test]
    fn test_weekday_means_defaults_to_zero() {
        // 2024-06-10 is a Monday
        let transactions = vec![
            tx("2024-06-10", 10.0, "Parking", Category::Transportation),
            tx("2024-06-10", 30.0, "Gas Station", Category::Transportation),
        ];

        let means = weekday_means(&transactions);
        assert_eq!(means[0], 20.0);
        for mean in &means[1..] {
            assert_eq!(*mean, 0.0);
        }
    }
}
