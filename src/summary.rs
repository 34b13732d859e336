// 🤖 Narrative Summarizer
// Fills the fixed five-section spending summary with computed figures

use crate::model::{fmt_money, Transaction};
use crate::stats::{category_totals, weekday_means, SpendingStats, WEEKDAYS};

/// Produce the natural-language spending summary for one transaction set.
///
/// Percentage change recovers to 0 when there is no previous-month spend; the
/// direction word is "Increase" only for a strictly positive change.
pub fn generate_summary(stats: &SpendingStats, transactions: &[Transaction]) -> String {
    let totals = category_totals(transactions);
    let (top_category, top_category_amount) = totals
        .first()
        .map(|(category, amount)| (category.as_str(), *amount))
        .unwrap_or(("N/A", 0.0));

    let means = weekday_means(transactions);
    let mut highest_day_index = 0;
    for i in 1..means.len() {
        if means[i] > means[highest_day_index] {
            highest_day_index = i;
        }
    }
    let highest_day = WEEKDAYS[highest_day_index];
    let highest_day_amount = means[highest_day_index];

    let change_percentage = if stats.prev_month_spending > 0.0 {
        (stats.this_month_spending - stats.prev_month_spending) / stats.prev_month_spending
            * 100.0
    } else {
        0.0
    };
    let direction = if change_percentage > 0.0 {
        "Increase"
    } else {
        "Decrease"
    };

    format!(
        "💰 **Spending Overview**: You've spent {} across {} transactions, averaging {} per transaction.\n\
         \n\
         🏆 **Top Category**: {} is your highest spending category at {}. Current month spending: {}.\n\
         \n\
         📈 **Monthly Comparison**: {} of {:.1}% from last month ({} → {}).\n\
         \n\
         📊 **Daily Patterns**: You spend the most on {}s ({} average). Largest single transaction: {}.\n\
         \n\
         💡 **Budget Insight**: Consider allocating specific budgets for {} and monitoring daily spending on {}s.",
        fmt_money(stats.total_spent),
        stats.total_transactions,
        fmt_money(stats.average_transaction),
        top_category,
        fmt_money(top_category_amount),
        fmt_money(stats.this_month_spending),
        direction,
        change_percentage.abs(),
        fmt_money(stats.prev_month_spending),
        fmt_money(stats.this_month_spending),
        highest_day,
        fmt_money(highest_day_amount),
        fmt_money(stats.largest_transaction),
        top_category,
        highest_day,
    )
}

// ============================================================================
// TESTS
// ============================================================================
