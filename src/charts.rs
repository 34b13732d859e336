// 📈 Chart Data Preparer
// Pre-aggregated series for the dashboard's category, monthly and weekday charts

use crate::model::{round2, Transaction};
use crate::stats::{category_totals, weekday_means, WEEKDAYS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One labelled value of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// The three series consumed by the visualization layer:
/// category totals (pie), monthly totals (line), weekday averages (bar).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub category: Vec<SeriesPoint>,
    pub monthly: Vec<SeriesPoint>,
    pub weekday: Vec<SeriesPoint>,
}

/// Aggregate `transactions` into the three chart series. Rendering is the
/// caller's concern; this only shapes the data.
pub fn prepare_chart_data(transactions: &[Transaction]) -> ChartData {
    let category = category_totals(transactions)
        .into_iter()
        .map(|(category, amount)| SeriesPoint {
            label: category.as_str().to_string(),
            value: amount,
        })
        .collect();

    // BTreeMap keys sort %Y-%m labels ascending
    let mut monthly_totals: BTreeMap<String, f64> = BTreeMap::new();
    for tx in transactions {
        *monthly_totals
            .entry(tx.date.format("%Y-%m").to_string())
            .or_insert(0.0) += tx.amount;
    }
    let monthly = monthly_totals
        .into_iter()
        .map(|(label, value)| SeriesPoint {
            label,
            value: round2(value),
        })
        .collect();

    let means = weekday_means(transactions);
    let weekday = WEEKDAYS
        .iter()
        .zip(means.iter())
        .map(|(label, value)| SeriesPoint {
            label: label.to_string(),
            value: *value,
        })
        .collect();

    ChartData {
        category,
        monthly,
        weekday,
    }
}

// ============================================================================
// TESTS
// ============================================================================
