// Spending Analyzer - Core Library
// Synthetic transactions → statistics → narrative summary → charts → PDF statement

pub mod charts;
pub mod error;
pub mod generator;
pub mod model;
pub mod pdf;
pub mod statement;
pub mod stats;
pub mod summary;

// Re-export commonly used types
pub use charts::{prepare_chart_data, ChartData, SeriesPoint};
pub use error::AnalyzerError;
pub use generator::{generate_transactions, generate_with, DEFAULT_RECORD_COUNT};
pub use model::{fmt_money, round2, Category, Transaction};
pub use pdf::{render_statement_pdf, statement_filename};
pub use statement::{build_statement, StatementSummary};
pub use stats::{
    analyze_spending, category_totals, modal_category, weekday_means, SpendingStats, WEEKDAYS,
};
pub use summary::generate_summary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
