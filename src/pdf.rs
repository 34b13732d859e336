// 📄 Statement PDF Renderer
// Fixed-layout letter page: header, summary block, paginated transaction listing

use crate::model::Transaction;
use crate::statement::StatementSummary;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use printpdf::{BuiltinFont, Mm, PdfDocument, PdfLayerReference, Pt};

// Letter page in points (8.5" x 11")
const PAGE_WIDTH_PT: f64 = 612.0;
const PAGE_HEIGHT_PT: f64 = 792.0;

// Listing pagination: break when the cursor drops below this line
const BOTTOM_MARGIN_PT: f64 = 100.0;

fn pt(value: f64) -> Mm {
    Mm::from(Pt(value as f32))
}

fn page_size() -> (Mm, Mm) {
    (pt(PAGE_WIDTH_PT), pt(PAGE_HEIGHT_PT))
}

/// Attachment filename for a statement generated on `today`,
/// e.g. `monthly_statement_202406.pdf`.
pub fn statement_filename(today: NaiveDate) -> String {
    format!("monthly_statement_{}{:02}.pdf", today.year(), today.month())
}

/// Render the monthly statement as PDF bytes.
///
/// Layout: "Monthly Bank Statement" header with the statement period, a
/// four-line summary block, then one listing line per transaction, continuing
/// onto fresh pages when the current page runs out of vertical space.
pub fn render_statement_pdf(
    summary: &StatementSummary,
    transactions: &[Transaction],
) -> Result<Vec<u8>> {
    let (width, height) = page_size();
    let (doc, first_page, first_layer) =
        PdfDocument::new("Monthly Bank Statement", width, height, "Layer 1");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("Failed to load Helvetica")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("Failed to load Helvetica-Bold")?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    // Header
    layer.use_text(
        "Monthly Bank Statement",
        16.0,
        pt(100.0),
        pt(PAGE_HEIGHT_PT - 100.0),
        &bold,
    );
    layer.use_text(
        format!("Statement Period: {}", summary.statement_period),
        12.0,
        pt(100.0),
        pt(PAGE_HEIGHT_PT - 130.0),
        &regular,
    );

    // Summary block
    layer.use_text("Summary", 14.0, pt(100.0), pt(PAGE_HEIGHT_PT - 180.0), &bold);

    let summary_lines = [
        format!("Total Spending: ${:.2}", summary.current_month_spending),
        format!("Number of Transactions: {}", summary.transactions_this_month),
        format!("Daily Average: ${:.2}", summary.daily_average),
        format!(
            "Top Category: {} (${:.2})",
            summary.top_category, summary.top_category_amount
        ),
    ];

    let mut y_position = PAGE_HEIGHT_PT - 210.0;
    for line in &summary_lines {
        layer.use_text(line.as_str(), 12.0, pt(120.0), pt(y_position), &regular);
        y_position -= 25.0;
    }

    // Transaction listing
    layer.use_text(
        "Recent Transactions",
        14.0,
        pt(100.0),
        pt(y_position - 30.0),
        &bold,
    );
    y_position -= 60.0;

    for tx in transactions {
        if y_position < BOTTOM_MARGIN_PT {
            layer = add_listing_page(&doc, width, height);
            y_position = PAGE_HEIGHT_PT - 100.0;
        }

        let line = format!(
            "{} - {} - {} - ${:.2}",
            tx.date.format("%Y-%m-%d"),
            tx.merchant,
            tx.category,
            tx.amount
        );
        layer.use_text(line, 10.0, pt(120.0), pt(y_position), &regular);
        y_position -= 20.0;
    }

    doc.save_to_bytes().context("Failed to serialize PDF")
}

fn add_listing_page(
    doc: &printpdf::PdfDocumentReference,
    width: Mm,
    height: Mm,
) -> PdfLayerReference {
    let (page, layer) = doc.add_page(width, height, "Layer 1");
    doc.get_page(page).get_layer(layer)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::statement::build_statement;

    fn tx(date: &str, amount: f64, merchant: &str, category: Category) -> Transaction {
        Transaction {
            date: date.parse().unwrap(),
            amount,
            merchant: merchant.to_string(),
            category,
        }
    }

    #[test]
    fn test_renders_pdf_bytes() {
        let transactions = vec![
            tx("2024-06-12", 40.0, "Groceries", Category::FoodAndDining),
            tx("2024-06-03", 60.0, "Amazon", Category::Shopping),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let (summary, subset) = build_statement(&transactions, today).unwrap();

        let bytes = render_statement_pdf(&summary, &subset).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_long_listing_paginates() {
        // Enough rows to force at least one page break
        let transactions: Vec<Transaction> = (1..=28)
            .map(|day| {
                tx(
                    &format!("2024-06-{:02}", day),
                    10.0,
                    "Coffee Shop",
                    Category::FoodAndDining,
                )
            })
            .cycle()
            .take(60)
            .collect();
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let (summary, subset) = build_statement(&transactions, today).unwrap();

        let short = render_statement_pdf(&summary, &subset[..2]).unwrap();
        let long = render_statement_pdf(&summary, &subset).unwrap();
        assert!(long.len() > short.len());
        assert!(long.starts_with(b"%PDF"));
    }

    #[test]
    fn test_statement_filename_encodes_year_month() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(statement_filename(today), "monthly_statement_202406.pdf");

        let january = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(statement_filename(january), "monthly_statement_202501.pdf");
    }
}
