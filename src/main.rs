use anyhow::{Context, Result};
use chrono::Local;
use std::env;
use std::fs;

use spending_analyzer::{
    analyze_spending, build_statement, generate_summary, generate_transactions,
    prepare_chart_data, render_statement_pdf, statement_filename, DEFAULT_RECORD_COUNT,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("statement") => run_statement()?,
        Some("json") => run_json()?,
        _ => run_report()?,
    }

    Ok(())
}

fn run_report() -> Result<()> {
    println!("📊 Spending Analyzer - Terminal Report");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let today = Local::now().date_naive();
    let transactions = generate_transactions(DEFAULT_RECORD_COUNT);
    println!("\n🎲 Generated {} transactions", transactions.len());

    let stats = analyze_spending(&transactions, today);
    println!("\n💵 Total spent:        ${:.2}", stats.total_spent);
    println!("🧮 Transactions:       {}", stats.total_transactions);
    println!("📉 Average:            ${:.2}", stats.average_transaction);
    println!("🏔️  Largest:            ${:.2}", stats.largest_transaction);
    println!("⭐ Favorite category:  {}", stats.favorite_category);
    println!("📅 This month:         ${:.2}", stats.this_month_spending);
    println!("📅 Previous month:     ${:.2}", stats.prev_month_spending);
    println!("🗓️  Daily average:      ${:.2}", stats.daily_average);
    println!("🧾 Statement period:   {}", stats.statement_period);

    println!("\n{}", generate_summary(&stats, &transactions));

    let charts = prepare_chart_data(&transactions);
    println!("\n📈 Spending by category:");
    for point in &charts.category {
        println!("   {:<20} ${:>10.2}", point.label, point.value);
    }
    println!("\n📈 Monthly totals:");
    for point in &charts.monthly {
        println!("   {:<20} ${:>10.2}", point.label, point.value);
    }
    println!("\n📈 Weekday averages:");
    for point in &charts.weekday {
        println!("   {:<20} ${:>10.2}", point.label, point.value);
    }

    Ok(())
}

fn run_statement() -> Result<()> {
    println!("🧾 Generating monthly statement PDF...");

    let today = Local::now().date_naive();
    let transactions = generate_transactions(DEFAULT_RECORD_COUNT);

    let (summary, subset) =
        build_statement(&transactions, today).context("Failed to build statement")?;
    let bytes = render_statement_pdf(&summary, &subset)?;

    let filename = statement_filename(today);
    fs::write(&filename, &bytes).with_context(|| format!("Failed to write {}", filename))?;

    println!("✓ Period: {}", summary.statement_period);
    println!("✓ {} transactions, ${:.2} total", summary.transactions_this_month, summary.current_month_spending);
    println!("✅ Wrote {}", filename);

    Ok(())
}

fn run_json() -> Result<()> {
    let transactions = generate_transactions(DEFAULT_RECORD_COUNT);
    let json = serde_json::to_string_pretty(&transactions)?;
    println!("{}", json);
    Ok(())
}
