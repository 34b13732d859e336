// 💳 Transaction Model
// Categories, merchant vocabularies, amount ranges and the Transaction record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATEGORY
// ============================================================================

/// The eight spending categories. Every transaction carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Travel")]
    Travel,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::FoodAndDining,
        Category::Shopping,
        Category::Transportation,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Healthcare,
        Category::PersonalCare,
        Category::Travel,
    ];

    /// Display label for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Shopping => "Shopping",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::PersonalCare => "Personal Care",
            Category::Travel => "Travel",
        }
    }

    /// Fixed merchant vocabulary for this category.
    pub fn merchants(self) -> &'static [&'static str] {
        match self {
            Category::FoodAndDining => &[
                "Restaurant",
                "Groceries",
                "Coffee Shop",
                "Fast Food",
                "Supermarket",
                "Food Delivery",
            ],
            Category::Shopping => &[
                "Amazon",
                "Clothing Store",
                "Electronics",
                "Department Store",
                "Online Shopping",
                "Home Goods",
            ],
            Category::Transportation => &[
                "Gas Station",
                "Uber/Lyft",
                "Public Transport",
                "Parking",
                "Car Maintenance",
                "Auto Insurance",
            ],
            Category::Entertainment => &[
                "Netflix",
                "Movies",
                "Concert",
                "Games",
                "Sports",
                "Streaming Services",
            ],
            Category::BillsAndUtilities => &[
                "Electricity",
                "Internet",
                "Phone Bill",
                "Water Bill",
                "Rent",
                "Mortgage",
            ],
            Category::Healthcare => &[
                "Pharmacy",
                "Doctor",
                "Dental",
                "Health Insurance",
                "Gym",
                "Medical",
            ],
            Category::PersonalCare => &["Hair Salon", "Spa", "Cosmetics", "Skincare"],
            Category::Travel => &["Airline", "Hotel", "Vacation", "Travel Agency"],
        }
    }

    /// Realistic (min, max) amount range for this category, in dollars.
    pub fn amount_range(self) -> (f64, f64) {
        match self {
            Category::FoodAndDining => (3.0, 120.0),
            Category::Shopping => (15.0, 450.0),
            Category::Transportation => (8.0, 180.0),
            Category::Entertainment => (9.0, 150.0),
            Category::BillsAndUtilities => (25.0, 800.0),
            Category::Healthcare => (12.0, 300.0),
            Category::PersonalCare => (20.0, 200.0),
            Category::Travel => (50.0, 2000.0),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// One synthetic spending event. Immutable once generated.
///
/// Invariants: `amount > 0` (two decimal places), `merchant` belongs to
/// `category.merchants()`, `date` within the last 90 days at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub merchant: String,
    pub category: Category,
}

// ============================================================================
// MONEY HELPERS
// ============================================================================

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a dollar amount with thousands separators, e.g. `$1,234.56`.
pub fn fmt_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{:02}", sign, grouped, frac)
}

// ============================================================================
// TESTS
// ============================================================================
