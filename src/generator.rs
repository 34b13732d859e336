// 🎲 Record Generator
// Fabricates a synthetic transaction set weighted toward recent, small purchases

use crate::model::{round2, Category, Transaction};
use chrono::{Duration, Local, NaiveDate};
use rand::Rng;

/// Default number of records per generated set.
pub const DEFAULT_RECORD_COUNT: usize = 150;

/// Share of amounts drawn from the lower band of the category range.
const SMALL_PURCHASE_PROBABILITY: f64 = 0.8;

/// Share of date offsets drawn from the first 30 days of the window.
const RECENT_DATE_PROBABILITY: f64 = 0.6;

/// Generate `count` transactions dated relative to the local calendar date,
/// using a non-deterministic random source.
pub fn generate_transactions(count: usize) -> Vec<Transaction> {
    generate_with(count, &mut rand::thread_rng(), Local::now().date_naive())
}

/// Generate `count` transactions from an explicit random source and reference
/// date. Seed the source for deterministic output.
///
/// Every record satisfies: `amount > 0` within its category range (two decimal
/// places), merchant drawn from the category vocabulary, date within
/// `[today - 90d, today]`. The result is sorted descending by date.
pub fn generate_with<R: Rng>(count: usize, rng: &mut R, today: NaiveDate) -> Vec<Transaction> {
    let start_date = today - Duration::days(90);
    let mut transactions = Vec::with_capacity(count);

    for _ in 0..count {
        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        let merchants = category.merchants();
        let merchant = merchants[rng.gen_range(0..merchants.len())];

        let (min_amt, max_amt) = category.amount_range();

        // Two-tier distribution: frequent small purchases, rare large ones
        let amount = if rng.gen::<f64>() < SMALL_PURCHASE_PROBABILITY {
            round2(rng.gen_range(min_amt..=max_amt * 0.4))
        } else {
            round2(rng.gen_range(max_amt * 0.4..=max_amt))
        };

        // Two-tier date offset from the start of the 90-day window
        let offset_days: i64 = if rng.gen::<f64>() < RECENT_DATE_PROBABILITY {
            rng.gen_range(0..=30)
        } else {
            rng.gen_range(31..=90)
        };

        transactions.push(Transaction {
            date: start_date + Duration::days(offset_days),
            amount,
            merchant: merchant.to_string(),
            category,
        });
    }

    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_exact_record_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_with(0, &mut rng, fixed_today()).len(), 0);
        assert_eq!(generate_with(1, &mut rng, fixed_today()).len(), 1);
        assert_eq!(generate_with(150, &mut rng, fixed_today()).len(), 150);
    }

    #[test]
    fn test_amounts_positive_and_in_category_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let transactions = generate_with(500, &mut rng, fixed_today());

        for tx in &transactions {
            let (min, max) = tx.category.amount_range();
            assert!(tx.amount > 0.0, "amount must be positive: {}", tx.amount);
            assert!(
                tx.amount >= min && tx.amount <= max,
                "{} outside {:?} range for {}",
                tx.amount,
                (min, max),
                tx.category
            );
            // Two decimal places
            assert_eq!(tx.amount, round2(tx.amount));
        }
    }

    #[test]
    fn test_dates_within_90_day_window() {
        let today = fixed_today();
        let mut rng = StdRng::seed_from_u64(42);
        let transactions = generate_with(500, &mut rng, today);

        let start = today - Duration::days(90);
        for tx in &transactions {
            assert!(tx.date >= start && tx.date <= today, "date {} outside window", tx.date);
        }
    }

    #[test]
    fn test_merchant_belongs_to_category_vocabulary() {
        let mut rng = StdRng::seed_from_u64(11);
        let transactions = generate_with(300, &mut rng, fixed_today());

        for tx in &transactions {
            assert!(
                tx.category.merchants().contains(&tx.merchant.as_str()),
                "merchant {:?} not in vocabulary of {}",
                tx.merchant,
                tx.category
            );
        }
    }

    #[test]
    fn test_sorted_descending_by_date() {
        let mut rng = StdRng::seed_from_u64(3);
        let transactions = generate_with(200, &mut rng, fixed_today());

        for pair in transactions.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_with(50, &mut StdRng::seed_from_u64(99), fixed_today());
        let b = generate_with(50, &mut StdRng::seed_from_u64(99), fixed_today());
        assert_eq!(a, b);
    }
}
