//! Property-based tests for payment calculations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::apportion::apportion_fee;
use super::calculator::{FeeCalculator, round_money};
use super::types::PaymentRates;

/// Strategy to generate amounts from 0.001 to 1,000,000.000 with sub-cent digits.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|mils| Decimal::new(mils, 3))
}

/// Strategy to generate rates from 0.00% to 50.00%.
fn any_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=5000i64).prop_map(|bp| Decimal::new(bp, 2))
}

/// Strategy covering the whole `Decimal` range, including values near MAX and MIN.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
}

fn one_cent() -> Decimal {
    Decimal::new(1, 2)
}

fn has_at_most_two_decimals(value: Decimal) -> bool {
    value == value.round_dp(2)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every VAT field carries at most two decimal places.
    #[test]
    fn prop_vat_fields_rounded(amount in any_amount(), rate in any_rate()) {
        let result = FeeCalculator::calculate_vat(amount, rate).unwrap();
        prop_assert!(has_at_most_two_decimals(result.amount));
        prop_assert!(has_at_most_two_decimals(result.vat));
        prop_assert!(has_at_most_two_decimals(result.total));
    }

    /// total - vat recovers the amount within one cent.
    #[test]
    fn prop_vat_total_minus_vat_is_amount(amount in any_amount(), rate in any_rate()) {
        let result = FeeCalculator::calculate_vat(amount, rate).unwrap();
        prop_assert!((result.total - result.vat - result.amount).abs() <= one_cent());
    }

    /// total - commission recovers the amount within one cent.
    #[test]
    fn prop_commission_total_minus_commission_is_amount(amount in any_amount(), rate in any_rate()) {
        let result = FeeCalculator::calculate_commission(amount, rate).unwrap();
        prop_assert!((result.total - result.commission - result.amount).abs() <= one_cent());
    }

    /// Non-invoiced payments never carry VAT.
    #[test]
    fn prop_not_invoiced_has_no_vat(
        amount in any_amount(),
        commission_rate in any_rate(),
        vat_rate in any_rate(),
    ) {
        let result = FeeCalculator::calculate_net_amount(
            amount,
            PaymentRates::new(commission_rate, vat_rate),
            false,
        ).unwrap();
        prop_assert_eq!(result.vat, Decimal::ZERO);
    }

    /// Net equals gross minus fees within rounding of the three deducted parts.
    #[test]
    fn prop_net_is_gross_minus_fees(
        amount in any_amount(),
        commission_rate in any_rate(),
        vat_rate in any_rate(),
        is_invoiced in any::<bool>(),
    ) {
        let result = FeeCalculator::calculate_net_amount(
            amount,
            PaymentRates::new(commission_rate, vat_rate),
            is_invoiced,
        ).unwrap();
        let recomputed = result.gross_amount - result.commission - result.vat;
        prop_assert!((result.net_amount - recomputed).abs() <= one_cent() * Decimal::from(2));
        prop_assert!(result.net_amount <= result.gross_amount);
    }

    /// Any input either settles with rounded fields or reports overflow; nothing panics.
    #[test]
    fn prop_full_range_never_panics(
        amount in any_decimal(),
        commission_rate in any_decimal(),
        vat_rate in any_decimal(),
    ) {
        let rates = PaymentRates::new(commission_rate, vat_rate);
        if let Ok(result) = FeeCalculator::calculate_net_amount(amount, rates, true) {
            prop_assert!(has_at_most_two_decimals(result.commission));
            prop_assert!(has_at_most_two_decimals(result.vat));
        }
        if let Ok(result) = FeeCalculator::calculate_vat(amount, vat_rate) {
            prop_assert!(has_at_most_two_decimals(result.total));
        }
    }

    /// Calculations are deterministic.
    #[test]
    fn prop_calculations_are_deterministic(amount in any_amount(), rate in any_rate()) {
        prop_assert_eq!(
            FeeCalculator::calculate_vat(amount, rate),
            FeeCalculator::calculate_vat(amount, rate)
        );
        prop_assert_eq!(
            FeeCalculator::calculate_net_amount(amount, PaymentRates::new(rate, rate), true),
            FeeCalculator::calculate_net_amount(amount, PaymentRates::new(rate, rate), true)
        );
    }

    /// Apportioned shares always sum to the rounded total and differ by at most a cent.
    #[test]
    fn prop_apportion_sum_invariant(amount in any_amount(), count in 1usize..40) {
        let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates: Vec<chrono::NaiveDate> = start.iter_days().take(count).collect();
        let shares = apportion_fee(amount, &dates);

        let sum: Decimal = shares.iter().map(|s| s.amount).sum();
        prop_assert_eq!(sum, round_money(amount));

        let max = shares.iter().map(|s| s.amount).max().unwrap_or_default();
        let min = shares.iter().map(|s| s.amount).min().unwrap_or_default();
        prop_assert!(max - min <= one_cent());
    }
}
