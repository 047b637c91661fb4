//! VAT, card commission and net settlement calculations.
//!
//! CRITICAL: Rounding rules for stored payment fields:
//! - Round to 2 decimal places, half away from zero
//! - Multiply first, round last
//! - Round every output field from the unrounded values, never from another
//!   rounded field
//!
//! No validation happens here. Negative or zero amounts and rates pass
//! straight through; the caller validates input. All arithmetic is checked,
//! so an amount near `Decimal::MAX` yields [`FinanceError::Overflow`].

use rust_decimal::{Decimal, RoundingStrategy};
use tutora_shared::types::money::MONEY_DECIMAL_PLACES;

use super::error::{FinanceError, FinanceResult};
use super::types::{CommissionBreakdown, MoneyBreakdown, PaymentRates, VatBreakdown};

/// Rounds an amount to cents, half away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount * rate_percent / 100`, unrounded.
pub fn percent_of(amount: Decimal, rate_percent: Decimal) -> FinanceResult<Decimal> {
    amount
        .checked_mul(rate_percent)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(FinanceError::Overflow("percentage"))
}

fn checked_add(a: Decimal, b: Decimal, what: &'static str) -> FinanceResult<Decimal> {
    a.checked_add(b).ok_or(FinanceError::Overflow(what))
}

/// Payment fee calculator.
pub struct FeeCalculator;

impl FeeCalculator {
    /// Adds VAT at `vat_rate` percent to `amount`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tutora_core::finance::FeeCalculator;
    ///
    /// let result = FeeCalculator::calculate_vat(dec!(100), dec!(18)).unwrap();
    /// assert_eq!(result.vat, dec!(18));
    /// assert_eq!(result.total, dec!(118));
    /// ```
    pub fn calculate_vat(amount: Decimal, vat_rate: Decimal) -> FinanceResult<VatBreakdown> {
        let vat = percent_of(amount, vat_rate)?;
        let total = checked_add(amount, vat, "total")?;

        Ok(VatBreakdown {
            amount: round_money(amount),
            vat: round_money(vat),
            total: round_money(total),
        })
    }

    /// Adds card commission at `commission_rate` percent to `amount`.
    pub fn calculate_commission(
        amount: Decimal,
        commission_rate: Decimal,
    ) -> FinanceResult<CommissionBreakdown> {
        let commission = percent_of(amount, commission_rate)?;
        let total = checked_add(amount, commission, "total")?;

        Ok(CommissionBreakdown {
            amount: round_money(amount),
            commission: round_money(commission),
            total: round_money(total),
        })
    }

    /// Settles a gross payment into commission, VAT and net amount.
    ///
    /// Commission applies whenever its rate is positive. VAT applies only to
    /// invoiced payments with a positive rate; a non-invoiced payment never
    /// carries VAT even when a rate is supplied.
    pub fn calculate_net_amount(
        gross_amount: Decimal,
        rates: PaymentRates,
        is_invoiced: bool,
    ) -> FinanceResult<MoneyBreakdown> {
        let commission = if rates.commission_rate > Decimal::ZERO {
            percent_of(gross_amount, rates.commission_rate)?
        } else {
            Decimal::ZERO
        };

        let vat = if is_invoiced && rates.vat_rate > Decimal::ZERO {
            percent_of(gross_amount, rates.vat_rate)?
        } else {
            Decimal::ZERO
        };

        let net_amount = gross_amount
            .checked_sub(commission)
            .and_then(|after_commission| after_commission.checked_sub(vat))
            .ok_or(FinanceError::Overflow("net amount"))?;

        Ok(MoneyBreakdown {
            gross_amount: round_money(gross_amount),
            commission: round_money(commission),
            vat: round_money(vat),
            net_amount: round_money(net_amount),
        })
    }
}
