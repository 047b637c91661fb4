//! Finance error types.

use thiserror::Error;

/// Result type alias for payment calculations.
pub type FinanceResult<T> = Result<T, FinanceError>;

/// Errors raised by payment calculations.
///
/// Amounts and rates are never validated for sign or size; the only failure
/// is an intermediate value leaving the `Decimal` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinanceError {
    /// An intermediate value exceeded the representable range.
    #[error("Amount too large: {0} overflowed")]
    Overflow(&'static str),
}
