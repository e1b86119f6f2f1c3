//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic runs on `Decimal` internally and converts back to `f64`
//! for storage/serialization, rounded to 2 decimal places.

use crate::orders::traits::OrderError;
use rust_decimal::prelude::*;
use shared::models::CartLine;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), OrderError> {
    if !value.is_finite() {
        return Err(OrderError::InvalidOperation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a cart line before it enters an order
pub fn validate_line(line: &CartLine) -> Result<(), OrderError> {
    require_finite(line.price, "price")?;
    if line.price < 0.0 {
        return Err(OrderError::InvalidOperation(format!(
            "price must be non-negative, got {}",
            line.price
        )));
    }
    if line.price > MAX_PRICE {
        return Err(OrderError::InvalidOperation(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, line.price
        )));
    }

    if line.quantity <= 0 {
        return Err(OrderError::InvalidOperation(format!(
            "quantity must be positive, got {}",
            line.quantity
        )));
    }
    if line.quantity > MAX_QUANTITY {
        return Err(OrderError::InvalidOperation(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, line.quantity
        )));
    }

    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total: price × quantity
#[inline]
pub fn line_total(line: &CartLine) -> Decimal {
    to_decimal(line.price) * Decimal::from(line.quantity)
}

/// Order total over a cart snapshot
pub fn compute_total(lines: &[CartLine]) -> f64 {
    to_f64(lines.iter().map(line_total).sum())
}
