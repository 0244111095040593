//! Price utilities.
//!
//! ## Overview
//!
//! All prices and totals use `rust_decimal::Decimal` to avoid floating-point
//! errors. A menu price of 9.99 is stored exactly, so quantity × price and
//! the running total never drift.
//!
//! ## Rounding
//!
//! Totals are rounded to [`CENTS_DP`] decimal places with standard rounding:
//! multiply by 100, round to the nearest integer (half away from zero),
//! divide by 100.
//!
//! ## Examples
//!
//! ```
//! use kiosk_cart::types::price::{round_to_cents, format_price};
//! use rust_decimal::Decimal;
//!
//! let price = Decimal::new(999, 2); // 9.99
//! let total = round_to_cents(price * Decimal::from(2));
//! assert_eq!(format_price(total), "19.98");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept in a rounded total
pub const CENTS_DP: u32 = 2;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Returns true if `d` may be used as a menu price (non-negative)
#[inline]
pub fn is_valid_price(d: Decimal) -> bool {
    d >= Decimal::ZERO
}

/// Round to whole cents
///
/// Midpoints round away from zero, so 0.125 becomes 0.13.
pub fn round_to_cents(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(CENTS_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a price with exactly two decimal places
///
/// # Example
///
/// ```
/// use kiosk_cart::types::price::format_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_price(Decimal::from(5)), "5.00");
/// assert_eq!(format_price(Decimal::new(24965, 3)), "24.97");
/// ```
pub fn format_price(d: Decimal) -> String {
    format!("{:.2}", round_to_cents(d))
}

// ============================================================================
// Arithmetic Functions
// ============================================================================

/// Price of `quantity` units
///
/// # Returns
///
/// * `Some(Decimal)` - price × quantity, unrounded
/// * `None` - If overflow occurs
pub fn checked_line_amount(price: Decimal, quantity: u32) -> Option<Decimal> {
    price.checked_mul(Decimal::from(quantity))
}

/// Sum a sequence of amounts
///
/// # Returns
///
/// * `Some(Decimal)` - The unrounded sum (zero for an empty sequence)
/// * `None` - If overflow occurs
pub fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}

// ============================================================================
// Unit Tests
// ============================================================================
