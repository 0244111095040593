//! Outcome of placing an order.
//!
//! Placing an order only empties the cart. The summary is an in-memory
//! value describing what was cleared; nothing is stored or sent anywhere.

use rust_decimal::Decimal;

use crate::types::price::format_price;

/// Snapshot of a cart taken just before it was cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Number of distinct lines
    pub line_count: usize,

    /// Sum of all line quantities
    pub item_count: u64,

    /// Rounded order total
    pub total: Decimal,
}

impl OrderSummary {
    /// Total formatted with two decimal places
    pub fn total_display(&self) -> String {
        format_price(self.total)
    }
}

/// Result of [`Cart::place_order`](crate::cart::Cart::place_order)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOrderOutcome {
    /// The cart held lines; they were accepted and cleared
    Placed(OrderSummary),
    /// The cart was empty; nothing changed
    EmptyCart,
}

impl PlaceOrderOutcome {
    /// Returns true if an order was accepted
    pub fn is_placed(&self) -> bool {
        matches!(self, PlaceOrderOutcome::Placed(_))
    }

    /// The summary, if an order was accepted
    pub fn summary(&self) -> Option<&OrderSummary> {
        match self {
            PlaceOrderOutcome::Placed(summary) => Some(summary),
            PlaceOrderOutcome::EmptyCart => None,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
