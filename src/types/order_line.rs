//! Order lines: one cart entry referencing a menu item with a quantity.
//!
//! ## Quantity Bounds
//!
//! A line's quantity stays within [`MIN_QUANTITY`]..=[`MAX_QUANTITY`].
//! Moving past either bound is a no-op reported as [`QuantityChange::AtBound`];
//! a line never reaches quantity zero and is only removed explicitly.

use rust_decimal::Decimal;

use crate::types::price::checked_line_amount;
use crate::types::MenuItem;

/// Order line identifier (assigned by the cart)
pub type LineId = u64;

/// Lowest quantity a line can hold
pub const MIN_QUANTITY: u32 = 1;

/// Highest quantity a line can hold
pub const MAX_QUANTITY: u32 = 100;

/// Result of a quantity adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Quantity moved to the contained value
    Updated(u32),
    /// Quantity was already at a bound and is unchanged
    AtBound(u32),
}

impl QuantityChange {
    /// Quantity after the adjustment
    pub fn quantity(self) -> u32 {
        match self {
            QuantityChange::Updated(q) | QuantityChange::AtBound(q) => q,
        }
    }

    /// Returns true if the quantity changed
    pub fn is_updated(self) -> bool {
        matches!(self, QuantityChange::Updated(_))
    }
}

/// One entry in the cart.
///
/// The menu item is held by value so a line stays meaningful even if the
/// presentation layer drops its catalog reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Unique line identifier within a cart
    pub id: LineId,

    /// The ordered menu item
    pub item: MenuItem,

    quantity: u32,
}

impl OrderLine {
    /// Create a line with quantity 1
    pub fn new(id: LineId, item: MenuItem) -> Self {
        Self {
            id,
            item,
            quantity: MIN_QUANTITY,
        }
    }

    /// Current quantity
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// quantity × unit price, unrounded
    ///
    /// Saturates at `Decimal::MAX`; see [`checked_line_total`](Self::checked_line_total).
    pub fn line_total(&self) -> Decimal {
        self.checked_line_total().unwrap_or(Decimal::MAX)
    }

    /// quantity × unit price, or `None` on overflow
    pub fn checked_line_total(&self) -> Option<Decimal> {
        checked_line_amount(self.item.price, self.quantity)
    }

    /// Add one unit unless already at [`MAX_QUANTITY`]
    pub fn increment(&mut self) -> QuantityChange {
        if self.quantity < MAX_QUANTITY {
            self.quantity += 1;
            QuantityChange::Updated(self.quantity)
        } else {
            QuantityChange::AtBound(self.quantity)
        }
    }

    /// Remove one unit unless already at [`MIN_QUANTITY`]
    pub fn decrement(&mut self) -> QuantityChange {
        if self.quantity > MIN_QUANTITY {
            self.quantity -= 1;
            QuantityChange::Updated(self.quantity)
        } else {
            QuantityChange::AtBound(self.quantity)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn line(price: Decimal) -> OrderLine {
        let item = MenuItem::new(1, "fries", "Fries", price, Category::Side).unwrap();
        OrderLine::new(10, item)
    }

    #[test]
    fn test_new_line_has_quantity_one() {
        let line = line(Decimal::new(299, 2));
        assert_eq!(line.id, 10);
        assert_eq!(line.quantity(), 1);
        assert_eq!(line.line_total(), Decimal::new(299, 2));
    }

    #[test]
    fn test_line_total_tracks_quantity() {
        let mut line = line(Decimal::new(999, 2));
        line.increment();
        assert_eq!(line.line_total(), Decimal::new(1998, 2));
        assert_eq!(line.checked_line_total(), Some(Decimal::new(1998, 2)));
    }

    #[test]
    fn test_line_total_saturates_on_overflow() {
        let mut line = line(Decimal::MAX);
        line.increment();
        assert_eq!(line.checked_line_total(), None);
        assert_eq!(line.line_total(), Decimal::MAX);
    }

    #[test]
    fn test_increment_stops_at_max() {
        let mut line = line(Decimal::ONE);
        for expected in 2..=MAX_QUANTITY {
            assert_eq!(line.increment(), QuantityChange::Updated(expected));
        }
        assert_eq!(line.increment(), QuantityChange::AtBound(MAX_QUANTITY));
        assert_eq!(line.quantity(), MAX_QUANTITY);
    }

    #[test]
    fn test_decrement_stops_at_min() {
        let mut line = line(Decimal::ONE);
        assert_eq!(line.decrement(), QuantityChange::AtBound(MIN_QUANTITY));

        line.increment();
        line.increment();
        assert_eq!(line.decrement(), QuantityChange::Updated(2));
        assert_eq!(line.decrement(), QuantityChange::Updated(1));
        assert_eq!(line.decrement(), QuantityChange::AtBound(1));
    }

    #[test]
    fn test_quantity_change_accessors() {
        assert_eq!(QuantityChange::Updated(3).quantity(), 3);
        assert_eq!(QuantityChange::AtBound(100).quantity(), 100);
        assert!(QuantityChange::Updated(3).is_updated());
        assert!(!QuantityChange::AtBound(1).is_updated());
    }
}
