//! The cart: order lines, quantity adjustment, totals and order placement.
//!
//! ## Architecture
//!
//! - **Slab**: O(1) line insertion, removal and lookup by slab key
//! - **HashMap**: Line ID to slab key mapping for O(1) lookup by id
//! - **Vec**: Slab keys in insertion order, since slab keys are reused
//!
//! ## Policies
//!
//! - At most one line per item, compared by item name. Adding an item that
//!   is already present returns [`CartError::DuplicateItem`] and leaves the
//!   existing line's quantity alone.
//! - Quantities stay in [`MIN_QUANTITY`]..=[`MAX_QUANTITY`].
//! - Unknown line ids return [`CartError::LineNotFound`] and never panic.
//!
//! ## Example
//!
//! ```
//! use kiosk_cart::cart::Cart;
//! use kiosk_cart::types::{Category, MenuItem};
//! use rust_decimal::Decimal;
//!
//! let burger = MenuItem::new(1, "burger", "Burger", Decimal::new(999, 2), Category::Main).unwrap();
//! let fries = MenuItem::new(2, "fries", "Fries", Decimal::new(499, 2), Category::Side).unwrap();
//!
//! let mut cart = Cart::new();
//! let line = cart.add_item(burger).unwrap();
//! cart.add_item(fries).unwrap();
//! cart.increment_quantity(line).unwrap();
//!
//! assert_eq!(cart.total_price(), Decimal::new(2497, 2));
//! assert!(cart.place_order().is_placed());
//! assert!(cart.is_empty());
//! ```
//!
//! [`MIN_QUANTITY`]: crate::types::MIN_QUANTITY
//! [`MAX_QUANTITY`]: crate::types::MAX_QUANTITY

pub mod summary;

pub use summary::{OrderSummary, PlaceOrderOutcome};

use std::collections::HashMap;

use rust_decimal::Decimal;
use slab::Slab;
use tracing::{debug, info, warn};

use crate::error::CartError;
use crate::types::price::{checked_sum, round_to_cents};
use crate::types::{LineId, MenuItem, OrderLine, QuantityChange};

/// The ordered collection of order lines for one session
#[derive(Debug, Clone)]
pub struct Cart {
    /// Line storage
    /// Key: slab index, Value: OrderLine
    lines: Slab<OrderLine>,

    /// Slab keys in insertion order
    sequence: Vec<usize>,

    /// Line ID to slab key mapping
    line_index: HashMap<LineId, usize>,

    /// Next line ID; never reset, so ids are not reused after clearing
    next_line_id: LineId,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Create a new empty cart
    pub fn new() -> Self {
        Self {
            lines: Slab::new(),
            sequence: Vec::new(),
            line_index: HashMap::new(),
            next_line_id: 1,
        }
    }

    /// Create a cart with pre-allocated capacity
    ///
    /// ```
    /// use kiosk_cart::cart::Cart;
    ///
    /// let cart = Cart::with_capacity(32);
    /// assert!(cart.capacity() >= 32);
    /// ```
    pub fn with_capacity(line_capacity: usize) -> Self {
        Self {
            lines: Slab::with_capacity(line_capacity),
            sequence: Vec::with_capacity(line_capacity),
            line_index: HashMap::with_capacity(line_capacity),
            next_line_id: 1,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated line slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    /// Number of lines
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities over all lines
    pub fn item_count(&self) -> u64 {
        self.lines().map(|line| u64::from(line.quantity())).sum()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Lines in insertion order
    pub fn lines(&self) -> impl Iterator<Item = &OrderLine> + '_ {
        self.sequence.iter().filter_map(|&key| self.lines.get(key))
    }

    /// Get a line by id
    pub fn line(&self, line_id: LineId) -> Option<&OrderLine> {
        let key = *self.line_index.get(&line_id)?;
        self.lines.get(key)
    }

    /// Returns true if a line references an item with this name
    pub fn contains_item(&self, name: &str) -> bool {
        self.lines().any(|line| line.item.name == name)
    }

    /// Σ quantity × price, rounded to cents
    ///
    /// Saturates at `Decimal::MAX` before rounding.
    pub fn total_price(&self) -> Decimal {
        let sum = checked_sum(self.lines().map(OrderLine::line_total)).unwrap_or(Decimal::MAX);
        round_to_cents(sum)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a line for `item` with quantity 1
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidItem`] if the item has a negative price or the
    ///   `All` category
    /// - [`CartError::DuplicateItem`] if a line already references an item of
    ///   the same name
    ///
    /// The cart is unchanged on error.
    pub fn add_item(&mut self, item: MenuItem) -> Result<LineId, CartError> {
        item.validate()?;
        if self.contains_item(&item.name) {
            debug!(item = %item.name, "item already in cart, add ignored");
            return Err(CartError::DuplicateItem { name: item.name });
        }

        let line_id = self.next_line_id;
        self.next_line_id += 1;

        debug!(line_id, item = %item.name, price = %item.price, "added item to cart");

        let key = self.lines.insert(OrderLine::new(line_id, item));
        self.sequence.push(key);
        self.line_index.insert(line_id, key);

        Ok(line_id)
    }

    /// Add one unit to a line, up to the maximum quantity
    pub fn increment_quantity(&mut self, line_id: LineId) -> Result<QuantityChange, CartError> {
        let change = self.line_mut(line_id)?.increment();
        debug!(line_id, ?change, "increment quantity");
        Ok(change)
    }

    /// Remove one unit from a line, down to the minimum quantity
    pub fn decrement_quantity(&mut self, line_id: LineId) -> Result<QuantityChange, CartError> {
        let change = self.line_mut(line_id)?.decrement();
        debug!(line_id, ?change, "decrement quantity");
        Ok(change)
    }

    /// Remove a line by id
    ///
    /// # Errors
    ///
    /// [`CartError::LineNotFound`] if no such line exists. The cart is unchanged.
    pub fn remove_line(&mut self, line_id: LineId) -> Result<OrderLine, CartError> {
        let Some(key) = self.line_index.remove(&line_id) else {
            warn!(line_id, "remove requested for unknown order line");
            return Err(CartError::LineNotFound(line_id));
        };

        self.sequence.retain(|&k| k != key);
        let line = self.lines.remove(key);
        debug!(line_id, item = %line.item.name, "removed line from cart");
        Ok(line)
    }

    /// Accept the current cart as an order and clear it
    ///
    /// An empty cart is left unchanged and yields [`PlaceOrderOutcome::EmptyCart`].
    pub fn place_order(&mut self) -> PlaceOrderOutcome {
        if self.is_empty() {
            info!("place order requested with an empty cart");
            return PlaceOrderOutcome::EmptyCart;
        }

        let summary = OrderSummary {
            line_count: self.len(),
            item_count: self.item_count(),
            total: self.total_price(),
        };
        info!(
            lines = summary.line_count,
            items = summary.item_count,
            total = %summary.total,
            "order placed"
        );

        self.clear();
        PlaceOrderOutcome::Placed(summary)
    }

    /// Remove all lines
    pub fn clear(&mut self) {
        self.lines.clear();
        self.sequence.clear();
        self.line_index.clear();
    }

    fn line_mut(&mut self, line_id: LineId) -> Result<&mut OrderLine, CartError> {
        let key = match self.line_index.get(&line_id) {
            Some(&key) => key,
            None => {
                warn!(line_id, "quantity change requested for unknown order line");
                return Err(CartError::LineNotFound(line_id));
            }
        };
        self.lines.get_mut(key).ok_or(CartError::LineNotFound(line_id))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, MAX_QUANTITY, MIN_QUANTITY};

    fn item(id: u64, name: &str, cents: i64) -> MenuItem {
        MenuItem::new(id, name.to_lowercase(), name, Decimal::new(cents, 2), Category::Main).unwrap()
    }

    fn names(cart: &Cart) -> Vec<&str> {
        cart.lines().map(|line| line.item.name.as_str()).collect()
    }

    #[test]
    fn test_cart_new() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_with_capacity() {
        let cart = Cart::with_capacity(64);
        assert!(cart.capacity() >= 64);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_appends_with_quantity_one() {
        let mut cart = Cart::new();
        let id = cart.add_item(item(1, "Burger", 899)).unwrap();

        assert_eq!(cart.len(), 1);
        let line = cart.line(id).unwrap();
        assert_eq!(line.quantity(), 1);
        assert_eq!(line.item.name, "Burger");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(item(3, "Salad", 499)).unwrap();
        cart.add_item(item(1, "Burger", 899)).unwrap();
        cart.add_item(item(2, "Fries", 299)).unwrap();

        assert_eq!(names(&cart), ["Salad", "Burger", "Fries"]);
    }

    #[test]
    fn test_add_rejects_unvalidated_items() {
        let mut cart = Cart::new();

        // Struct literals skip MenuItem::new, so the cart checks again
        let refund = MenuItem {
            id: 1,
            image: "refund".into(),
            name: "Refund".into(),
            price: Decimal::new(-500, 2),
            category: Category::Side,
        };
        let combo = MenuItem {
            id: 2,
            image: "combo".into(),
            name: "Combo".into(),
            price: Decimal::new(999, 2),
            category: Category::All,
        };

        assert!(matches!(cart.add_item(refund), Err(CartError::InvalidItem(_))));
        assert!(matches!(cart.add_item(combo), Err(CartError::InvalidItem(_))));
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut cart = Cart::new();
        let id = cart.add_item(item(1, "Burger", 899)).unwrap();
        cart.increment_quantity(id).unwrap();

        let err = cart.add_item(item(1, "Burger", 899)).unwrap_err();
        assert_eq!(err, CartError::DuplicateItem { name: "Burger".into() });

        // No new line and no quantity bump
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(id).unwrap().quantity(), 2);
    }

    #[test]
    fn test_duplicate_detected_by_name() {
        let mut cart = Cart::new();
        cart.add_item(item(1, "Burger", 899)).unwrap();

        // Same name with a different id is still a duplicate
        assert!(cart.add_item(item(99, "Burger", 899)).is_err());
        // Different name with the same id is a new line
        assert!(cart.add_item(item(1, "Veggie Burger", 899)).is_ok());
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_increment_bounded() {
        let mut cart = Cart::new();
        let id = cart.add_item(item(1, "Burger", 899)).unwrap();

        for _ in 0..150 {
            cart.increment_quantity(id).unwrap();
        }
        assert_eq!(cart.line(id).unwrap().quantity(), MAX_QUANTITY);
        assert_eq!(
            cart.increment_quantity(id).unwrap(),
            QuantityChange::AtBound(MAX_QUANTITY)
        );
    }

    #[test]
    fn test_decrement_bounded() {
        let mut cart = Cart::new();
        let id = cart.add_item(item(1, "Burger", 899)).unwrap();

        assert_eq!(
            cart.decrement_quantity(id).unwrap(),
            QuantityChange::AtBound(MIN_QUANTITY)
        );
        cart.increment_quantity(id).unwrap();
        assert_eq!(cart.decrement_quantity(id).unwrap(), QuantityChange::Updated(1));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_quantity_change_unknown_line() {
        let mut cart = Cart::new();
        assert_eq!(cart.increment_quantity(42), Err(CartError::LineNotFound(42)));
        assert_eq!(cart.decrement_quantity(42), Err(CartError::LineNotFound(42)));
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        let a = cart.add_item(item(1, "Burger", 899)).unwrap();
        let b = cart.add_item(item(2, "Fries", 299)).unwrap();
        cart.add_item(item(3, "Salad", 499)).unwrap();

        let removed = cart.remove_line(b).unwrap();
        assert_eq!(removed.item.name, "Fries");
        assert_eq!(names(&cart), ["Burger", "Salad"]);
        assert!(cart.line(b).is_none());
        assert!(cart.line(a).is_some());
    }

    #[test]
    fn test_remove_unknown_line_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(item(1, "Burger", 899)).unwrap();

        assert_eq!(cart.remove_line(999), Err(CartError::LineNotFound(999)));
        assert_eq!(names(&cart), ["Burger"]);
    }

    #[test]
    fn test_remove_twice_reports_not_found() {
        let mut cart = Cart::new();
        let id = cart.add_item(item(1, "Burger", 899)).unwrap();

        assert!(cart.remove_line(id).is_ok());
        assert_eq!(cart.remove_line(id), Err(CartError::LineNotFound(id)));
    }

    #[test]
    fn test_order_kept_after_slab_key_reuse() {
        let mut cart = Cart::new();
        let a = cart.add_item(item(1, "Burger", 899)).unwrap();
        cart.add_item(item(2, "Fries", 299)).unwrap();
        cart.remove_line(a).unwrap();

        // Reuses the freed slab slot but must display last
        cart.add_item(item(3, "Salad", 499)).unwrap();
        assert_eq!(names(&cart), ["Fries", "Salad"]);
    }

    #[test]
    fn test_line_ids_not_reused() {
        let mut cart = Cart::new();
        let a = cart.add_item(item(1, "Burger", 899)).unwrap();
        cart.remove_line(a).unwrap();
        let b = cart.add_item(item(1, "Burger", 899)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_total_price() {
        let mut cart = Cart::new();
        let id = cart.add_item(item(1, "Burger", 999)).unwrap();
        cart.increment_quantity(id).unwrap();
        cart.add_item(item(2, "Fries", 499)).unwrap();

        assert_eq!(cart.total_price(), Decimal::new(2497, 2));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total_price_rounds_to_cents() {
        let mut cart = Cart::new();
        let odd = MenuItem::new(1, "tea", "Tea", Decimal::new(3335, 3), Category::Side).unwrap();
        cart.add_item(odd).unwrap();

        // 3.335 rounds half away from zero
        assert_eq!(cart.total_price(), Decimal::new(334, 2));
    }

    #[test]
    fn test_place_order_clears_cart() {
        let mut cart = Cart::new();
        let id = cart.add_item(item(1, "Burger", 999)).unwrap();
        cart.increment_quantity(id).unwrap();
        cart.add_item(item(2, "Fries", 499)).unwrap();

        let outcome = cart.place_order();
        assert_eq!(
            outcome,
            PlaceOrderOutcome::Placed(OrderSummary {
                line_count: 2,
                item_count: 3,
                total: Decimal::new(2497, 2),
            })
        );
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert!(cart.line(id).is_none());
    }

    #[test]
    fn test_place_order_on_empty_cart() {
        let mut cart = Cart::new();
        assert_eq!(cart.place_order(), PlaceOrderOutcome::EmptyCart);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_reusable_after_order() {
        let mut cart = Cart::new();
        cart.add_item(item(1, "Burger", 899)).unwrap();
        cart.place_order();

        // The same item can be ordered again
        assert!(cart.add_item(item(1, "Burger", 899)).is_ok());
        assert_eq!(cart.len(), 1);
    }
}
