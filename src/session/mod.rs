//! Session context: one catalog, one cart and the selected menu filter.
//!
//! Presentation code holds a [`KioskSession`] and routes every query and
//! mutation through it instead of sharing the cart by reference.
//!
//! ## Example
//!
//! ```
//! use kiosk_cart::session::KioskSession;
//! use kiosk_cart::types::Category;
//!
//! let mut session = KioskSession::sample();
//!
//! session.select_category(Category::Dessert);
//! let cake = session.visible_menu()[0].id;
//!
//! session.add_menu_item(cake).unwrap();
//! assert_eq!(session.cart().len(), 1);
//!
//! assert!(session.place_order().is_placed());
//! assert!(session.cart().is_empty());
//! ```

use rust_decimal::Decimal;

use crate::cart::{Cart, PlaceOrderOutcome};
use crate::catalog::Catalog;
use crate::error::CartError;
use crate::types::{Category, LineId, MenuItem, MenuItemId, OrderLine, QuantityChange};

/// Session-scoped kiosk state
#[derive(Debug, Clone, Default)]
pub struct KioskSession {
    catalog: Catalog,
    cart: Cart,
    selected: Category,
}

impl KioskSession {
    /// Start a session over `catalog` with an empty cart and the `All` filter
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            selected: Category::All,
        }
    }

    /// Start a session over the sample catalog
    pub fn sample() -> Self {
        Self::new(Catalog::sample())
    }

    /// The session's catalog
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session's cart
    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // ========================================================================
    // Menu
    // ========================================================================

    /// Currently selected category filter
    #[inline]
    pub fn selected_category(&self) -> Category {
        self.selected
    }

    /// Change the category filter
    pub fn select_category(&mut self, category: Category) {
        self.selected = category;
    }

    /// Items shown under the selected category
    pub fn visible_menu(&self) -> Vec<&MenuItem> {
        self.catalog.menu_for(self.selected)
    }

    // ========================================================================
    // Cart operations
    // ========================================================================

    /// Add a catalog item to the cart by id
    ///
    /// # Errors
    ///
    /// - [`CartError::MenuItemNotFound`] if the catalog has no such item
    /// - [`CartError::DuplicateItem`] if the item is already in the cart
    pub fn add_menu_item(&mut self, item_id: MenuItemId) -> Result<LineId, CartError> {
        let item = self
            .catalog
            .get(item_id)
            .cloned()
            .ok_or(CartError::MenuItemNotFound(item_id))?;
        self.cart.add_item(item)
    }

    /// See [`Cart::increment_quantity`]
    pub fn increment_quantity(&mut self, line_id: LineId) -> Result<QuantityChange, CartError> {
        self.cart.increment_quantity(line_id)
    }

    /// See [`Cart::decrement_quantity`]
    pub fn decrement_quantity(&mut self, line_id: LineId) -> Result<QuantityChange, CartError> {
        self.cart.decrement_quantity(line_id)
    }

    /// See [`Cart::remove_line`]
    pub fn remove_line(&mut self, line_id: LineId) -> Result<OrderLine, CartError> {
        self.cart.remove_line(line_id)
    }

    /// See [`Cart::total_price`]
    pub fn total_price(&self) -> Decimal {
        self.cart.total_price()
    }

    /// See [`Cart::place_order`]
    pub fn place_order(&mut self) -> PlaceOrderOutcome {
        self.cart.place_order()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
