//! Menu catalog with category filtering.
//!
//! The catalog is read-only once built. Items keep the order they were
//! supplied in, and every query returns them in that order.
//!
//! ## Example
//!
//! ```
//! use kiosk_cart::catalog::Catalog;
//! use kiosk_cart::types::Category;
//!
//! let catalog = Catalog::sample();
//!
//! let desserts: Vec<&str> = catalog
//!     .filter_by_category(Category::Dessert)
//!     .iter()
//!     .map(|item| item.name.as_str())
//!     .collect();
//! assert_eq!(desserts, ["Chocolate Cake", "Ice Cream"]);
//!
//! // `All` is handled by the menu view, not the filter
//! assert_eq!(catalog.menu_for(Category::All).len(), catalog.len());
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::CartError;
use crate::types::{Category, MenuItem, MenuItemId};

/// The list of menu items available for ordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from items, validating each one
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidItem`] if any item breaks its invariants
    /// - [`CartError::DuplicateMenuId`] if two items share an id
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id) {
                return Err(CartError::DuplicateMenuId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Load a catalog from a JSON array of menu items
    ///
    /// Prices may be given as strings (`"9.99"`) or numbers.
    ///
    /// ```
    /// use kiosk_cart::catalog::Catalog;
    ///
    /// let json = r#"[
    ///     {"id": 1, "image": "soup", "name": "Soup", "price": "4.50", "category": "Side"}
    /// ]"#;
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CartError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// The demo menu shown by the kiosk
    pub fn sample() -> Self {
        let entry = |id, image: &str, name: &str, cents, category| MenuItem {
            id,
            image: image.to_string(),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            category,
        };

        Self {
            items: vec![
                entry(1, "burger", "Burger", 899, Category::Main),
                entry(2, "pizza", "Pizza", 1099, Category::Main),
                entry(3, "chicken_wrap", "Chicken Wrap", 749, Category::Main),
                entry(4, "fries", "Fries", 299, Category::Side),
                entry(5, "salad", "Salad", 499, Category::Side),
                entry(6, "chocolate_cake", "Chocolate Cake", 599, Category::Dessert),
                entry(7, "ice_cream", "Ice Cream", 399, Category::Dessert),
            ],
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All items in catalog order
    #[inline]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items whose category equals `category`
    ///
    /// No item carries [`Category::All`], so filtering by it yields nothing.
    /// Use [`menu_for`](Self::menu_for) for the menu view.
    pub fn filter_by_category(&self, category: Category) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Items shown for a selected category
    ///
    /// `All` skips filtering and returns the full catalog.
    pub fn menu_for(&self, category: Category) -> Vec<&MenuItem> {
        if category.is_filter() {
            self.items.iter().collect()
        } else {
            self.filter_by_category(category)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
