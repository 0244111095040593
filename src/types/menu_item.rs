//! Menu items: the read-only catalog entries a customer can order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::types::price::is_valid_price;
use crate::types::Category;

/// Menu item identifier
pub type MenuItemId = u64;

/// A catalog entry available for ordering.
///
/// ## Invariants
///
/// - `price` is non-negative
/// - `category` is never [`Category::All`]
///
/// Both are checked by [`MenuItem::new`] and [`MenuItem::validate`].
///
/// ## Example
///
/// ```
/// use kiosk_cart::types::{Category, MenuItem};
/// use rust_decimal::Decimal;
///
/// let cake = MenuItem::new(
///     7,                          // id
///     "chocolate_cake",           // image reference
///     "Chocolate Cake",           // name
///     Decimal::new(599, 2),       // price: 5.99
///     Category::Dessert,
/// ).unwrap();
///
/// assert_eq!(cake.category, Category::Dessert);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique item identifier
    pub id: MenuItemId,

    /// Opaque image reference resolved by the presentation layer
    pub image: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Menu category (never `All`)
    pub category: Category,
}

impl MenuItem {
    /// Create a validated menu item
    ///
    /// # Errors
    ///
    /// [`CartError::InvalidItem`] if the price is negative or the category is `All`.
    pub fn new(
        id: MenuItemId,
        image: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        category: Category,
    ) -> Result<Self, CartError> {
        let item = Self {
            id,
            image: image.into(),
            name: name.into(),
            price,
            category,
        };
        item.validate()?;
        Ok(item)
    }

    /// Check the item invariants
    pub fn validate(&self) -> Result<(), CartError> {
        if !is_valid_price(self.price) {
            return Err(CartError::InvalidItem(format!(
                "{}: negative price {}",
                self.name, self.price
            )));
        }
        if self.category.is_filter() {
            return Err(CartError::InvalidItem(format!(
                "{}: category All is a filter, not an item category",
                self.name
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_new() {
        let item = MenuItem::new(1, "burger", "Burger", Decimal::new(899, 2), Category::Main).unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.image, "burger");
        assert_eq!(item.name, "Burger");
        assert_eq!(item.price, Decimal::new(899, 2));
        assert_eq!(item.category, Category::Main);
    }

    #[test]
    fn test_free_item_is_valid() {
        assert!(MenuItem::new(1, "water", "Water", Decimal::ZERO, Category::Side).is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = MenuItem::new(1, "x", "Refund", Decimal::new(-100, 2), Category::Side).unwrap_err();
        assert!(matches!(err, CartError::InvalidItem(_)));
    }

    #[test]
    fn test_all_category_rejected() {
        let err = MenuItem::new(1, "x", "Combo", Decimal::ONE, Category::All).unwrap_err();
        assert!(matches!(err, CartError::InvalidItem(_)));
    }
}
