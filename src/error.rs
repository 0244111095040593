//! Error types for catalog and cart operations.

use thiserror::Error;

use crate::types::{LineId, MenuItemId};

/// Errors reported by the catalog and the cart.
///
/// Quantity bounds are not errors; they surface as
/// [`QuantityChange::AtBound`](crate::types::QuantityChange::AtBound).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The item is already in the cart; nothing was added.
    #[error("Item already in cart: {name}")]
    DuplicateItem { name: String },

    /// No line with this id exists in the cart.
    #[error("Order line not found: {0}")]
    LineNotFound(LineId),

    /// No catalog item with this id exists.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(MenuItemId),

    /// A menu item violates its invariants.
    #[error("Invalid menu item: {0}")]
    InvalidItem(String),

    /// Two catalog entries share an id.
    #[error("Duplicate menu item id: {0}")]
    DuplicateMenuId(MenuItemId),

    /// A serialized catalog could not be parsed.
    #[error("Catalog format error: {0}")]
    CatalogFormat(String),
}

impl From<serde_json::Error> for CartError {
    fn from(err: serde_json::Error) -> Self {
        CartError::CatalogFormat(err.to_string())
    }
}
