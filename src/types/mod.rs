//! Core data types for the kiosk cart
//!
//! ## Types
//!
//! - [`MenuItem`]: A catalog entry (name, price, category, image reference)
//! - [`Category`]: Main, Side or Dessert, plus the filter pseudo-value `All`
//! - [`OrderLine`]: A cart entry referencing a menu item with a quantity
//! - [`QuantityChange`]: Outcome of a bounded quantity adjustment
//!
//! ## Money
//!
//! Prices are `rust_decimal::Decimal`. See [`price`] for rounding rules.

mod category;
mod menu_item;
mod order_line;
pub mod price;

// Re-export all types at module level
pub use category::Category;
pub use menu_item::{MenuItem, MenuItemId};
pub use order_line::{LineId, OrderLine, QuantityChange, MAX_QUANTITY, MIN_QUANTITY};
