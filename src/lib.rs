//! # Kiosk Cart
//!
//! In-memory order cart model for a point-of-sale kiosk.
//!
//! ## Architecture
//!
//! The model consists of:
//! - **Types**: Core data structures (MenuItem, Category, OrderLine)
//! - **Catalog**: Read-only menu with category filtering
//! - **Cart**: Order lines with slab-based storage, totals, order placement
//! - **Session**: Explicit session context owning one catalog and one cart
//!
//! ## Design Principles
//!
//! 1. **No Floating Point**: Prices and totals use `rust_decimal::Decimal`
//! 2. **No Panics on Stale Ids**: Unknown lines are reported, not unwrapped
//! 3. **Derived Values On Demand**: Line totals and menus are never cached
//! 4. **Synchronous Execution**: Single owner, no locks, no async

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: MenuItem, Category, OrderLine
pub mod types;

/// Error taxonomy
pub mod error;

/// Menu catalog
pub mod catalog;

/// Cart: order lines and order placement
pub mod cart;

/// Session context
pub mod session;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use cart::{Cart, OrderSummary, PlaceOrderOutcome};
pub use catalog::Catalog;
pub use error::CartError;
pub use session::KioskSession;
pub use types::{Category, LineId, MenuItem, MenuItemId, OrderLine, QuantityChange};
