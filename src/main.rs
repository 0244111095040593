//! Kiosk Cart - Binary Entry Point
//!
//! Walks the sample session through a full order: browse, add, adjust,
//! remove, place. Set `RUST_LOG=debug` to see every cart operation.

use kiosk_cart::types::price::format_price;
use kiosk_cart::{Category, KioskSession, PlaceOrderOutcome};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("===========================================");
    println!("  Kiosk Cart");
    println!("===========================================");
    println!();

    let mut session = KioskSession::sample();

    for category in Category::DISPLAY_ORDER {
        session.select_category(category);
        println!("{}:", category);
        for item in session.visible_menu() {
            println!("  [{}] {:<16} {:>6}", item.id, item.name, format_price(item.price));
        }
    }
    println!();

    let mut lines = Vec::new();
    for item_id in [1, 4, 7] {
        match session.add_menu_item(item_id) {
            Ok(line_id) => lines.push(line_id),
            Err(e) => println!("  ERROR: {}", e),
        }
    }

    // Second add of the same item is ignored
    if let Err(e) = session.add_menu_item(1) {
        println!("  {}", e);
    }

    if let Some(&burger) = lines.first() {
        if let Err(e) = session.increment_quantity(burger) {
            println!("  ERROR: {}", e);
        }
    }
    if let Some(&ice_cream) = lines.last() {
        if let Err(e) = session.remove_line(ice_cream) {
            println!("  ERROR: {}", e);
        }
    }
    if let Err(e) = session.remove_line(9_999) {
        println!("  {}", e);
    }
    println!();

    println!("Cart:");
    for line in session.cart().lines() {
        println!(
            "  {:>3} x {:<16} {:>6}",
            line.quantity(),
            line.item.name,
            format_price(line.line_total())
        );
    }
    println!("  Total: {}", format_price(session.total_price()));
    println!();

    match session.place_order() {
        PlaceOrderOutcome::Placed(summary) => {
            println!(
                "Order placed: {} lines, {} items, total {}",
                summary.line_count,
                summary.item_count,
                summary.total_display()
            );
        }
        PlaceOrderOutcome::EmptyCart => println!("Cart is empty, nothing to order"),
    }
    println!("Cart empty after order: {}", session.cart().is_empty());
}
