//! Order summary rendering.
//!
//! Mirrors the storefront's order summary box: item count, subtotal, free
//! shipping, VAT, grand total. Tax and shipping are presentation concerns
//! only - the cart's own total stays the plain sum of its lines.

/// VAT rate applied when rendering an order summary.
pub const VAT_RATE: f64 = 0.18;

/// Format a price as dollars with two decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// VAT owed on a subtotal.
#[must_use]
pub fn vat_amount(subtotal: f64) -> f64 {
    subtotal * VAT_RATE
}

/// Grand total for a subtotal: subtotal plus VAT, shipping free.
#[must_use]
pub fn grand_total(subtotal: f64) -> f64 {
    subtotal * (1.0 + VAT_RATE)
}

/// Print the order summary block for the given cart totals.
pub fn print_order_summary(item_count: u64, subtotal: f64) {
    println!("Order Summary");
    println!("{}", "-".repeat(28));
    println!("{:<12} {}", "Items:", item_count);
    println!("{:<12} {}", "Subtotal:", format_price(subtotal));
    println!("{:<12} free", "Shipping:");
    println!("{:<12} {}", "VAT (18%):", format_price(vat_amount(subtotal)));
    println!("{:<12} {}", "Total:", format_price(grand_total(subtotal)));
}
