//! Checkout command handler.
//!
//! Checkout is a client-side confirmation only: it renders the order
//! summary and asks for a yes/no. There is no order submission, payment,
//! or inventory effect, and the cart is left untouched either way.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_price, grand_total, print_order_summary};
use crate::utils::input::prompt_confirmation;

/// Execute the checkout command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let cart = ctx.app().cart();

    if cart.is_empty() {
        println!("Your cart is empty.");
        println!("Use 'kilim products' to browse the catalog.");
        return Ok(());
    }

    let item_count = cart.total_item_count();
    let subtotal = cart.total_price();

    print_order_summary(item_count, subtotal);
    println!();

    if prompt_confirmation("Place the order")? {
        println!(
            "{} item(s) for {} - you would now be taken to payment.",
            item_count,
            format_price(grand_total(subtotal))
        );
        println!("No charge has been made.");
    } else {
        println!("Checkout cancelled.");
    }

    Ok(())
}
