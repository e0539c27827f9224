//! Cart command handlers.

use anyhow::Result;

use kilim_core::NewLineItem;

use crate::bootstrap::CliContext;
use crate::cart_commands::CartCommand;
use crate::presentation::{format_price, print_order_summary, print_separator, truncate_string};
use crate::utils::input::prompt_confirmation;

/// Execute a cart subcommand.
pub async fn execute(ctx: &CliContext, command: CartCommand) -> Result<()> {
    match command {
        CartCommand::Show => show(ctx),
        CartCommand::Add { product_id } => add(ctx, product_id).await,
        CartCommand::Remove { product_id } => {
            ctx.app().cart().remove_item(product_id);
            println!("Removed product {product_id} from the cart.");
            Ok(())
        }
        CartCommand::Set {
            product_id,
            quantity,
        } => {
            ctx.app().cart().set_quantity(product_id, quantity);
            if quantity <= 0 {
                println!("Removed product {product_id} from the cart.");
            } else {
                println!("Set product {product_id} to quantity {quantity}.");
            }
            Ok(())
        }
        CartCommand::Clear { yes } => clear(ctx, yes),
    }
}

fn show(ctx: &CliContext) -> Result<()> {
    let cart = ctx.app().cart();
    let items = cart.items();

    if items.is_empty() {
        println!("Your cart is empty.");
        println!("Use 'kilim products' to browse the catalog.");
        return Ok(());
    }

    println!(
        "{:<4} {:<40} {:<10} {:<5} Line total",
        "ID", "Title", "Price", "Qty"
    );
    print_separator(74);

    for item in &items {
        println!(
            "{:<4} {:<40} {:<10} {:<5} {}",
            item.id,
            truncate_string(&item.title, 39),
            format_price(item.price),
            item.quantity,
            format_price(item.price * f64::from(item.quantity))
        );
    }

    println!();
    print_order_summary(cart.total_item_count(), cart.total_price());

    Ok(())
}

async fn add(ctx: &CliContext, product_id: u64) -> Result<()> {
    // Snapshot the catalog record at add time; later price changes in the
    // catalog do not touch lines already in the cart.
    let product = ctx.app().catalog().get(product_id).await?;
    ctx.app().cart().add_item(NewLineItem::from(&product));

    println!(
        "Added \"{}\" ({}) to the cart.",
        product.title,
        format_price(product.price)
    );
    println!("Cart now holds {} item(s).", ctx.app().cart().total_item_count());

    Ok(())
}

fn clear(ctx: &CliContext, yes: bool) -> Result<()> {
    let cart = ctx.app().cart();

    if cart.is_empty() {
        println!("Your cart is already empty.");
        return Ok(());
    }

    if !yes && !prompt_confirmation("Remove every item from your cart?")? {
        println!("Cart left unchanged.");
        return Ok(());
    }

    cart.clear();
    println!("Cart cleared.");
    Ok(())
}
