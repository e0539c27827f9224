//! Products command handler.
//!
//! Displays catalog products in a formatted table, after applying the
//! requested category/price filter and sort order client-side.

use anyhow::Result;

use kilim_core::{ProductFilter, SortOrder};

use crate::bootstrap::CliContext;
use crate::presentation::{format_price, print_separator, truncate_string};

/// Arguments for the products listing.
#[derive(Debug, Default)]
pub struct ProductsArgs {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortOrder>,
    pub limit: Option<usize>,
}

/// Execute the products command.
pub async fn execute(ctx: &CliContext, args: ProductsArgs) -> Result<()> {
    let filter = ProductFilter {
        category: args.category,
        min_price: args.min_price,
        max_price: args.max_price,
    };

    let products = ctx
        .app()
        .catalog()
        .browse(&filter, args.sort, args.limit)
        .await?;

    if products.is_empty() {
        println!("No products matched.");
        return Ok(());
    }

    println!("{} product(s) found\n", products.len());
    println!(
        "{:<4} {:<40} {:<10} {:<18} Rating",
        "ID", "Title", "Price", "Category"
    );
    print_separator(84);

    for product in products {
        println!(
            "{:<4} {:<40} {:<10} {:<18} {:.1} ({})",
            product.id,
            truncate_string(&product.title, 39),
            format_price(product.price),
            truncate_string(&product.category, 17),
            product.rating.rate,
            product.rating.count
        );
    }

    println!("\nUse 'kilim cart add <id>' to add a product to your cart.");

    Ok(())
}
