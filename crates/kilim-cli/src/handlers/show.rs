//! Show command handler - one product in detail.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_price, print_separator};

/// Execute the show command.
pub async fn execute(ctx: &CliContext, id: u64) -> Result<()> {
    let product = ctx.app().catalog().get(id).await?;

    println!("{}", product.title);
    print_separator(product.title.len().max(20));
    println!("Id:       {}", product.id);
    println!("Price:    {}", format_price(product.price));
    println!("Category: {}", product.category);
    println!(
        "Rating:   {:.1} ({} reviews)",
        product.rating.rate, product.rating.count
    );
    println!("Image:    {}", product.image);
    println!();
    println!("{}", product.description);

    Ok(())
}
