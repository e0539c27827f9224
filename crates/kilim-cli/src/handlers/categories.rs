//! Categories command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the categories command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let categories = ctx.app().catalog().categories().await?;

    if categories.is_empty() {
        println!("The catalog reports no categories.");
        return Ok(());
    }

    for category in categories {
        println!("{category}");
    }

    Ok(())
}
