//! Cart subcommands.

use clap::Subcommand;

/// Cart management commands.
#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and order summary
    Show,

    /// Add one unit of a product to the cart
    Add {
        /// Catalog id of the product to add
        product_id: u64,
    },

    /// Remove a product from the cart entirely
    Remove {
        /// Catalog id of the product to remove
        product_id: u64,
    },

    /// Set the quantity of a product already in the cart
    Set {
        /// Catalog id of the product
        product_id: u64,
        /// New quantity; zero or negative removes the item
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },

    /// Remove every item from the cart
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
