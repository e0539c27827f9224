//! Main commands enum and primary subcommands.

use clap::{Subcommand, ValueEnum};

use kilim_core::SortOrder;

use crate::cart_commands::CartCommand;

/// Available commands for the kilim storefront.
#[derive(Subcommand)]
pub enum Commands {
    /// List catalog products, with optional filtering and sorting
    Products {
        /// Only show products in this category (exact match)
        #[arg(short, long)]
        category: Option<String>,
        /// Minimum price, inclusive
        #[arg(long)]
        min_price: Option<f64>,
        /// Maximum price, inclusive
        #[arg(long)]
        max_price: Option<f64>,
        /// Sort order for the listing
        #[arg(short, long)]
        sort: Option<SortArg>,
        /// Limit number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one product in detail
    Show {
        /// Catalog id of the product
        id: u64,
    },

    /// List the catalog's categories
    Categories,

    /// Inspect or change the shopping cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    /// Review the cart and confirm the order
    Checkout,
}

/// Sort orders accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Title A-Z
    TitleAsc,
    /// Title Z-A
    TitleDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::PriceAsc => Self::PriceAsc,
            SortArg::PriceDesc => Self::PriceDesc,
            SortArg::TitleAsc => Self::TitleAsc,
            SortArg::TitleDesc => Self::TitleDesc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_products_command_parses_filters() {
        let cli = Cli::parse_from([
            "kilim",
            "products",
            "--category",
            "electronics",
            "--max-price",
            "100",
            "--sort",
            "price-asc",
            "--limit",
            "5",
        ]);

        match cli.command {
            Some(Commands::Products {
                category,
                max_price,
                sort,
                limit,
                ..
            }) => {
                assert_eq!(category.as_deref(), Some("electronics"));
                assert_eq!(max_price, Some(100.0));
                assert!(matches!(sort, Some(SortArg::PriceAsc)));
                assert_eq!(limit, Some(5));
            }
            _ => panic!("expected products command"),
        }
    }

    #[test]
    fn test_cart_set_parses_negative_quantity() {
        // A negative quantity is valid input: it removes the item.
        let cli = Cli::parse_from(["kilim", "cart", "set", "7", "-5"]);
        match cli.command {
            Some(Commands::Cart {
                command: CartCommand::Set {
                    product_id,
                    quantity,
                },
            }) => {
                assert_eq!(product_id, 7);
                assert_eq!(quantity, -5);
            }
            _ => panic!("expected cart set command"),
        }
    }
}
