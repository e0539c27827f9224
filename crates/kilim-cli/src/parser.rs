//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the kilim storefront.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "kilim")]
#[command(about = "Browse the product catalog and manage your shopping cart")]
#[command(version)]
pub struct Cli {
    /// Override the directory holding the cart file for this invocation
    #[arg(long = "data-dir", global = true, env = "KILIM_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
