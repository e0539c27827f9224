//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together via bootstrap; command dispatch routes
//! to handlers which delegate to the `Storefront` facade.

use clap::Parser;

use kilim_cli::handlers;
use kilim_cli::{Cli, CliConfig, Commands, bootstrap};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose surfaces the debug-level hydration and
    // persistence messages
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    // Bootstrap the CLI context (composition root); this is where the cart
    // is hydrated from storage, once per invocation
    let config = match cli.data_dir {
        Some(ref dir) => CliConfig::with_data_dir(dir),
        None => CliConfig::with_defaults()?,
    };
    let ctx = bootstrap(&config);

    // Dispatch to the appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        kilim_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Products {
            category,
            min_price,
            max_price,
            sort,
            limit,
        } => {
            let args = handlers::products::ProductsArgs {
                category,
                min_price,
                max_price,
                sort: sort.map(Into::into),
                limit,
            };
            handlers::products::execute(&ctx, args).await?;
        }
        Commands::Show { id } => {
            handlers::show::execute(&ctx, id).await?;
        }
        Commands::Categories => {
            handlers::categories::execute(&ctx).await?;
        }
        Commands::Cart { command } => {
            handlers::cart::execute(&ctx, command).await?;
        }
        Commands::Checkout => {
            handlers::checkout::execute(&ctx)?;
        }
    }

    Ok(())
}
