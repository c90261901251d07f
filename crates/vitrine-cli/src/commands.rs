use anyhow::Result;
use std::path::Path;

use super::args::{
    CartCommand, Cli, Commands, ConfigCommand, OrderCommand, ProductCommand, PromotionCommand,
};
use super::config::{CONFIG_FILE, resolve_data_dir};
use super::context::{ExecutionContext, Overrides};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    // These two must work even when config.toml does not parse
    match &command {
        Commands::Config {
            command: ConfigCommand::Init { force },
        } => return handlers::config::handle_init(&data_dir, cli.format, *force),
        Commands::Config {
            command: ConfigCommand::Path,
        } => return handlers::config::handle_path(&data_dir, cli.format),
        _ => {}
    }

    let overrides = Overrides {
        locale: cli.locale,
        currency: cli.currency,
        timezone: cli.timezone,
    };
    let ctx = ExecutionContext::new(data_dir, cli.format, overrides)?;

    match command {
        Commands::Price { cents, currency } => handlers::price::handle(&ctx, cents, currency),

        Commands::Convert { command } => handlers::convert::handle(&ctx, command),

        Commands::Date { timestamp, short } => handlers::date::handle(&ctx, timestamp, short),

        Commands::Badge { status } => handlers::badge::handle(&ctx, &status),

        Commands::Stars { rating } => handlers::stars::handle(&ctx, rating),

        Commands::Product { command } => match command {
            ProductCommand::Show { file } => handlers::product::handle(&ctx, &file),
        },

        Commands::Order { command } => match command {
            OrderCommand::Show { file, catalog } => {
                handlers::basket::handle_order(&ctx, &file, catalog.as_deref())
            }
        },

        Commands::Cart { command } => match command {
            CartCommand::Show { file, catalog } => {
                handlers::basket::handle_cart(&ctx, &file, catalog.as_deref())
            }
        },

        Commands::Promotion { command } => match command {
            PromotionCommand::Show { file, on } => handlers::promotion::handle(&ctx, &file, on),
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&ctx),
            ConfigCommand::Init { force } => {
                handlers::config::handle_init(ctx.data_dir(), cli.format, force)
            }
            ConfigCommand::Path => handlers::config::handle_path(ctx.data_dir(), cli.format),
        },
    }
}

fn show_guidance(data_dir: &Path) {
    println!("vitrine - Storefront display formatting\n");

    if !data_dir.join(CONFIG_FILE).exists() {
        println!("Get started:");
        println!("  vitrine config init               # Write a default config.toml\n");
    }

    println!("Quick commands:");
    println!("  vitrine price 12345               # 123,45 €");
    println!("  vitrine date 2024-01-15T14:30:00  # 15 janvier 2024");
    println!("  vitrine badge delivered           # Status badge style");
    println!("  vitrine stars 3.5                 # ★★★⯪☆");
    println!("  vitrine product show wine.json    # Product card\n");

    println!("For more commands:");
    println!("  vitrine --help");
}
