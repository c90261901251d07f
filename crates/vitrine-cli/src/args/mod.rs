mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Format storefront prices, dates, statuses and ratings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory holding config.toml [default: $VITRINE_PATH or the XDG data dir]"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Override the configured locale (fr-FR, en-US, en-GB, de-DE)")]
    pub locale: Option<String>,

    #[arg(long, global = true, help = "Override the configured default currency")]
    pub currency: Option<String>,

    #[arg(long, global = true, help = "Override the configured display time zone (UTC or ±HH:MM)")]
    pub timezone: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
