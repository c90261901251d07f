use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Format an amount given in minor units (cents)")]
    Price {
        #[arg(allow_negative_numbers = true)]
        cents: i64,

        #[arg(long, help = "Currency code [default: configured currency]")]
        currency: Option<String>,
    },

    #[command(about = "Convert between minor and major currency units")]
    Convert {
        #[command(subcommand)]
        command: ConvertCommand,
    },

    #[command(about = "Format an ISO-8601 timestamp")]
    Date {
        timestamp: String,

        #[arg(long, help = "Short form with time of day")]
        short: bool,
    },

    #[command(about = "Show the badge style for a status code")]
    Badge { status: String },

    #[command(about = "Render a rating as stars")]
    Stars {
        #[arg(allow_negative_numbers = true)]
        rating: f64,
    },

    #[command(about = "Render catalog products")]
    Product {
        #[command(subcommand)]
        command: ProductCommand,
    },

    #[command(about = "Render customer orders")]
    Order {
        #[command(subcommand)]
        command: OrderCommand,
    },

    #[command(about = "Render shopping carts")]
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    #[command(about = "Render promotions")]
    Promotion {
        #[command(subcommand)]
        command: PromotionCommand,
    },

    #[command(about = "Manage vitrine configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConvertCommand {
    #[command(about = "Minor units to major units (12345 -> 123.45)")]
    ToMajor {
        #[arg(allow_negative_numbers = true)]
        cents: i64,
    },

    #[command(about = "Major units to minor units, rounding half away from zero")]
    ToMinor {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

#[derive(Subcommand)]
pub enum ProductCommand {
    #[command(about = "Render a product card from a product JSON document")]
    Show { file: PathBuf },
}

#[derive(Subcommand)]
pub enum OrderCommand {
    #[command(about = "Render an order summary from an order JSON document")]
    Show {
        file: PathBuf,

        #[arg(long, help = "Product list used to resolve item names")]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CartCommand {
    #[command(about = "Render a cart summary from a cart JSON document")]
    Show {
        file: PathBuf,

        #[arg(long, help = "Product list used to resolve item names")]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum PromotionCommand {
    #[command(about = "Render a promotion and its phase on a given day")]
    Show {
        file: PathBuf,

        #[arg(long, help = "Reference day (YYYY-MM-DD) [default: today]")]
        on: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Write a default config.toml")]
    Init {
        #[arg(long, help = "Overwrite an existing config.toml")]
        force: bool,
    },

    #[command(about = "Print the config.toml location")]
    Path,
}
