mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    CartCommand, Cli, Commands, ConfigCommand, ConvertCommand, LogLevel, OrderCommand,
    OutputFormat, ProductCommand, PromotionCommand,
};
pub use commands::run;
