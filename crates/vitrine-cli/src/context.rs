use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use vitrine_format::{Currency, Formatter};

use crate::args::OutputFormat;
use crate::config::{CONFIG_FILE, Config};
use crate::presentation::{ConsoleRenderer, ViewContext};

/// Per-invocation state: where the data directory is and the effective
/// configuration after command line overrides.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
    format: OutputFormat,
}

/// Command line values that take precedence over config.toml
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locale: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat, overrides: Overrides) -> Result<Self> {
        let mut config = Config::load_from(&data_dir.join(CONFIG_FILE))?;

        if let Some(locale) = overrides.locale {
            config.locale = locale.parse().map_err(anyhow::Error::msg)?;
        }
        if let Some(currency) = overrides.currency {
            config.currency = currency;
        }
        if let Some(timezone) = overrides.timezone {
            config.timezone = timezone.parse().map_err(anyhow::Error::msg)?;
        }

        Ok(Self {
            data_dir,
            config,
            format,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.config.format_options())
    }

    /// Default currency, already checked against the supported table
    pub fn currency(&self) -> Result<Currency> {
        Currency::lookup(&self.config.currency)
            .with_context(|| format!("unsupported currency '{}'", self.config.currency))
    }

    /// Calendar day "now" in the display zone
    pub fn today(&self) -> NaiveDate {
        Utc::now()
            .with_timezone(&self.config.timezone.offset())
            .date_naive()
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        let color = self.format == OutputFormat::Plain
            && std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none();
        ConsoleRenderer::new(
            self.format,
            ViewContext {
                formatter: self.formatter(),
                color,
            },
        )
    }
}
