use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vitrine_format::{
    Currency, DEFAULT_CURRENCY, DisplayZone, FormatOptions, InvalidDatePolicy, Locale, StarGlyphs,
};

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. VITRINE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.vitrine (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("VITRINE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("vitrine"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".vitrine"));
    }

    anyhow::bail!("Could not determine data directory: no HOME directory or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    pub currency: String,
    pub timezone: DisplayZone,
    pub invalid_dates: InvalidDatePolicy,
    pub stars: StarGlyphs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            timezone: DisplayZone::default(),
            invalid_dates: InvalidDatePolicy::default(),
            stars: StarGlyphs::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), locale = %config.locale, "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if Currency::lookup(&self.currency).is_none() {
            anyhow::bail!("unsupported currency '{}' in configuration", self.currency);
        }
        Ok(())
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            locale: self.locale,
            zone: self.timezone,
            invalid_dates: self.invalid_dates,
            stars: self.stars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.locale, Locale::FrFr);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.timezone, DisplayZone::utc());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
locale = "en-US"
timezone = "-05:00"
invalid_dates = "strict"
"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.timezone.to_string(), "-05:00");
        assert_eq!(config.invalid_dates, InvalidDatePolicy::Strict);
        assert_eq!(config.stars, StarGlyphs::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            locale: Locale::DeDe,
            currency: "CHF".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_unknown_currency() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "currency = \"DOGE\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("DOGE"));
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some("/tmp/vitrine-data")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/vitrine-data"));
    }
}
