use crate::engine::{DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::table::{ConversionTable, ValidationResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "unitconv.toml";

pub const DEFAULT_CATEGORY: &str = "length";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Category shown first by the controller
    #[serde(default = "default_category")]
    pub default_category: String,

    #[serde(default)]
    pub display: DisplayConfig,

    // Extra linear categories appended after the built-ins
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryConfig {
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    pub base: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    // An array rather than a table so declaration order survives parsing
    pub units: Vec<UnitConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnitConfig {
    pub name: String,
    pub factor: f64,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        log::debug!("loading config from {}", path.display());
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Explicit path if given, else `unitconv.toml` in `dir` if present, else defaults
    pub fn discover(
        explicit: Option<&Path>,
        dir: &Path,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            Self::load_from_file(&candidate)
        } else {
            log::debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
            Ok(Self::empty())
        }
    }

    pub fn empty() -> Self {
        Self {
            default_category: default_category(),
            display: DisplayConfig::default(),
            categories: Vec::new(),
        }
    }

    /// Display precision, capped to what the formatter supports
    pub fn decimals(&self) -> usize {
        self.display.decimals.min(MAX_DECIMALS)
    }

    /// Initial category, falling back to length when the configured one is unknown
    pub fn initial_category<'a>(&'a self, table: &ConversionTable) -> &'a str {
        if table.category(&self.default_category).is_some() {
            &self.default_category
        } else {
            DEFAULT_CATEGORY
        }
    }

    /// Check settings that refer to the assembled table
    pub fn validate(&self, table: &ConversionTable) -> ValidationResult {
        let mut result = ValidationResult::new();

        if table.category(&self.default_category).is_none() {
            result.add_warning(
                format!(
                    "Unknown default category '{}', using '{}'",
                    self.default_category, DEFAULT_CATEGORY
                ),
                Some("default_category".to_string()),
            );
        }

        if self.display.decimals > MAX_DECIMALS {
            result.add_warning(
                format!(
                    "display.decimals = {} exceeds {}, clamping",
                    self.display.decimals, MAX_DECIMALS
                ),
                Some("display.decimals".to_string()),
            );
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.default_category, "length");
        assert_eq!(config.decimals(), 4);
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::load_from_str(
            r#"
default_category = "temp"

[display]
decimals = 2

[[categories]]
key = "speed"
title = "Speed"
base = "meter-per-second"
aliases = ["velocity"]
units = [
  { name = "meter-per-second", factor = 1.0 },
  { name = "kilometer-per-hour", factor = 3.6 },
]
"#,
        )
        .unwrap();

        assert_eq!(config.default_category, "temp");
        assert_eq!(config.decimals(), 2);
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.categories[0].aliases, vec!["velocity"]);
        assert_eq!(config.categories[0].units[1].name, "kilometer-per-hour");
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(Config::load_from_str("[[categories]]\nkey = 3").is_err());
    }

    #[test]
    fn test_validate_unknown_default_category() {
        let table = ConversionTable::builtin();
        let mut config = Config::empty();
        config.default_category = "pressure".to_string();
        config.display.decimals = 40;

        let result = config.validate(&table);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(config.initial_category(&table), "length");
        assert_eq!(config.decimals(), MAX_DECIMALS);
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = std::env::temp_dir().join("unitconv-config-discover-empty");
        std::fs::create_dir_all(&dir).unwrap();
        let _ = std::fs::remove_file(dir.join(DEFAULT_CONFIG_FILE));

        let config = Config::discover(None, &dir).unwrap();
        assert_eq!(config.default_category, "length");
    }

    #[test]
    fn test_discover_reads_file_in_dir() {
        let dir = std::env::temp_dir().join("unitconv-config-discover-file");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(DEFAULT_CONFIG_FILE), "default_category = \"time\"\n").unwrap();

        let config = Config::discover(None, &dir).unwrap();
        assert_eq!(config.default_category, "time");
    }

    #[test]
    fn test_discover_missing_explicit_path_is_error() {
        let dir = std::env::temp_dir();
        let missing = dir.join("unitconv-does-not-exist.toml");
        assert!(Config::discover(Some(missing.as_path()), &dir).is_err());
    }
}
