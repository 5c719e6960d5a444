//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the config file inside the config directory.
const CONFIG_FILE: &str = "config.ron";

/// Top-level legend generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LegendConfig {
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Document rendering settings.
    pub render: RenderConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// Input/output path configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Catalog RON file. `None` means the platform data directory default.
    pub catalog: Option<PathBuf>,
    /// Directory the legend document is written into.
    pub output_dir: PathBuf,
    /// File name of the legend document.
    pub output_file: String,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Document `<title>` and `<h1>` text.
    pub title: String,
    /// Number of variant swatches per visual row (must be non-zero).
    pub variants_per_row: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive (e.g., "info", "warn,legend_core=debug").
    pub level: String,
    /// Write a JSON log file next to the config in debug builds.
    pub file_logging: bool,
}

// --- Default implementations ---

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            output_dir: PathBuf::from("output"),
            output_file: "legend.html".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Color Legend".to_string(),
            variants_per_row: 8,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: true,
        }
    }
}

impl LegendConfig {
    /// Full path of the legend document.
    pub fn output_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.paths.output_file)
    }

    /// Check values that deserialize fine but cannot be rendered with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.variants_per_row == 0 {
            return Err(ConfigError::Invalid {
                field: "render.variants_per_row",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.paths.output_file.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "paths.output_file",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl LegendConfig {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: LegendConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = LegendConfig::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = LegendConfig::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("variants_per_row: 8"));
        assert!(ron_str.contains("output_file: \"legend.html\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = LegendConfig::default();
        config.paths.catalog = Some(PathBuf::from("defs/catalog.ron"));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: LegendConfig = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: LegendConfig = ron::from_str("(paths: ())").unwrap();
        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<LegendConfig, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_output_path_joins_dir_and_file() {
        let mut config = LegendConfig::default();
        config.paths.output_dir = PathBuf::from("site");
        config.paths.output_file = "colors.html".to_string();
        assert_eq!(config.output_path(), Path::new("site").join("colors.html"));
    }

    #[test]
    fn test_validate_rejects_zero_row_width() {
        let mut config = LegendConfig::default();
        assert!(config.validate().is_ok());

        config.render.variants_per_row = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "render.variants_per_row",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_blank_output_file() {
        let mut config = LegendConfig::default();
        config.paths.output_file = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LegendConfig::load_or_create(dir.path()).unwrap();
        assert_eq!(config, LegendConfig::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = LegendConfig::default();
        config.render.title = "Overworld Colors".to_string();
        config.render.variants_per_row = 4;

        config.save(dir.path()).unwrap();
        let loaded = LegendConfig::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let result = LegendConfig::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
