//! The `legend` application: wires config, catalog loading and rendering.

pub mod paths;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use legend_catalog::{CatalogError, load_catalog};
use legend_config::{CliArgs, ConfigError, LegendConfig};
use legend_core::{
    DEFAULT_VARIANTS_PER_ROW, Diagnostics, LegendError, LegendOptions, WalkSummary,
    render_legend_to_file,
};

use crate::paths::{AppDirs, PlatformError};

/// Errors that end a run with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Directory resolution failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The effective configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The catalog could not be loaded; nothing was rendered.
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The legend document could not be written.
    #[error(transparent)]
    Legend(#[from] LegendError),
}

/// Load `config.ron` (creating it if absent) and apply CLI overrides.
///
/// An unreadable config falls back to defaults with a message on stderr,
/// since logging is not initialized yet.
pub fn load_config(args: &CliArgs, dirs: &AppDirs) -> Result<LegendConfig, AppError> {
    let mut config = LegendConfig::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        LegendConfig::default()
    });
    config.apply_cli_overrides(args);
    config.validate()?;
    Ok(config)
}

/// Rendering options derived from the config.
pub fn legend_options(config: &LegendConfig) -> LegendOptions {
    LegendOptions {
        title: config.render.title.clone(),
        variants_per_row: NonZeroUsize::new(config.render.variants_per_row)
            .unwrap_or(DEFAULT_VARIANTS_PER_ROW),
    }
}

/// Catalog path from config, or the data-directory default.
pub fn catalog_path(config: &LegendConfig, dirs: &AppDirs) -> PathBuf {
    config
        .paths
        .catalog
        .clone()
        .unwrap_or_else(|| dirs.default_catalog_path())
}

/// Load the catalog and write the legend document.
pub fn generate(
    config: &LegendConfig,
    dirs: &AppDirs,
    diag: &mut dyn Diagnostics,
) -> Result<WalkSummary, AppError> {
    let catalog = load_catalog(&catalog_path(config, dirs))?;
    let output = config.output_path();
    let summary = render_legend_to_file(&catalog, &legend_options(config), diag, &output)?;
    Ok(summary)
}
