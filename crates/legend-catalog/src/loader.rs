//! Loads a [`Catalog`] from a RON definitions file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Catalog;

/// Errors returned while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid RON or does not match the schema.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Read and parse the catalog at `path`.
///
/// # Errors
///
/// Returns [`CatalogError::Read`] if the file cannot be read and
/// [`CatalogError::Parse`] if its contents are malformed.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_ron_str(&contents)?;
    tracing::info!(
        "Loaded catalog {}: {} biomes, {} blocks",
        path.display(),
        catalog.biomes.len(),
        catalog.blocks.len()
    );
    Ok(catalog)
}

impl Catalog {
    /// Parse a catalog from RON text.
    pub fn from_ron_str(ron_str: &str) -> Result<Self, CatalogError> {
        Ok(ron::from_str(ron_str)?)
    }
}
