//! Biome and block definition catalog consumed by the legend renderer.
//!
//! The catalog is loaded once from a RON file and is read-only afterwards.
//! Entry order is the order of the source file and is never changed.

pub mod color;
pub mod entry;
pub mod loader;

pub use color::{Color, ColorError};
pub use entry::{BiomeEntry, BlockEntry, Catalog, VariantEntry};
pub use loader::{CatalogError, load_catalog};
