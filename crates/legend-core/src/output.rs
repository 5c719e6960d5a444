//! Writing the legend document to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use legend_catalog::Catalog;

use crate::diagnostics::Diagnostics;
use crate::markup::LegendDocument;
use crate::walker::{LegendOptions, WalkSummary, walk_catalog};

/// Errors that abort a legend run.
#[derive(Debug, Error)]
pub enum LegendError {
    /// The output document could not be created or written.
    #[error("failed to write legend {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Write `document` to `path` through a single buffered handle.
///
/// Missing parent directories are created.
pub fn write_legend(path: &Path, document: &LegendDocument<'_>) -> Result<(), LegendError> {
    let wrap = |source: std::io::Error| LegendError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    write!(writer, "{document}").map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Walk `catalog`, render it and write the page to `path`.
pub fn render_legend_to_file(
    catalog: &Catalog,
    options: &LegendOptions,
    diag: &mut dyn Diagnostics,
    path: &Path,
) -> Result<WalkSummary, LegendError> {
    let legend = walk_catalog(catalog, options, diag);
    let summary = legend.summary;
    diag.info(&format!(
        "Legend has {} biome cells and {} block cells ({} variant swatches)",
        summary.biomes_rendered, summary.blocks_rendered, summary.variants_rendered
    ));
    write_legend(path, &LegendDocument::new(&legend, &options.title))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use legend_catalog::{BiomeEntry, BlockEntry, Color};

    fn sample_catalog() -> Catalog {
        Catalog {
            biomes: vec![
                BiomeEntry {
                    id: 1,
                    name: "Plains".to_string(),
                    color: Some(Color(0x77AD3F)),
                },
                BiomeEntry {
                    id: 2,
                    name: "Meadow".to_string(),
                    color: Some(Color(0x77AD3F)),
                },
            ],
            blocks: vec![BlockEntry {
                id: 1,
                name: "Stone".to_string(),
                color: Some(Color(0x7D7D7D)),
                variants: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_render_to_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("legend.html");
        let mut diag = RecordingDiagnostics::new();

        let summary =
            render_legend_to_file(&sample_catalog(), &LegendOptions::default(), &mut diag, &path)
                .unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains(">Plains<"));
        assert!(!html.contains("Meadow"));
        assert!(html.contains("background-color: #7d7d7d"));
        assert_eq!(summary.biomes_rendered, 1);
        assert_eq!(summary.biome_conflicts, 1);
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_overwrites_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legend.html");
        std::fs::write(&path, "stale").unwrap();

        let mut diag = RecordingDiagnostics::new();
        render_legend_to_file(&Catalog::default(), &LegendOptions::default(), &mut diag, &path)
            .unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<html>"));
        assert!(!html.contains("stale"));
    }

    #[test]
    fn test_unwritable_destination_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as the output file.
        let path = dir.path().to_path_buf();
        let mut diag = RecordingDiagnostics::new();

        let result =
            render_legend_to_file(&Catalog::default(), &LegendOptions::default(), &mut diag, &path);
        assert!(matches!(result, Err(LegendError::Write { .. })));
    }
}
