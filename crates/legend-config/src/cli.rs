//! Command-line argument parsing for the legend generator.

use std::path::PathBuf;

use clap::Parser;

use crate::LegendConfig;

/// Color legend generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "legend",
    about = "Render an HTML color legend for biome and block catalogs"
)]
pub struct CliArgs {
    /// Catalog RON file holding biome and block definitions.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory for the output document.
    #[arg(long)]
    pub outdir: Option<PathBuf>,

    /// File name of the output document.
    #[arg(long)]
    pub output: Option<String>,

    /// Document title.
    #[arg(long)]
    pub title: Option<String>,

    /// Variant swatches per row.
    #[arg(long)]
    pub variants_per_row: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Only report warnings and errors.
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output.
    #[arg(long)]
    pub verbose: bool,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl LegendConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref catalog) = args.catalog {
            self.paths.catalog = Some(catalog.clone());
        }
        if let Some(ref dir) = args.outdir {
            self.paths.output_dir = dir.clone();
        }
        if let Some(ref file) = args.output {
            self.paths.output_file = file.clone();
        }
        if let Some(ref title) = args.title {
            self.render.title = title.clone();
        }
        if let Some(k) = args.variants_per_row {
            self.render.variants_per_row = k;
        }
        if let Some(ref level) = args.log_level {
            self.log.level = level.clone();
        }
        // Shorthand flags win over an explicit level.
        if args.quiet {
            self.log.level = "warn".to_string();
        } else if args.verbose {
            self.log.level = "debug".to_string();
        }
    }
}
