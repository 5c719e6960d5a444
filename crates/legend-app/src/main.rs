//! The binary entry point for the color legend generator.

use clap::Parser;
use legend_app::paths::AppDirs;
use legend_app::{AppError, catalog_path, generate, load_config};
use legend_config::CliArgs;
use legend_core::TracingDiagnostics;

fn main() {
    let args = CliArgs::parse();

    let dirs = match AppDirs::resolve(args.config.as_deref()) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to resolve directories: {e}");
            std::process::exit(1);
        }
    };

    let config = match load_config(&args, &dirs) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    legend_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    match generate(&config, &dirs, &mut TracingDiagnostics) {
        Ok(summary) => {
            tracing::debug!(?summary, "legend complete");
        }
        Err(e @ AppError::Catalog(_)) => {
            tracing::error!(
                "{e} (catalog: {})",
                catalog_path(&config, &dirs).display()
            );
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}
