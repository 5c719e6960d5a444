//! Color legend rendering: conflict tracking, catalog walk and HTML output.
//!
//! The pipeline is a single sequential pass:
//! [`walk_catalog`] claims colors in per-namespace [`ColorRegistry`] instances
//! and produces a [`Legend`]; [`LegendDocument`] formats it; [`write_legend`]
//! flushes it to disk once. Warnings and errors go to an injected
//! [`Diagnostics`] sink.

pub mod diagnostics;
pub mod markup;
pub mod output;
pub mod registry;
pub mod walker;

pub use diagnostics::{Diagnostics, RecordingDiagnostics, Severity, TracingDiagnostics};
pub use markup::{Escaped, LegendDocument, STYLESHEET, render_html};
pub use output::{LegendError, render_legend_to_file, write_legend};
pub use registry::{Claim, ColorRegistry};
pub use walker::{
    DEFAULT_VARIANTS_PER_ROW, Legend, LegendCell, LegendOptions, VariantSwatch, WalkSummary,
    walk_catalog,
};
