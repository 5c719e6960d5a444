//! Side channel for warnings and errors raised while walking the catalog.

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Progress information.
    Info,
    /// Recoverable oddity, such as a duplicate color.
    Warn,
    /// Entry-level defect, such as a missing color.
    Error,
}

/// Receives diagnostics from the catalog walker.
///
/// None of these calls may abort the walk.
pub trait Diagnostics {
    /// Report progress.
    fn info(&mut self, message: &str);
    /// Report a recoverable conflict.
    fn warn(&mut self, message: &str);
    /// Report a defective entry.
    fn error(&mut self, message: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&mut self, message: &str) {
        tracing::info!(target: "legend_core::walker", "{message}");
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!(target: "legend_core::walker", "{message}");
    }

    fn error(&mut self, message: &str) {
        tracing::error!(target: "legend_core::walker", "{message}");
    }
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Clone, Debug, Default)]
pub struct RecordingDiagnostics {
    /// Recorded messages.
    pub entries: Vec<(Severity, String)>,
}

impl RecordingDiagnostics {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded at `severity`.
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Recorded warnings.
    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Severity::Warn)
    }

    /// Recorded errors.
    pub fn errors(&self) -> Vec<&str> {
        self.messages(Severity::Error)
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn info(&mut self, message: &str) {
        self.entries.push((Severity::Info, message.to_string()));
    }

    fn warn(&mut self, message: &str) {
        self.entries.push((Severity::Warn, message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.entries.push((Severity::Error, message.to_string()));
    }
}
