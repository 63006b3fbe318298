//! Diagnostic output for the settings store.

use tracing::info;

/// Receives diagnostic lines produced while handling settings files.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Forwards diagnostic lines to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        info!(target: "settings", "{}", line);
    }
}
