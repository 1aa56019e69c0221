// This module provides the diagnostic side channel of the analyses. Extraction from a
// constant that was never folded is not an error: it is reported as unsupported
// functionality with a "continue" action and answered with a placeholder value. A
// DiagnosticSink receives those reports. LogSink forwards them to the log facade,
// CollectingSink keeps them (behind a Mutex so one sink can be shared by several
// compilation threads), and NullSink drops them.

//! Diagnostic reporting for the analyses.

use std::fmt;
use std::sync::Mutex;

/// Message attached to degraded constant extraction.
pub const NON_SIMPLE_CONSTANT: &str = "non-simple constant";

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The input uses something this layer cannot handle exactly.
    UnsupportedFunctionality,
}

/// What the caller should do after the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticAction {
    /// Keep compiling; the answer is a placeholder.
    Continue,
}

/// A single report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: &'static str,
    pub action: DiagnosticAction,
}

impl Diagnostic {
    pub const fn unsupported(message: &'static str, action: DiagnosticAction) -> Self {
        Self {
            kind: DiagnosticKind::UnsupportedFunctionality,
            message,
            action,
        }
    }

    /// The report issued when a literal is requested from an unfolded constant.
    pub const fn non_simple_constant() -> Self {
        Self::unsupported(NON_SIMPLE_CONSTANT, DiagnosticAction::Continue)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            DiagnosticKind::UnsupportedFunctionality => "unsupported functionality",
        };
        let action = match self.action {
            DiagnosticAction::Continue => "continuing",
        };
        write!(f, "{kind}: {} ({action})", self.message)
    }
}

/// Receiver of diagnostics.
pub trait DiagnosticSink {
    fn report(&self, diag: Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diag: Diagnostic) {
        log::warn!("{diag}");
    }
}

/// Drops every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diag: Diagnostic) {}
}

/// Keeps every diagnostic for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics received so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take all diagnostics, leaving the sink empty.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A poisoned sink still holds valid reports.
        self.reports.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diag: Diagnostic) {
        log::debug!("collected diagnostic: {diag}");
        self.lock().push(diag);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diag: Diagnostic) {
        (**self).report(diag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_drains() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.report(Diagnostic::non_simple_constant());
        sink.report(Diagnostic::non_simple_constant());
        assert_eq!(sink.len(), 2);

        let reports = sink.drain();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].message, NON_SIMPLE_CONSTANT);
        assert_eq!(reports[0].action, DiagnosticAction::Continue);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_diagnostic_display() {
        let text = Diagnostic::non_simple_constant().to_string();
        assert_eq!(text, "unsupported functionality: non-simple constant (continuing)");
    }
}
