//! Accumulating diagnostic list.
//!
//! Features:
//! - Insertion order is preserved (diagnostics appear in scan order)
//! - Separate error and warning counts; only errors make a run fail
//! - Optional error limit to keep huge inputs from flooding the output
//! - Plain-text reports, one line per diagnostic

use std::fmt::Write;

use crate::Diagnostic;

/// Anything that can receive diagnostics.
///
/// Scanning code takes `&mut dyn DiagnosticSink`, so redirecting the
/// diagnostics of a single call means passing a different sink.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn push(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn push(&mut self, diagnostic: Diagnostic) {
        Vec::push(self, diagnostic);
    }
}

/// Configuration for diagnostic collection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors recorded (0 = unlimited).
    pub error_limit: usize,
}

impl DiagnosticConfig {
    /// Config that stops recording after `error_limit` errors.
    pub fn with_error_limit(error_limit: usize) -> Self {
        DiagnosticConfig { error_limit }
    }
}

/// Ordered collection of diagnostics.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
    limit_exceeded: bool,
    config: DiagnosticConfig,
}

impl DiagnosticList {
    /// Create an empty, unlimited list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with explicit configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticList {
            config,
            ..Self::default()
        }
    }

    /// Append a diagnostic, honoring the error limit.
    ///
    /// Once the limit is reached, one "limit exceeded" error is recorded
    /// at the location of the first rejected diagnostic, and everything
    /// after it is dropped.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if self.limit_exceeded {
            return;
        }
        let limit = self.config.error_limit;
        if limit > 0 && self.error_count == limit {
            self.diagnostics.push(Diagnostic::new(
                diagnostic.line(),
                diagnostic.column(),
                format!("Error limit of {limit} exceeded."),
            ));
            self.error_count += 1;
            self.limit_exceeded = true;
            return;
        }
        if diagnostic.is_warning() {
            self.warning_count += 1;
        } else {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Append every diagnostic of `other`, in order.
    pub fn extend(&mut self, other: DiagnosticList) {
        for diagnostic in other.diagnostics {
            self.add(diagnostic);
        }
    }

    /// Whether at least one error (not warning) was recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Whether at least one warning was recorded.
    pub fn has_warnings(&self) -> bool {
        self.warning_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Whether the error limit cut off later diagnostics.
    pub fn error_limit_exceeded(&self) -> bool {
        self.limit_exceeded
    }

    pub fn config(&self) -> DiagnosticConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Report of errors only.
    pub fn error_report(&self) -> String {
        self.render(Diagnostic::is_error)
    }

    /// Report of warnings only.
    pub fn warning_report(&self) -> String {
        self.render(Diagnostic::is_warning)
    }

    /// Report of everything: warnings first, then errors.
    pub fn report(&self) -> String {
        let mut report = self.warning_report();
        report.push_str(&self.error_report());
        report
    }

    fn render(&self, keep: impl Fn(&Diagnostic) -> bool) -> String {
        let mut out = String::new();
        for diagnostic in self.diagnostics.iter().filter(|d| keep(*d)) {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{diagnostic}");
        }
        out
    }
}

impl DiagnosticSink for DiagnosticList {
    fn push(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

impl<'a> IntoIterator for &'a DiagnosticList {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl IntoIterator for DiagnosticList {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}
