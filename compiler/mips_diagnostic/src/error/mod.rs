//! Failure of a tokenizing run.

use thiserror::Error;

use crate::DiagnosticList;

/// Raised when a run finished with at least one error diagnostic.
///
/// Carries the complete list, so every problem in the input is visible
/// at once rather than only the first.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{}", summary(.diagnostics))]
pub struct ProcessingError {
    diagnostics: DiagnosticList,
}

impl ProcessingError {
    pub fn new(diagnostics: DiagnosticList) -> Self {
        ProcessingError { diagnostics }
    }

    /// Return `Err` when `diagnostics` holds an error, otherwise `Ok(value)`.
    pub fn check<T>(value: T, diagnostics: DiagnosticList) -> Result<T, ProcessingError> {
        if diagnostics.has_errors() {
            Err(ProcessingError::new(diagnostics))
        } else {
            Ok(value)
        }
    }

    pub fn diagnostics(&self) -> &DiagnosticList {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticList {
        self.diagnostics
    }
}

fn summary(diagnostics: &DiagnosticList) -> String {
    let count = diagnostics.error_count();
    format!("{count} lexical error{} detected", plural_s(count))
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
pub(crate) fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
