//! Core diagnostic record.
//!
//! A [`Diagnostic`] is a located message: severity, source file name, line,
//! column, and free text. Lines and columns are 1-based; `0` means "not
//! known" and is left out of rendered reports.

use std::fmt;

/// Severity of a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl Severity {
    /// Check whether this is a warning.
    pub fn is_warning(self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Report prefix for this severity.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything that knows the name of the source file being processed.
///
/// Lets diagnostics take their file name from the program being
/// tokenized without the diagnostic crate depending on the program type.
pub trait ProgramContext {
    /// Name of the source file (empty when unknown).
    fn file_name(&self) -> &str;
}

/// An error or warning tied to a location in the source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    severity: Severity,
    file_name: String,
    line: u32,
    column: u32,
    message: String,
}

impl Diagnostic {
    /// Create an error with no file name.
    pub fn new(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, "", line, column, message)
    }

    /// Create a diagnostic with every field given explicitly.
    pub fn with_severity(
        severity: Severity,
        file_name: impl Into<String>,
        line: u32,
        column: u32,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            severity,
            file_name: file_name.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an error whose file name comes from `program`.
    ///
    /// A missing program yields an empty file name.
    pub fn for_program(
        program: Option<&dyn ProgramContext>,
        line: u32,
        column: u32,
        message: impl Into<String>,
    ) -> Self {
        Self::for_program_with_severity(Severity::Error, program, line, column, message)
    }

    /// Create a diagnostic of the given severity whose file name comes
    /// from `program`.
    pub fn for_program_with_severity(
        severity: Severity,
        program: Option<&dyn ProgramContext>,
        line: u32,
        column: u32,
        message: impl Into<String>,
    ) -> Self {
        let file_name = program.map_or("", |program| program.file_name());
        Self::with_severity(severity, file_name, line, column, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_warning(&self) -> bool {
        self.severity.is_warning()
    }

    pub fn is_error(&self) -> bool {
        !self.is_warning()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One report line: `Error in <file> line <L> column <C>: <message>`.
///
/// Unknown parts (empty file name, zero line or column) are omitted.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.severity.label())?;
        if !self.file_name.is_empty() {
            write!(f, " in {}", self.file_name)?;
        }
        if self.line > 0 {
            write!(f, " line {}", self.line)?;
        }
        if self.column > 0 {
            write!(f, " column {}", self.column)?;
        }
        write!(f, ": {}", self.message)
    }
}
