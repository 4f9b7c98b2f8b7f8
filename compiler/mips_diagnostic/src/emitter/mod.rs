//! Diagnostic emitters.
//!
//! The terminal emitter writes the same report lines as
//! [`DiagnosticList::report`](crate::DiagnosticList::report), with the
//! severity optionally highlighted in ANSI color, followed by a summary.

use std::io::{self, Write};

use crate::error::plural_s;
use crate::{Diagnostic, DiagnosticList, Severity};

/// Destination for rendered diagnostics.
///
/// Output errors are ignored: a broken pipe while reporting must not turn
/// into a second failure.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit every diagnostic in `list`, in order, then its summary.
    fn emit_list(&mut self, list: &DiagnosticList) {
        for diagnostic in list {
            self.emit(diagnostic);
        }
        self.emit_summary(list.error_count(), list.warning_count());
    }

    fn flush(&mut self);

    /// One closing line with the counts. Writes nothing when both are zero.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Whether the terminal emitter highlights its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Highlight applied to one piece of output.
#[derive(Clone, Copy)]
enum Style {
    Error,
    Warning,
    FileName,
}

impl Style {
    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::FileName => "\x1b[1m",
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Writes report lines to any [`Write`], usually stderr.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, text: &str, style: Style) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{ANSI_RESET}", style.ansi())
        } else {
            self.writer.write_all(text.as_bytes())
        };
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let severity = diagnostic.severity();
        self.paint(severity.label(), Style::for_severity(severity));
        if !diagnostic.file_name().is_empty() {
            let _ = self.writer.write_all(b" in ");
            self.paint(diagnostic.file_name(), Style::FileName);
        }
        if diagnostic.line() > 0 {
            let _ = write!(self.writer, " line {}", diagnostic.line());
        }
        if diagnostic.column() > 0 {
            let _ = write!(self.writer, " column {}", diagnostic.column());
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let mut parts = Vec::with_capacity(2);
        if error_count > 0 {
            parts.push(format!(
                "{error_count} lexical error{}",
                plural_s(error_count)
            ));
        }
        if warning_count > 0 {
            parts.push(format!(
                "{warning_count} warning{} emitted",
                plural_s(warning_count)
            ));
        }
        if parts.is_empty() {
            return;
        }
        if error_count > 0 {
            self.paint("error", Style::Error);
        } else {
            self.paint("warning", Style::Warning);
        }
        let _ = writeln!(self.writer, ": {}", parts.join("; "));
    }
}

#[cfg(test)]
mod tests;
