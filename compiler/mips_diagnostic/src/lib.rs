//! Diagnostics for the MIPS assembler front end.
//!
//! - [`Diagnostic`]: one located error or warning
//! - [`DiagnosticList`]: ordered accumulation with error/warning counts
//! - [`DiagnosticSink`]: the seam scanning code reports through
//! - [`ProcessingError`]: a failed run, carrying every diagnostic
//!
//! Only errors make a run fail; warnings are recorded and reported but
//! never abort.

mod diagnostic;
pub mod emitter;
mod error;
mod list;

pub use diagnostic::{Diagnostic, ProgramContext, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error::ProcessingError;
pub use list::{DiagnosticConfig, DiagnosticList, DiagnosticSink};
