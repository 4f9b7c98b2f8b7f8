//! Source program: a file name plus its lines.

use std::fs;
use std::io;
use std::path::Path;

use mips_diagnostic::ProgramContext;

/// One assembly source file, split into lines.
///
/// Line `n` (1-based) of the program is `lines()[n - 1]`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SourceProgram {
    file_name: String,
    lines: Vec<String>,
}

impl SourceProgram {
    pub fn new(file_name: impl Into<String>, lines: Vec<String>) -> Self {
        SourceProgram {
            file_name: file_name.into(),
            lines,
        }
    }

    /// Split `source` into lines. Both `\n` and `\r\n` end a line; a final
    /// line terminator does not start an extra empty line.
    pub fn from_source(file_name: impl Into<String>, source: &str) -> Self {
        Self::new(file_name, source.lines().map(str::to_owned).collect())
    }

    /// Read and split the file at `path`, naming the program after the path.
    pub fn read(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Ok(Self::from_source(path.display().to_string(), &source))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Text of 1-based line `number`.
    pub fn line(&self, number: u32) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl ProgramContext for SourceProgram {
    fn file_name(&self) -> &str {
        &self.file_name
    }
}
