//! Named units of source text.

use std::io;
use std::path::Path;

/// A named unit of source text: a file, a REPL line, or a link prelude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    /// Name used for interactive input.
    pub const REPL_NAME: &'static str = "<REPL>";

    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Source {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Source for one line of interactive input.
    pub fn repl(text: impl Into<String>) -> Self {
        Source::new(Self::REPL_NAME, text)
    }

    /// Read a source file in full. The source is named after the file name.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Source { name, text })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of a 1-based row, without its line terminator.
    pub fn line(&self, row: u32) -> Option<&str> {
        let index = usize::try_from(row).ok()?.checked_sub(1)?;
        self.text.lines().nth(index)
    }
}
