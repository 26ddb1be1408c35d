use std::borrow::Cow;
use std::io::{self, Write};

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("Unexpected character: {}", byte_text(.0))]
    UnexpectedCharacter(u8),
    #[error("Unterminated string.")]
    UnterminatedString,
}

impl ScanError {
    /// Writes the message with the offending byte untouched.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            ScanError::UnexpectedCharacter(byte) => {
                out.write_all(b"Unexpected character: ")?;
                out.write_all(std::slice::from_ref(byte))
            }
            ScanError::UnterminatedString => write!(out, "{self}"),
        }
    }
}

/// A lexical error pinned to the line it was discovered on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("[line {line}] Error: {error}")]
pub struct Diagnostic {
    pub line: usize,
    pub error: ScanError,
}

impl Diagnostic {
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "[line {}] Error: ", self.line)?;
        self.error.write_to(out)
    }
}

// Display is for logs; a lone non-ascii byte shows as the replacement character there
fn byte_text(byte: &u8) -> Cow<'_, str> {
    String::from_utf8_lossy(std::slice::from_ref(byte))
}
