//! Validated, line-split merge inputs.
//!
//! A [`Document`] borrows its text and exposes it as a sequence of lines that
//! keep their terminators, so concatenating the lines reproduces the input
//! byte-for-byte. This is what lets a merge of unmodified inputs return the
//! exact original bytes, including a missing final newline.

use crate::error::{TypeError, TypeResult};
use crate::side::Side;

/// Number of leading bytes inspected for NUL when detecting binary content.
pub const BINARY_CHECK_LEN: usize = 8000;

/// One merge input, split into lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document<'a> {
    side: Side,
    text: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    /// Validate raw bytes as text and split them into lines.
    ///
    /// Fails if the bytes are not UTF-8, or if a NUL byte appears within the
    /// first [`BINARY_CHECK_LEN`] bytes.
    pub fn from_bytes(side: Side, bytes: &'a [u8]) -> TypeResult<Self> {
        let head = &bytes[..bytes.len().min(BINARY_CHECK_LEN)];
        if head.contains(&0) {
            return Err(TypeError::Binary(side));
        }
        let text = std::str::from_utf8(bytes).map_err(|e| TypeError::InvalidUtf8 {
            side,
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(Self::from_text(side, text))
    }

    /// Split already-validated text into lines.
    pub fn from_text(side: Side, text: &'a str) -> Self {
        Self {
            side,
            text,
            lines: split_lines(text),
        }
    }

    /// An empty document, used when a merge has no ancestor.
    pub fn empty(side: Side) -> Self {
        Self {
            side,
            text: "",
            lines: Vec::new(),
        }
    }

    /// Which merge input this document is.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The full original text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The lines, each including its terminator.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split text into lines, keeping each line's `\n` (or `\r\n`) terminator.
///
/// The final line is included even when it has no terminator. Empty text
/// yields no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}
