//! Checking a captured transcript against the quotient table.
//!
//! A simulator run of the target program produces the same bytes the host
//! model does, unless the divide instruction (or the output path) is
//! broken. [`Verifier`] is a [`Sink`], so it can sit directly behind the
//! output primitive and flag the first divergent byte without buffering
//! the transcript.

use thiserror::Error;

use crate::{hex_line, Entry, Sink, LINE_COUNT, LINE_LEN, TABLE_LEN};

/// Result of a transcript that matched the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
}

/// The first way a transcript diverged from the table.
///
/// Line and column numbers are one-based, as an editor would show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error(
        "line {line}, column {column}: expected '{}', found '{}' (quotient {entry})",
        .expected.escape_ascii(),
        .found.escape_ascii()
    )]
    UnexpectedByte {
        line: usize,
        column: usize,
        expected: u8,
        found: u8,
        entry: Entry,
    },

    #[error(
        "transcript ended after {bytes} bytes ({lines} complete lines of {})",
        LINE_COUNT
    )]
    Truncated { lines: usize, bytes: usize },

    #[error("{extra} unexpected bytes after the last line")]
    TrailingData { extra: usize },
}

/// Incremental transcript checker.
#[derive(Debug)]
pub struct Verifier {
    pos: usize,
    expected: [u8; LINE_LEN],
    extra: usize,
    error: Option<Mismatch>,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Verifier {
    pub fn new() -> Self {
        Self {
            pos: 0,
            expected: [0; LINE_LEN],
            extra: 0,
            error: None,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The first mismatch seen, if any. Later bytes are ignored once set.
    pub fn error(&self) -> Option<&Mismatch> {
        self.error.as_ref()
    }

    pub fn finish(self) -> Result<Summary, Mismatch> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.extra > 0 {
            return Err(Mismatch::TrailingData { extra: self.extra });
        }
        if self.pos < TABLE_LEN {
            return Err(Mismatch::Truncated {
                lines: self.pos / LINE_LEN,
                bytes: self.pos,
            });
        }
        Ok(Summary { lines: LINE_COUNT })
    }
}

impl Sink for Verifier {
    fn putc(&mut self, c: u8) {
        if self.error.is_some() {
            return;
        }
        if self.pos >= TABLE_LEN {
            self.extra += 1;
            return;
        }

        let line = self.pos / LINE_LEN;
        let column = self.pos % LINE_LEN;
        // pos < TABLE_LEN, so line < LINE_COUNT.
        let entry = Entry::at_line(line);
        if column == 0 {
            self.expected = hex_line(entry.quotient);
        }

        let expected = self.expected[column];
        if c != expected {
            self.error = Some(Mismatch::UnexpectedByte {
                line: line + 1,
                column: column + 1,
                expected,
                found: c,
                entry,
            });
        }
        self.pos += 1;
    }
}

/// Checks a complete transcript.
pub fn verify(transcript: &[u8]) -> Result<Summary, Mismatch> {
    let mut verifier = Verifier::new();
    verifier.puts(transcript);
    verifier.finish()
}
