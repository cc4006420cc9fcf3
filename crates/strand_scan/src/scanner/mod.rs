//! Sequential delimiter scanner.
//!
//! ## Module Structure
//!
//! - `delimiters` - the [`Delimiters`] trait and its impls for characters, substrings and collections
//!
//! ## Read modes
//!
//! | Method | Stops after | Delimiter in result |
//! |---|---|---|
//! | [`Scanner::read_char`] | one byte | n/a |
//! | [`Scanner::read_until`] | first delimiter or end of buffer | no |
//! | [`Scanner::read_through`] | first delimiter or end of buffer | yes |
//! | [`Scanner::read_word`] | `' '` | no |
//! | [`Scanner::read_line`] | `'\n'` | no |

mod delimiters;

pub use delimiters::Delimiters;

use crate::diagnostics::{ScanError, ScanResult};

/// Forward-only reader over a fixed byte buffer.
///
/// The cursor starts at `0`, only ever moves forward, and never passes `len()`. A read that starts with the
/// cursor at the end fails with [`ScanError::EndOfBuffer`]; a read that runs out of input part-way returns
/// what it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner {
    buffer: Box<[u8]>,
    cursor: usize,
}

/// Byte range consumed by one delimited scan.
#[derive(Debug, Clone, Copy)]
struct Scan {
    start: usize,
    end: usize,
    /// Length of the terminating delimiter at the tail of `start..end` (0 when the buffer ran out)
    delimiter_len: usize,
}

impl Scanner {
    /// Create a scanner over the UTF-8 bytes of `input`.
    pub fn new(input: &str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Create a scanner over raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buffer: bytes.into().into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Current cursor position, in bytes from the start of the buffer.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total buffer length in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.buffer.len()
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Look at the next character without consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.buffer.get(self.cursor).map(|&byte| char::from(byte))
    }

    /// Read one character and advance the cursor by one.
    ///
    /// ## Errors
    /// - [`ScanError::EndOfBuffer`] if the buffer is already exhausted.
    pub fn read_char(&mut self) -> ScanResult<char> {
        self.ensure_available()?;
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        Ok(char::from(byte))
    }

    /// Read up to the next space. The space is consumed but not returned.
    pub fn read_word(&mut self) -> ScanResult<String> {
        self.read_until(' ')
    }

    /// Read up to the next `\n`. The newline is consumed but not returned.
    pub fn read_line(&mut self) -> ScanResult<String> {
        self.read_until('\n')
    }

    /// Read until a delimiter is consumed or the buffer runs out.
    ///
    /// The terminating delimiter is consumed (the next read starts right after it) but stripped from the
    /// returned text. For substring delimiters exactly the trailing occurrence that ended the scan is stripped.
    /// If the buffer runs out first, everything consumed is returned, including any partial delimiter.
    ///
    /// ## Errors
    /// - [`ScanError::EndOfBuffer`] if the buffer is already exhausted on entry.
    ///
    /// ## Examples
    /// ```rust
    /// use strand_scan::Scanner;
    ///
    /// let mut scanner = Scanner::new("key=value;rest");
    /// assert_eq!(scanner.read_until(['=', ';']).unwrap(), "key");
    /// assert_eq!(scanner.read_until(['=', ';']).unwrap(), "value");
    /// assert_eq!(scanner.read_until(['=', ';']).unwrap(), "rest");
    /// assert!(scanner.read_until(';').is_err());
    /// ```
    pub fn read_until<D: Delimiters>(&mut self, delimiters: D) -> ScanResult<String> {
        let scan = self.scan(&delimiters)?;
        Ok(decode(&self.buffer[scan.start..scan.end - scan.delimiter_len]))
    }

    /// Read until a delimiter is consumed or the buffer runs out, keeping the delimiter in the result.
    ///
    /// ## Errors
    /// - [`ScanError::EndOfBuffer`] if the buffer is already exhausted on entry.
    ///
    /// ## Examples
    /// ```rust
    /// use strand_scan::Scanner;
    ///
    /// let mut scanner = Scanner::new("a -> b");
    /// assert_eq!(scanner.read_through("->").unwrap(), "a ->");
    /// assert_eq!(scanner.read_through("->").unwrap(), " b");
    /// ```
    pub fn read_through<D: Delimiters>(&mut self, delimiters: D) -> ScanResult<String> {
        let scan = self.scan(&delimiters)?;
        Ok(decode(&self.buffer[scan.start..scan.end]))
    }

    /// Iterate over `read_until` results until the buffer is exhausted.
    ///
    /// The iterator ends cleanly instead of yielding [`ScanError::EndOfBuffer`]. A delimiter at the very end of
    /// the input does not produce a trailing empty piece.
    pub fn pieces<D: Delimiters>(&mut self, delimiters: D) -> Pieces<'_, D> {
        Pieces {
            scanner: self,
            delimiters,
        }
    }

    fn ensure_available(&self) -> ScanResult<()> {
        if self.is_exhausted() {
            return Err(ScanError::EndOfBuffer { position: self.cursor });
        }
        Ok(())
    }

    fn scan<D: Delimiters + ?Sized>(&mut self, delimiters: &D) -> ScanResult<Scan> {
        self.ensure_available()?;

        let start = self.cursor;
        let mut delimiter_len = 0;
        while self.cursor < self.buffer.len() {
            self.cursor += 1;
            let consumed = &self.buffer[start..self.cursor];
            if let Some(len) = delimiters.matched_len(consumed) {
                delimiter_len = len.min(consumed.len());
                break;
            }
        }

        tracing::trace!(start, end = self.cursor, delimiter_len, "scan finished");
        Ok(Scan {
            start,
            end: self.cursor,
            delimiter_len,
        })
    }
}

/// Iterator returned by [`Scanner::pieces`].
#[derive(Debug)]
pub struct Pieces<'s, D> {
    scanner: &'s mut Scanner,
    delimiters: D,
}

impl<D: Delimiters> Iterator for Pieces<'_, D> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.scanner.read_until(&self.delimiters).ok()
    }
}

/// Split `source` into the pieces between delimiters.
///
/// Shorthand for `Scanner::new(source).pieces(delimiters).collect()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn split<D: Delimiters>(source: &str, delimiters: D) -> Vec<String> {
    let mut scanner = Scanner::new(source);
    let pieces: Vec<String> = scanner.pieces(delimiters).collect();
    tracing::debug!(count = pieces.len(), "split finished");
    pieces
}

/// Surface each byte as one `char`.
fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

// ============================================================================
// TESTS
// ============================================================================
