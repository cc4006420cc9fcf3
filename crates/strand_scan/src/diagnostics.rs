//! Scanner errors.

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used by every scanner read.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors raised by [`crate::Scanner`] reads.
///
/// Running out of input part-way through a scan is not an error; only a read that starts on an exhausted
/// buffer fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum ScanError {
    #[error("end of buffer: nothing left to read at position {position}")]
    #[diagnostic(
        code(strand::scan::end_of_buffer),
        help("check `Scanner::is_exhausted()` before reading, or iterate with `Scanner::pieces`")
    )]
    EndOfBuffer { position: usize },
}

impl ScanError {
    /// Cursor position at which the failed read was attempted.
    pub fn position(&self) -> usize {
        match self {
            ScanError::EndOfBuffer { position } => *position,
        }
    }
}
