#![forbid(unsafe_code)]
//! Forward-only delimiter scanning over an in-memory byte buffer.
//!
//! A [`Scanner`] wraps a fixed buffer with a cursor and hands out text one character at a time, or in runs
//! terminated by single-character or literal-substring delimiters.
//!
//! ## Notes
//! - Scanning is single-pass: the cursor only moves forward and there is no backtracking.
//! - The buffer is the UTF-8 encoding of the input, and every byte is surfaced as one `char` (Latin-1 mapping).
//!   ASCII input round-trips exactly.
//! - This is not a lexing framework. It has no token types, lookahead rules or error recovery.
//!
//! ## Examples
//! ```rust
//! use strand_scan::Scanner;
//!
//! let mut scanner = Scanner::new("hello world");
//! assert_eq!(scanner.read_word().unwrap(), "hello");
//! assert_eq!(scanner.read_char().unwrap(), 'w');
//! assert_eq!(scanner.read_through(["rl"]).unwrap(), "orl");
//! ```
//!
//! ## See also
//! - [`Delimiters`] for the set of types accepted as delimiters.

pub mod diagnostics;
pub mod scanner;

pub use diagnostics::{ScanError, ScanResult};
pub use scanner::{Delimiters, Pieces, Scanner, split};
