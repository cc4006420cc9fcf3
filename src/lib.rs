#![forbid(unsafe_code)]
//! strand: a delimiter scanner and a tagged self-test runner
//!
//! The two halves live in their own crates and never call each other:
//! - `strand_scan`: forward-only scanning of an in-memory buffer with character or substring delimiters.
//! - `strand_testing`: a registration table of `fn() -> bool` tests, filtered by category and tag, run in order.
//!
//! This crate wires them into the `strand` command-line tool.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Self-test callables**: report through their boolean return value. A panic inside one is caught by the
//!   runner and counted as a failure.

pub mod cli;
pub mod selftest;

pub use strand_scan::{Delimiters, ScanError, Scanner};
pub use strand_testing::{Category, Registry, RunSummary, TestRecord};
