//! CLI module for strand
//!
//! ## Commands
//!
//! - `scan <file>` - Scan a file with one of the delimiter read modes
//! - `test` - Run the built-in self-test table
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `test_runner` - Console reporting and the `test` command
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod test_runner;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use clap::{Parser, Subcommand};
use strand_testing::{CATEGORIES, Category};

pub use commands::ScanMode;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Delimiter scanner and tagged self-test runner
#[derive(Parser, Debug)]
#[command(name = "strand")]
#[command(version = VERSION)]
#[command(about = "Delimiter scanner and tagged self-test runner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a file, printing one piece per line until the input is exhausted
    Scan {
        /// File to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Read mode
        #[arg(short, long, value_enum, default_value_t = ScanMode::Word)]
        mode: ScanMode,
        /// Delimiter for `until`/`through` (repeatable; escapes: \n \t \r \s \\)
        #[arg(short = 'd', long = "delim", value_name = "DELIM", allow_hyphen_values = true)]
        delims: Vec<String>,
        /// Treat delimiters as literal substrings instead of single characters
        #[arg(long)]
        literal: bool,
    },

    /// Run the built-in self-test table
    Test {
        /// Category to run (unit, integration)
        #[arg(short, long, default_value = "unit", value_name = "CATEGORY", value_parser = category_parser())]
        category: Category,
        /// Only run tests with this tag (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
        /// Stop on first failure
        #[arg(short = 'x', long = "exitfirst")]
        stop_on_fail: bool,
    },
}

/// Parser for `--category`: the vocabulary table's spellings, with each description shown in `--help`.
fn category_parser() -> impl TypedValueParser<Value = Category> {
    let values = CATEGORIES.iter().map(|info| {
        PossibleValue::new(info.canonical)
            .aliases(info.aliases.iter().copied())
            .help(info.description)
    });
    PossibleValuesParser::new(values).try_map(|name| name.parse::<Category>())
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Scan {
            file,
            mode,
            delims,
            literal,
        } => commands::scan_file(&file.to_string_lossy(), mode, &delims, literal),
        Command::Test {
            category,
            tags,
            verbose,
            stop_on_fail,
        } => {
            let tags = test_runner::resolve_tags(tags, std::env::var(test_runner::TAGS_ENV_VAR).ok());
            test_runner::run_tests(category, tags, verbose, stop_on_fail)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan_defaults() {
        let cli = Cli::try_parse_from(["strand", "scan", "input.txt"]).unwrap();
        if let Command::Scan {
            mode, delims, literal, ..
        } = cli.command
        {
            assert_eq!(mode, ScanMode::Word);
            assert!(delims.is_empty());
            assert!(!literal);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_with_delims() {
        let cli = Cli::try_parse_from([
            "strand", "scan", "in.txt", "--mode", "through", "-d", "-->", "-d", "\\n", "--literal",
        ])
        .unwrap();
        if let Command::Scan {
            mode, delims, literal, ..
        } = cli.command
        {
            assert_eq!(mode, ScanMode::Through);
            assert_eq!(delims, vec!["-->", "\\n"]);
            assert!(literal);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_test() {
        let cli = Cli::try_parse_from(["strand", "test", "-v", "-x", "-t", "Math", "-t", "Scanner"]).unwrap();
        if let Command::Test {
            category,
            tags,
            verbose,
            stop_on_fail,
        } = cli.command
        {
            assert_eq!(category, Category::Unit);
            assert_eq!(tags, vec!["Math", "Scanner"]);
            assert!(verbose);
            assert!(stop_on_fail);
        } else {
            panic!("Expected Test command");
        }
    }

    #[test]
    fn test_cli_parse_category_alias() {
        let cli = Cli::try_parse_from(["strand", "test", "--category", "int"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Test {
                category: Category::Integration,
                ..
            }
        ));
    }

    #[test]
    fn test_cli_category_help_lists_descriptions() {
        use clap::CommandFactory;

        let cli = Cli::command();
        let test = cli.find_subcommand("test").unwrap();
        let category = test.get_arguments().find(|a| a.get_id() == "category").unwrap();
        let values = category.get_possible_values();

        let names: Vec<&str> = values.iter().map(|v| v.get_name()).collect();
        assert_eq!(names, vec!["unit", "integration"]);
        for (value, info) in values.iter().zip(CATEGORIES) {
            assert_eq!(value.get_help().map(|h| h.to_string()), Some(info.description.to_string()));
            assert!(value.matches(info.aliases[0], false));
        }
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["strand", "test", "--category", "e2e"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["strand"]).is_err());
    }
}
