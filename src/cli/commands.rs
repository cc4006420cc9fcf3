//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};

use clap::ValueEnum;
use strand_scan::{ScanResult, Scanner};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// The scanner holds the whole input in memory, so larger files are rejected up front.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read mode for `strand scan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScanMode {
    /// One character per piece
    Char,
    /// Pieces separated by spaces
    Word,
    /// Pieces separated by newlines
    Line,
    /// Pieces up to (excluding) the given delimiters
    Until,
    /// Pieces up to and including the given delimiters
    Through,
}

/// Delimiters parsed from `-d` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterArgs {
    Chars(Vec<char>),
    Literals(Vec<String>),
}

impl DelimiterArgs {
    /// Parse raw `-d` values, unescaping each one.
    ///
    /// Without `literal`, every value must unescape to exactly one ASCII character. The scanner compares
    /// character delimiters against single bytes, so anything wider has to go through `--literal`, which
    /// matches the full UTF-8 encoding.
    pub fn parse(raw: &[String], literal: bool) -> CliResult<Self> {
        let values = raw.iter().map(|r| unescape(r)).collect::<CliResult<Vec<String>>>()?;
        if literal {
            return Ok(DelimiterArgs::Literals(values));
        }

        let mut chars = Vec::with_capacity(values.len());
        for (value, original) in values.iter().zip(raw) {
            let mut it = value.chars();
            match (it.next(), it.next()) {
                (Some(c), None) if c.is_ascii() => chars.push(c),
                (Some(c), None) => {
                    return Err(CliError::failure(format!(
                        "Delimiter '{}' is not ASCII and cannot match as a single character (use --literal)",
                        c
                    )));
                }
                _ => {
                    return Err(CliError::failure(format!(
                        "Delimiter '{}' is not a single character (use --literal for substrings)",
                        original
                    )));
                }
            }
        }
        Ok(DelimiterArgs::Chars(chars))
    }
}

/// Expand `\n`, `\t`, `\r`, `\s` (space) and `\\` escapes.
fn unescape(raw: &str) -> CliResult<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('s') => out.push(' '),
            Some('\\') => out.push('\\'),
            Some(other) => {
                return Err(CliError::failure(format!(
                    "Unknown escape '\\{}' in delimiter '{}'",
                    other, raw
                )));
            }
            None => {
                return Err(CliError::failure(format!(
                    "Dangling '\\' at the end of delimiter '{}'",
                    raw
                )));
            }
        }
    }
    Ok(out)
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Scan `source` from start to end with one read mode.
///
/// Reads repeat until the buffer is exhausted, so this never hits the end-of-buffer error on well-formed
/// calls; any scanner error is still propagated.
pub fn scan_source(source: &str, mode: ScanMode, delimiters: &DelimiterArgs) -> ScanResult<Vec<String>> {
    let mut scanner = Scanner::new(source);
    let mut pieces = Vec::new();

    while !scanner.is_exhausted() {
        let piece = match (mode, delimiters) {
            (ScanMode::Char, _) => scanner.read_char().map(String::from)?,
            (ScanMode::Word, _) => scanner.read_word()?,
            (ScanMode::Line, _) => scanner.read_line()?,
            (ScanMode::Until, DelimiterArgs::Chars(set)) => scanner.read_until(set)?,
            (ScanMode::Until, DelimiterArgs::Literals(set)) => scanner.read_until(set)?,
            (ScanMode::Through, DelimiterArgs::Chars(set)) => scanner.read_through(set)?,
            (ScanMode::Through, DelimiterArgs::Literals(set)) => scanner.read_through(set)?,
        };
        pieces.push(piece);
    }

    Ok(pieces)
}

/// `strand scan`: print every piece of a file, one per line.
pub fn scan_file(file_path: &str, mode: ScanMode, raw_delims: &[String], literal: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let delimiters = DelimiterArgs::parse(raw_delims, literal)?;

    if !source.is_ascii() {
        tracing::warn!(file = file_path, "input is not ASCII; pieces are printed one character per byte");
    }
    if raw_delims.is_empty() && matches!(mode, ScanMode::Until | ScanMode::Through) {
        tracing::warn!("no delimiters given; the whole file is read as one piece");
    }

    let pieces = scan_source(&source, mode, &delimiters)
        .map_err(|e| CliError::failure(format!("{:?}", miette::Report::new(e))))?;
    tracing::debug!(file = file_path, pieces = pieces.len(), "scan complete");

    let mut out = io::stdout().lock();
    for piece in &pieces {
        writeln!(out, "{:?}", piece).map_err(|e| CliError::failure(format!("Error writing output: {}", e)))?;
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("\\n").unwrap(), "\n");
        assert_eq!(unescape("a\\sb").unwrap(), "a b");
        assert_eq!(unescape("\\\\").unwrap(), "\\");
        assert!(unescape("\\q").is_err());
        assert!(unescape("end\\").is_err());
    }

    #[test]
    fn test_parse_char_delimiters() {
        let parsed = DelimiterArgs::parse(&raw(&[",", "\\t"]), false).unwrap();
        assert_eq!(parsed, DelimiterArgs::Chars(vec![',', '\t']));
    }

    #[test]
    fn test_parse_rejects_multichar_without_literal() {
        let err = DelimiterArgs::parse(&raw(&["->"]), false).unwrap_err();
        assert!(err.message.contains("--literal"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_parse_rejects_non_ascii_char() {
        for delim in ["é", "鉄"] {
            let err = DelimiterArgs::parse(&raw(&[delim]), false).unwrap_err();
            assert!(err.message.contains("not ASCII"), "{}", err.message);
            assert!(err.message.contains("--literal"));
        }
    }

    #[test]
    fn test_non_ascii_literal_does_not_split_other_characters() {
        let literal = DelimiterArgs::parse(&raw(&["é"]), true).unwrap();
        assert_eq!(scan_source("caféx", ScanMode::Until, &literal).unwrap(), vec!["caf", "x"]);

        let pieces = scan_source("a鉄b", ScanMode::Until, &literal).unwrap();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].chars().count(), "a鉄b".len());
    }

    #[test]
    fn test_parse_literal_delimiters() {
        let parsed = DelimiterArgs::parse(&raw(&["->", "\\n\\n"]), true).unwrap();
        assert_eq!(parsed, DelimiterArgs::Literals(vec!["->".to_string(), "\n\n".to_string()]));
    }

    #[test]
    fn test_scan_source_modes() {
        let none = DelimiterArgs::Chars(Vec::new());
        assert_eq!(scan_source("ab", ScanMode::Char, &none).unwrap(), vec!["a", "b"]);
        assert_eq!(scan_source("a b", ScanMode::Word, &none).unwrap(), vec!["a", "b"]);
        assert_eq!(scan_source("a\nb\n", ScanMode::Line, &none).unwrap(), vec!["a", "b"]);
        assert_eq!(scan_source("a b", ScanMode::Until, &none).unwrap(), vec!["a b"]);
        assert!(scan_source("", ScanMode::Line, &none).unwrap().is_empty());
    }

    #[test]
    fn test_scan_source_with_delimiters() {
        let chars = DelimiterArgs::Chars(vec![';', '=']);
        assert_eq!(scan_source("a=1;b=2", ScanMode::Until, &chars).unwrap(), vec!["a", "1", "b", "2"]);

        let literals = DelimiterArgs::Literals(vec!["::".to_string()]);
        assert_eq!(
            scan_source("std::io::Write", ScanMode::Through, &literals).unwrap(),
            vec!["std::", "io::", "Write"]
        );
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.txt").unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }
}
