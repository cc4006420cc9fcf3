//! Built-in self-test table run by `strand test`.
//!
//! The "Math" and "External Math" entries are the sample suite; `failing` and `integrated` fail on purpose so
//! the failure path of the runner is visible. The "Scanner" entries exercise `strand_scan` end to end and are
//! expected to pass.

use std::fs;

use strand_scan::{ScanError, Scanner, split};
use strand_testing::check::{check, check_eq, check_ne};
use strand_testing::{Registry, TestRecord};

/// Registration table, in invocation order.
pub const SELF_TESTS: &[TestRecord] = &[
    TestRecord::unit("adding", Some("Math"), adding),
    TestRecord::unit("failing", Some("Math"), failing),
    TestRecord::integration("integrated", Some("External Math"), integrated),
    TestRecord::unit("scanner_reads_words", Some("Scanner"), scanner_reads_words),
    TestRecord::unit("scanner_reads_through", Some("Scanner"), scanner_reads_through),
    TestRecord::unit("scanner_substring_delimiters", Some("Scanner"), scanner_substring_delimiters),
    TestRecord::unit("scanner_end_of_buffer", Some("Scanner"), scanner_end_of_buffer),
    TestRecord::integration("scanner_reads_file_lines", Some("Scanner"), scanner_reads_file_lines),
];

/// A fresh registry over [`SELF_TESTS`].
pub fn registry() -> Registry {
    Registry::from_table(SELF_TESTS)
}

fn adding() -> bool {
    let a = 2;
    let b = 2;
    check(a + b == 4, "2 + 2 != 4")
}

fn failing() -> bool {
    let a = 2;
    let b = 2;
    check(a + b == 1, "2 + 2 != 1")
}

fn integrated() -> bool {
    // stands in for a value fetched from an external service
    let a = 2;
    let b = 2;
    check(a + b == 1, "2 + 2 != 1")
}

fn scanner_reads_words() -> bool {
    let mut scanner = Scanner::new("hello world");
    check_eq(scanner.read_word(), Ok("hello".to_string()))
        && check_eq(scanner.read_char(), Ok('w'))
        && check_eq(scanner.read_word(), Ok("orld".to_string()))
        && check(scanner.is_exhausted(), "buffer should be exhausted")
}

fn scanner_reads_through() -> bool {
    let mut scanner = Scanner::new("hello world");
    check_eq(scanner.read_through(' '), Ok("hello ".to_string()))
        && check_eq(scanner.position(), 6)
        && check_ne(scanner.remaining(), 0)
}

fn scanner_substring_delimiters() -> bool {
    let mut scanner = Scanner::new("a -> b => c");
    check_eq(scanner.read_until(["->", "=>"]), Ok("a ".to_string()))
        && check_eq(scanner.read_through(["->", "=>"]), Ok(" b =>".to_string()))
        && check_eq(scanner.read_until(["->", "=>"]), Ok(" c".to_string()))
}

fn scanner_end_of_buffer() -> bool {
    let mut empty = Scanner::new("");
    let mut done = Scanner::new("x");
    check_eq(empty.read_char(), Err(ScanError::EndOfBuffer { position: 0 }))
        && check_eq(done.read_char(), Ok('x'))
        && check_eq(done.read_line(), Err(ScanError::EndOfBuffer { position: 1 }))
}

fn scanner_reads_file_lines() -> bool {
    let path = std::env::temp_dir().join(format!("strand_selftest_{}.txt", std::process::id()));
    if let Err(e) = fs::write(&path, "alpha\nbeta\ngamma\n") {
        return check(false, &format!("cannot write {}: {}", path.display(), e));
    }
    let contents = fs::read_to_string(&path);
    let _ = fs::remove_file(&path);

    match contents {
        Ok(text) => check_eq(split(&text, '\n'), vec![
            "alpha".to_string(),
            "beta".to_string(),
            "gamma".to_string(),
        ]),
        Err(e) => check(false, &format!("cannot read {}: {}", path.display(), e)),
    }
}
