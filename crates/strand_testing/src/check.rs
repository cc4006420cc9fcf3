//! Check helpers for test callables.
//!
//! Unlike `assert!`, these never panic. A failed check logs an error event and returns `false`, so a test can
//! report what went wrong and still hand its boolean verdict back to the runner:
//!
//! ```rust
//! use strand_testing::check::{check, check_eq};
//!
//! fn adding() -> bool {
//!     check_eq(2 + 2, 4) && check(4 > 3, "4 > 3")
//! }
//! assert!(adding());
//! ```

use std::fmt::Debug;

/// Check that a condition holds.
///
/// Returns `condition`; logs `message` when it is false.
pub fn check(condition: bool, message: &str) -> bool {
    if !condition {
        tracing::error!("check failed: {}", message);
    }
    condition
}

/// Check that two values are equal.
///
/// Returns whether `left == right`; logs both values when they differ.
pub fn check_eq<T: PartialEq + Debug>(left: T, right: T) -> bool {
    let equal = left == right;
    if !equal {
        tracing::error!("check failed: left != right\n  left:  {:?}\n  right: {:?}", left, right);
    }
    equal
}

/// Check that two values differ.
///
/// Returns whether `left != right`; logs the shared value when they are equal.
pub fn check_ne<T: PartialEq + Debug>(left: T, right: T) -> bool {
    let differ = left != right;
    if !differ {
        tracing::error!("check failed: left == right\n  left:  {:?}\n  right: {:?}", left, right);
    }
    differ
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_returns_condition() {
        assert!(check(true, "never logged"));
        assert!(!check(false, "expected failure"));
    }

    #[test]
    fn test_check_eq_and_ne() {
        assert!(check_eq("a", "a"));
        assert!(!check_eq(1, 2));
        assert!(check_ne(1, 2));
        assert!(!check_ne(vec![1], vec![1]));
    }
}
