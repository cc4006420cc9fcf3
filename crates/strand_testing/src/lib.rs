#![forbid(unsafe_code)]
//! Registry of tagged test callables and a sequential runner.
//!
//! Tests are zero-argument `fn() -> bool` items, registered with a [`Category`] and an optional tag. A run
//! selects one category, optionally filters by tag, invokes each selected test in registration order and
//! returns a [`RunSummary`].
//!
//! ## Notes
//! - Registration is explicit (a `const` table or `Registry::register` calls); there is no runtime discovery.
//! - Every run returns its own summary. Nothing accumulates across runs unless the caller merges summaries.
//! - The boolean return value is the pass/fail signal. Panics are caught and counted as failures.
//!
//! ## Examples
//! ```rust
//! use strand_testing::{Registry, TestRecord, unit_tests};
//!
//! fn passes() -> bool { true }
//! fn fails() -> bool { false }
//!
//! let registry = Registry::from_table(&[
//!     TestRecord::unit("passes", Some("Math"), passes),
//!     TestRecord::unit("fails", Some("Math"), fails),
//! ]);
//! let summary = unit_tests(&registry, None::<&[&str]>);
//! assert_eq!((summary.ran, summary.passed, summary.failed), (2, 1, 1));
//! assert_eq!(summary.failed_names, vec!["fails"]);
//! ```

pub mod category;
pub mod check;
pub mod registry;
pub mod report;
pub mod runner;

pub use category::{CATEGORIES, Category, CategoryInfo, UnknownCategory};
pub use registry::{Registry, TestFn, TestRecord};
pub use report::{NullReporter, TestReporter};
pub use runner::{RunConfig, RunSummary, TestResult, integration_tests, run, unit_tests};
