//! Sequential test runner.
//!
//! Each run discovers the matching records, invokes them one by one in registration order, and returns a
//! fresh [`RunSummary`]. There is no process-wide state: to accumulate several runs, [`RunSummary::merge`]
//! them explicitly.
//!
//! A panicking callable is caught and recorded as a failure; the run carries on with the next callable.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::category::Category;
use crate::registry::{Registry, TestRecord};
use crate::report::{NullReporter, TestReporter};

/// Outcome of one test callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed(Duration),
    /// The callable returned `false`.
    Failed(Duration),
    /// The callable panicked; carries the panic message.
    Panicked(Duration, String),
}

impl TestResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Passed(_))
    }

    pub fn duration(&self) -> Duration {
        match self {
            TestResult::Passed(d) | TestResult::Failed(d) | TestResult::Panicked(d, _) => *d,
        }
    }
}

/// Counters and failure list for one or more runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ran: usize,
    pub passed: usize,
    pub failed: usize,
    /// Display names of failed tests, in invocation order
    pub failed_names: Vec<String>,
    pub duration: Duration,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one result.
    pub fn record(&mut self, name: &str, result: &TestResult) {
        self.ran += 1;
        if result.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
            self.failed_names.push(name.to_string());
        }
    }

    /// Fold another summary into this one. Merging a run into itself doubles every counter.
    pub fn merge(&mut self, other: RunSummary) {
        self.ran += other.ran;
        self.passed += other.passed;
        self.failed += other.failed;
        self.failed_names.extend(other.failed_names);
        self.duration += other.duration;
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Run configuration
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Tag filter; `None` runs every test of the category
    pub tags: Option<Vec<String>>,
    /// Stop after the first failing test
    pub stop_on_fail: bool,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the run to tests carrying one of `tags`.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_stop_on_fail(mut self, stop_on_fail: bool) -> Self {
        self.stop_on_fail = stop_on_fail;
        self
    }
}

/// Run every test of `category` that passes the configured tag filter.
#[tracing::instrument(skip_all, fields(category = %category, registered = registry.len()))]
pub fn run(
    registry: &Registry,
    category: Category,
    config: &RunConfig,
    reporter: &mut dyn TestReporter,
) -> RunSummary {
    let start = Instant::now();
    let tests = registry.discover(category, config.tags.as_deref());
    reporter.on_collection_complete(tests.len());

    let mut summary = RunSummary::new();
    for test in tests {
        reporter.on_test_start(test);
        let result = run_single_test(test);
        summary.record(test.name, &result);
        reporter.on_test_complete(test, &result);

        if config.stop_on_fail && !result.is_pass() {
            tracing::debug!(test = test.name, "stopping after first failure");
            break;
        }
    }
    summary.duration = start.elapsed();

    tracing::info!(
        ran = summary.ran,
        passed = summary.passed,
        failed = summary.failed,
        "test run complete"
    );
    reporter.on_run_complete(&summary);
    summary
}

/// Run the unit tests, optionally filtered by tag.
pub fn unit_tests<S: AsRef<str>>(registry: &Registry, tags: Option<&[S]>) -> RunSummary {
    run(registry, Category::Unit, &config_for(tags), &mut NullReporter)
}

/// Run the integration tests, optionally filtered by tag.
pub fn integration_tests<S: AsRef<str>>(registry: &Registry, tags: Option<&[S]>) -> RunSummary {
    run(registry, Category::Integration, &config_for(tags), &mut NullReporter)
}

fn config_for<S: AsRef<str>>(tags: Option<&[S]>) -> RunConfig {
    let config = RunConfig::new();
    match tags {
        Some(tags) => config.with_tags(tags.iter().map(|t| t.as_ref().to_string())),
        None => config,
    }
}

fn run_single_test(test: &TestRecord) -> TestResult {
    let start = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(test.func));
    let duration = start.elapsed();

    match outcome {
        Ok(true) => TestResult::Passed(duration),
        Ok(false) => TestResult::Failed(duration),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(test = test.name, %message, "test panicked");
            TestResult::Panicked(duration, message)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "test panicked with a non-string payload".to_string()
    }
}
