//! Reporting hooks for test runs.
//!
//! The runner calls a [`TestReporter`] at each stage so output formats stay separate from execution.

use crate::registry::TestRecord;
use crate::runner::{RunSummary, TestResult};

/// Trait for reporting test execution results.
///
/// Implement this trait to customize test output format.
pub trait TestReporter {
    /// Called once the filtered test list is known
    fn on_collection_complete(&mut self, _test_count: usize) {}

    /// Called before a test is invoked
    fn on_test_start(&mut self, _test: &TestRecord) {}

    /// Called when a test completes
    fn on_test_complete(&mut self, test: &TestRecord, result: &TestResult);

    /// Called when all tests have completed
    fn on_run_complete(&mut self, summary: &RunSummary);
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl TestReporter for NullReporter {
    fn on_test_complete(&mut self, _test: &TestRecord, _result: &TestResult) {}

    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}
