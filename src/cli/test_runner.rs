//! Test runner front end (pytest-style output)
//!
//! Runs the built-in self-test table through `strand_testing` and reports with [`ConsoleReporter`].
//!
//! ## Tag selection
//!
//! `-t/--tag` flags win. Without them, `STRAND_TEST_TAGS` (comma-separated) is used. With neither, no tag
//! filter is applied and every test of the category runs.

use strand_testing::{Category, RunConfig, RunSummary, TestRecord, TestReporter, TestResult};

use super::{CliError, CliResult, ExitCode};
use crate::selftest;

/// Environment variable holding a comma-separated default tag filter.
pub const TAGS_ENV_VAR: &str = "STRAND_TEST_TAGS";

// ============================================================================
// Console reporter
// ============================================================================

/// Default console reporter (pytest-style)
#[derive(Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
    /// (test name, failure detail) in invocation order
    failures: Vec<(String, String)>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            failures: Vec::new(),
        }
    }
}

impl TestReporter for ConsoleReporter {
    fn on_collection_complete(&mut self, test_count: usize) {
        if test_count == 0 {
            eprintln!("No tests collected");
            return;
        }
        eprintln!("\x1b[1m=================== test session starts ===================\x1b[0m");
        eprintln!("collected {} item(s)", test_count);
        eprintln!();
    }

    fn on_test_start(&mut self, test: &TestRecord) {
        if self.verbose {
            eprint!("{} ... ", test.name);
        }
    }

    fn on_test_complete(&mut self, test: &TestRecord, result: &TestResult) {
        let status = match result {
            TestResult::Passed(d) => {
                if self.verbose {
                    format!("\x1b[32mPASSED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[32m.\x1b[0m".to_string()
                }
            }
            TestResult::Failed(d) | TestResult::Panicked(d, _) => {
                if self.verbose {
                    format!("\x1b[31mFAILED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[31mF\x1b[0m".to_string()
                }
            }
        };

        if self.verbose {
            eprintln!("{}", status);
        } else {
            eprint!("{}", status);
        }

        match result {
            TestResult::Passed(_) => {}
            TestResult::Failed(_) => self.failures.push((test.name.to_string(), "returned false".to_string())),
            TestResult::Panicked(_, message) => {
                self.failures.push((test.name.to_string(), format!("panicked: {}", message)))
            }
        }
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        if !self.verbose {
            eprintln!();
        }

        if !self.failures.is_empty() {
            eprintln!();
            eprintln!("\x1b[1;31m=================== FAILURES ===================\x1b[0m");
            for (name, detail) in &self.failures {
                eprintln!("\x1b[1m___________ {} ___________\x1b[0m", name);
                eprintln!("    {}", detail);
            }
        }

        eprintln!();
        let color = if summary.all_passed() { "\x1b[1;32m" } else { "\x1b[1;31m" };
        eprintln!("{}{}\x1b[0m", color, summary_line(summary));
    }
}

/// Plain summary line, e.g. `====== 1 passed, 1 failed in 0.00s ======`.
pub fn summary_line(summary: &RunSummary) -> String {
    let mut parts = Vec::new();
    if summary.passed > 0 {
        parts.push(format!("{} passed", summary.passed));
    }
    if summary.failed > 0 {
        parts.push(format!("{} failed", summary.failed));
    }
    if parts.is_empty() {
        parts.push("no tests ran".to_string());
    }

    format!(
        "====== {} in {:.2}s ======",
        parts.join(", "),
        summary.duration.as_secs_f64()
    )
}

// ============================================================================
// Command
// ============================================================================

/// Decide the tag filter from CLI flags and the environment.
///
/// Returns `None` (no filtering) when neither source names a tag.
pub fn resolve_tags(cli_tags: Vec<String>, env_tags: Option<String>) -> Option<Vec<String>> {
    if !cli_tags.is_empty() {
        return Some(cli_tags);
    }

    let from_env: Vec<String> = env_tags?
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if from_env.is_empty() { None } else { Some(from_env) }
}

/// Run the self-test table for one category.
pub fn run_tests(
    category: Category,
    tags: Option<Vec<String>>,
    verbose: bool,
    stop_on_fail: bool,
) -> CliResult<ExitCode> {
    let registry = selftest::registry();
    let mut config = RunConfig::new().with_stop_on_fail(stop_on_fail);
    config.tags = tags;

    let mut reporter = ConsoleReporter::new(verbose);
    let summary = strand_testing::run(&registry, category, &config, &mut reporter);

    if summary.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Tests failed - return error with empty message (summary already printed)
        Err(CliError::new("", ExitCode::FAILURE))
    }
}
