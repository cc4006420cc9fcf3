//! Integration tests for registry discovery and the runner.
//!
//! The fixture table mirrors a small arithmetic suite: two unit tests tagged "Math" (one passing, one
//! failing) and one failing integration test tagged "External Math".

use strand_testing::check::check_eq;
use strand_testing::{
    Category, NullReporter, Registry, RunConfig, RunSummary, TestRecord, TestReporter, TestResult,
    integration_tests, run, unit_tests,
};

fn adding() -> bool {
    check_eq(2 + 2, 4)
}

fn failing() -> bool {
    check_eq(2 + 2, 1)
}

fn integrated() -> bool {
    let a = 2;
    check_eq(a + 2, 1)
}

const TESTS: &[TestRecord] = &[
    TestRecord::unit("A", Some("Math"), adding),
    TestRecord::unit("B", Some("Math"), failing),
    TestRecord::integration("C", Some("External Math"), integrated),
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("strand_testing=debug"))
        .with_test_writer()
        .try_init();
}

#[test]
fn unit_run_without_filter() {
    init_tracing();
    let registry = Registry::from_table(TESTS);
    let summary = unit_tests(&registry, None::<&[&str]>);

    assert_eq!(summary.ran, 2);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.failed_names, vec!["B"]);
}

#[test]
fn integration_run_without_filter() {
    let registry = Registry::from_table(TESTS);
    let summary = integration_tests(&registry, None::<&[&str]>);

    assert_eq!(summary.ran, 1);
    assert_eq!(summary.passed, 0);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.failed_names, vec!["C"]);
}

#[test]
fn unit_run_with_unmatched_tag_runs_nothing() {
    let registry = Registry::from_table(TESTS);
    let summary = unit_tests(&registry, Some(&["Other"][..]));

    assert_eq!(summary, RunSummary { duration: summary.duration, ..RunSummary::default() });
    assert!(summary.all_passed());
}

#[test]
fn integration_run_with_matching_tag() {
    let registry = Registry::from_table(TESTS);
    let tags = vec![String::from("External Math")];
    let summary = integration_tests(&registry, Some(tags.as_slice()));
    assert_eq!(summary.ran, 1);
    assert_eq!(summary.failed_names, vec!["C"]);
}

#[test]
fn untagged_tests_excluded_only_when_filtering() {
    let mut registry = Registry::from_table(TESTS);
    registry.register(TestRecord::unit("D", None, adding));

    assert_eq!(unit_tests(&registry, None::<&[&str]>).ran, 3);
    assert_eq!(unit_tests(&registry, Some(&["Math"][..])).ran, 2);
}

#[test]
fn runs_are_independent_and_merge_linearly() {
    let registry = Registry::from_table(TESTS);
    let first = unit_tests(&registry, None::<&[&str]>);
    let second = unit_tests(&registry, None::<&[&str]>);

    // no hidden state: the second run starts from zero
    assert_eq!(second.ran, 2);

    let mut total = first.clone();
    total.merge(second);
    assert_eq!(total.ran, 2 * first.ran);
    assert_eq!(total.passed, 2 * first.passed);
    assert_eq!(total.failed, 2 * first.failed);
    assert_eq!(total.failed_names, vec!["B", "B"]);
}

/// Reporter that records the hook sequence.
#[derive(Default)]
struct Recording {
    events: Vec<String>,
}

impl TestReporter for Recording {
    fn on_collection_complete(&mut self, test_count: usize) {
        self.events.push(format!("collected {test_count}"));
    }

    fn on_test_start(&mut self, test: &TestRecord) {
        self.events.push(format!("start {}", test.name));
    }

    fn on_test_complete(&mut self, test: &TestRecord, result: &TestResult) {
        let verdict = if result.is_pass() { "pass" } else { "fail" };
        self.events.push(format!("{verdict} {}", test.name));
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        self.events.push(format!("done {}/{}", summary.passed, summary.ran));
    }
}

#[test]
fn reporter_sees_every_stage_in_order() {
    let registry = Registry::from_table(TESTS);
    let mut reporter = Recording::default();
    run(&registry, Category::Unit, &RunConfig::new(), &mut reporter);

    assert_eq!(
        reporter.events,
        vec!["collected 2", "start A", "pass A", "start B", "fail B", "done 1/2"]
    );
}

#[test]
fn config_tags_filter_matches_convenience_entry_point() {
    let registry = Registry::from_table(TESTS);
    let config = RunConfig::new().with_tags(["Math"]);
    let via_config = run(&registry, Category::Unit, &config, &mut NullReporter);
    let via_helper = unit_tests(&registry, Some(&["Math"][..]));

    assert_eq!(via_config.ran, via_helper.ran);
    assert_eq!(via_config.failed_names, via_helper.failed_names);
}
