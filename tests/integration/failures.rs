// tests/integration/failures.rs
use std::time::{Duration, Instant};

use cloc_runner::{ClocError, ExecutionError};

use crate::common::{Harness, TempWorkspace, sample_project};

#[test]
fn missing_target_is_a_configuration_error() {
    let harness = Harness::new();
    let ws = TempWorkspace::new();
    let missing = ws.path().join("nope");

    let err = harness.builder().target(&missing).expect_err("missing target");
    assert!(err.is_configuration());
    assert!(err.to_string().contains(&missing.display().to_string()));
}

#[test]
fn non_zero_exit_reports_standard_error() {
    let harness = Harness::new();
    let project = sample_project();
    project.mark(".fail");

    let err = harness.builder().target(project.path()).expect("target").lines_by_language().expect_err("fails");
    match err.root() {
        ClocError::Execution(ExecutionError::NonZeroExit { code, stderr }) => {
            assert_eq!(*code, 3);
            assert_eq!(stderr, "simulated failure");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_json_output_is_malformed() {
    let harness = Harness::new();
    let project = sample_project();
    project.mark(".garbage");

    let err = harness.builder().target(project.path()).expect("target").lines_by_file().expect_err("garbage");
    assert!(err.is_malformed_output());
}

#[test]
fn slow_runs_are_killed_at_the_deadline() {
    let harness = Harness::new();
    let project = sample_project();
    project.mark(".slow");
    let cloc = harness.builder().timeout(1).target(project.path()).expect("target");

    let started = Instant::now();
    let err = cloc.count_files().expect_err("times out");
    assert!(err.is_timeout());
    assert!(started.elapsed() < Duration::from_secs(15), "took {:?}", started.elapsed());
}

#[test]
fn zero_timeout_means_unbounded() {
    let harness = Harness::new();
    let project = sample_project();
    let cloc = harness.builder().timeout(0).target(project.path()).expect("target");
    assert_eq!(cloc.base_invocation().timeout(), None);
    assert!(!cloc.lines_by_language().expect("report").is_empty());
}

#[test]
fn zero_max_file_size_fails_before_running() {
    let harness = Harness::new();
    let err = harness.builder().max_file_size(0).expect_err("rejected");
    assert!(err.is_configuration());
}

#[test]
fn unspawnable_executable_is_an_execution_error() {
    let project = sample_project();
    let cloc = cloc_runner::command()
        .executable(project.path().join("no-such-cloc"))
        .target(project.path())
        .expect("target");

    let err = cloc.lines_by_language().expect_err("cannot spawn");
    assert!(matches!(err.root(), ClocError::Execution(ExecutionError::Spawn { .. })));
}
