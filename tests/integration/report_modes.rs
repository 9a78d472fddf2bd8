// tests/integration/report_modes.rs
use cloc_runner::{Report, ReportMode};

use crate::common::{Harness, TempWorkspace, count_regular_files, sample_project};

fn header_files(report: &Report) -> u64 {
    report.header().expect("typed header").expect("header present").n_files
}

#[test]
fn every_mode_reports_header_and_sum_matching_the_filesystem() {
    let harness = Harness::new();
    let project = sample_project();
    let expected = count_regular_files(project.path(), true);
    let cloc = harness.builder().target(project.path()).expect("target exists");

    for mode in ReportMode::ALL {
        let report = cloc.report(mode).unwrap_or_else(|e| panic!("{mode}: {e}"));
        assert!(report.contains_key("header"), "{mode} lacks header");
        assert!(report.contains_key("SUM"), "{mode} lacks SUM");
        assert_eq!(header_files(&report), expected, "{mode}");
    }
}

#[test]
fn by_language_totals_add_up() {
    let harness = Harness::new();
    let project = sample_project();
    let report = harness.builder().target(project.path()).expect("target").lines_by_language().expect("report");

    let counts = report.counts().expect("typed entries");
    assert_eq!(counts.len(), 4);
    assert_eq!(counts["Rust"].n_files.map(|n| n.value()), Some(2));
    assert_eq!(counts["Rust"].code.value(), 3);

    let sum = report.sum().expect("typed SUM").expect("SUM present");
    assert_eq!(sum.blank.value(), 2);
    assert_eq!(sum.comment.value(), 5);
    assert_eq!(sum.code.value(), 7);
    let per_language: u64 = counts.values().map(|c| c.lines().value()).sum();
    assert_eq!(per_language, sum.lines().value());
}

#[test]
fn per_file_modes_have_one_entry_per_file() {
    let harness = Harness::new();
    let project = sample_project();
    let files = count_regular_files(project.path(), true) as usize;
    let cloc = harness.builder().target(project.path()).expect("target");

    for report in [cloc.lines_by_file().expect("by file"), cloc.lines_by_file_and_language().expect("by file+lang")] {
        assert_eq!(report.len(), files + 2);
        assert_eq!(report.entries().count(), files);
    }
}

#[test]
fn count_files_carries_no_line_classification() {
    let harness = Harness::new();
    let project = sample_project();
    let report = harness.builder().target(project.path()).expect("target").count_files().expect("report");

    let sum = report.get("SUM").and_then(|v| v.as_object()).expect("SUM object");
    assert_eq!(sum.get("nFiles").and_then(|v| v.as_u64()), Some(5));
    assert!(!sum.contains_key("code"));
}

#[test]
fn no_recurse_only_counts_top_level_files() {
    let harness = Harness::new();
    let project = sample_project();
    let report = harness
        .builder()
        .no_recurse(true)
        .target(project.path())
        .expect("target")
        .lines_by_language()
        .expect("report");
    assert_eq!(header_files(&report), count_regular_files(project.path(), false));
    assert_eq!(header_files(&report), 2);
}

#[test]
fn empty_directory_yields_an_empty_report() {
    let harness = Harness::new();
    let empty = TempWorkspace::new();
    let cloc = harness.builder().target(empty.path()).expect("target");
    for mode in ReportMode::ALL {
        assert!(cloc.report(mode).expect("report").is_empty(), "{mode}");
    }
}

#[test]
fn a_single_file_can_be_the_target() {
    let harness = Harness::new();
    let project = sample_project();
    let report = harness
        .builder()
        .target(project.path().join("main.rs"))
        .expect("target")
        .lines_by_file()
        .expect("report");
    assert_eq!(header_files(&report), 1);
    assert_eq!(report.len(), 3);
}

#[test]
fn tool_version_comes_from_the_executable() {
    let harness = Harness::new();
    let project = sample_project();
    let cloc = harness.builder().target(project.path()).expect("target");
    assert_eq!(cloc.tool_version().expect("version"), "2.00");
}

#[test]
fn commands_can_run_from_several_threads() {
    let harness = Harness::new();
    let project = sample_project();
    let cloc = harness.builder().all_cores().target(project.path()).expect("target");

    std::thread::scope(|scope| {
        let cloc = &cloc;
        let handles: Vec<_> = ReportMode::ALL
            .into_iter()
            .map(|mode| scope.spawn(move || cloc.report(mode).map(|r| header_files(&r))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("join").expect("report"), 5);
        }
    });
}
