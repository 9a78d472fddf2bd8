// tests/integration/options_file.rs
use std::ffi::OsString;

use cloc_runner::ClocOptions;

use crate::common::{Harness, TempWorkspace, sample_project};

#[test]
fn options_loaded_from_json_reach_the_command_line() {
    let harness = Harness::new();
    let project = sample_project();
    let settings = TempWorkspace::new();
    let path = settings.create_file(
        "cloc.json",
        r#"{"timeout": 30, "cores": 2, "max_file_size": 5, "follow_links": true, "skip_uniqueness": true}"#,
    );

    let options = ClocOptions::load(&path).expect("loads");
    let cloc = harness.builder().apply(&options).expect("valid").target(project.path()).expect("target");
    let args: Vec<OsString> = cloc.base_invocation().args().to_vec();

    for expected in ["--json", "--quiet", "--follow-links", "--skip-uniqueness", "--processes=2", "--max-file-size=5"] {
        assert!(args.contains(&OsString::from(expected)), "missing {expected} in {args:?}");
    }
    assert!(!cloc.lines_by_language().expect("report").is_empty());
}

#[test]
fn invalid_options_files_are_configuration_errors() {
    let settings = TempWorkspace::new();

    let unknown = settings.create_file("unknown.json", r#"{"colour": "blue"}"#);
    assert!(ClocOptions::load(&unknown).expect_err("unknown field").is_configuration());

    let negative = settings.create_file("negative.json", r#"{"max_file_size": -1}"#);
    assert!(ClocOptions::load(&negative).expect_err("negative").is_configuration());

    let zero = settings.create_file("zero.json", r#"{"max_file_size": 0}"#);
    let options = ClocOptions::load(&zero).expect("parses");
    let harness = Harness::new();
    assert!(harness.builder().apply(&options).expect_err("zero size").is_configuration());
}
