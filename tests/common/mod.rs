// tests/common/mod.rs
//! Shared fixtures: a scratch workspace and a builder wired to the fake tool.

#![allow(dead_code)]

pub mod temp;

use std::{path::Path, sync::Arc};

use cloc_runner::{CachedLocator, ClocBuilder, ExecutableSource};

pub use temp::TempWorkspace;

/// POSIX shell stand-in for cloc, embedded the same way a bundled binary would be.
pub const FAKE_CLOC: &[u8] = include_bytes!("../fixtures/fake_cloc.sh");

/// Builder over the fake tool, extracted into a private directory that lives
/// as long as the harness.
pub struct Harness {
    builder: ClocBuilder,
    _extract_root: tempfile::TempDir,
}

impl Harness {
    pub fn new() -> Self {
        let extract_root = tempfile::tempdir().expect("extraction root");
        let locator = CachedLocator::scoped(ExecutableSource::embedded(FAKE_CLOC), extract_root.path());
        let builder = cloc_runner::command().locator(Arc::new(locator));
        Self { builder, _extract_root: extract_root }
    }

    pub fn builder(&self) -> ClocBuilder {
        self.builder.clone()
    }
}

/// Regular files under `root`, counted without any of the usual ignore rules.
pub fn count_regular_files(root: &Path, recurse: bool) -> u64 {
    let mut walker = ignore::WalkBuilder::new(root);
    walker.standard_filters(false);
    if !recurse {
        walker.max_depth(Some(1));
    }
    walker
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .count() as u64
}

/// A small tree with three languages spread over two levels.
pub fn sample_project() -> TempWorkspace {
    let ws = TempWorkspace::new();
    ws.create_file("main.rs", "fn main() {\n\n    // greet\n    println!(\"hi\");\n}\n");
    ws.create_file("lib.rs", "// empty crate\n");
    ws.create_file("scripts/build.sh", "#!/bin/sh\n# build\nmake\n\nmake install\n");
    ws.create_file("tools/gen.py", "# generator\nprint(1)\n");
    ws.create_file("tools/nested/notes.txt", "plain text\n");
    ws
}
