// crates/usecase/src/command.rs
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use cloc_runner_domain::{Invocation, Report, ReportMode};
use cloc_runner_ports::{OutputMapper, ProcessRunner};
use cloc_runner_shared_kernel::{ErrorContext, Result};
use log::debug;

use crate::{orchestrator::RunReport, version::query_version};

/// A fully configured command over one target.
///
/// Immutable: every report mode runs a fresh copy of the base invocation
/// with its own trailing switch, so calling one mode never affects another
/// and a command can be shared between threads.
#[derive(Clone)]
pub struct Cloc {
    target: PathBuf,
    invocation: Invocation,
    runner: Arc<dyn ProcessRunner>,
    mapper: Arc<dyn OutputMapper>,
}

impl Cloc {
    pub(crate) fn new(
        target: PathBuf,
        invocation: Invocation,
        runner: Arc<dyn ProcessRunner>,
        mapper: Arc<dyn OutputMapper>,
    ) -> Self {
        Self { target, invocation, runner, mapper }
    }

    /// Counts aggregated by language.
    pub fn lines_by_language(&self) -> Result<Report> {
        self.report(ReportMode::ByLanguage)
    }

    /// Counts for every individual file.
    pub fn lines_by_file(&self) -> Result<Report> {
        self.report(ReportMode::ByFile)
    }

    /// Counts for every file, broken down by language as well.
    pub fn lines_by_file_and_language(&self) -> Result<Report> {
        self.report(ReportMode::ByFileAndLanguage)
    }

    /// Number of files per language, without line classification.
    pub fn count_files(&self) -> Result<Report> {
        self.report(ReportMode::CountFiles)
    }

    pub fn report(&self, mode: ReportMode) -> Result<Report> {
        let invocation = self.invocation(mode);
        debug!("counting {} ({mode})", self.target.display());
        RunReport::new(self.runner.as_ref(), self.mapper.as_ref())
            .run(&invocation)
            .with_context(|| format!("counting {} {mode}", self.target.display()))
    }

    /// The exact invocation `mode` runs.
    pub fn invocation(&self, mode: ReportMode) -> Invocation {
        match mode.flag() {
            Some(flag) => self.invocation.with_argument(flag),
            None => self.invocation.clone(),
        }
    }

    pub fn base_invocation(&self) -> &Invocation {
        &self.invocation
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Version string reported by the configured executable.
    pub fn tool_version(&self) -> Result<String> {
        query_version(self.runner.as_ref(), self.invocation.program(), self.invocation.timeout())
    }
}

impl fmt::Debug for Cloc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cloc")
            .field("target", &self.target)
            .field("invocation", &self.invocation)
            .field("mapper", &self.mapper)
            .finish_non_exhaustive()
    }
}
