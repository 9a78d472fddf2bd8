// crates/usecase/src/version.rs
use std::{path::Path, time::Duration};

use cloc_runner_domain::Invocation;
use cloc_runner_ports::ProcessRunner;
use cloc_runner_shared_kernel::{OutputError, Result};
use log::debug;

use crate::orchestrator::failure;

/// Run `program --version` and return what it printed, trimmed.
pub fn query_version(runner: &dyn ProcessRunner, program: &Path, timeout: Option<Duration>) -> Result<String> {
    let mut builder = Invocation::builder();
    builder.program(program.to_path_buf()).arg("--version").timeout(timeout);
    let invocation = Invocation::build(&builder)?;

    let output = runner.run(&invocation)?;
    if !output.success() {
        return Err(failure(output).into());
    }
    let version = output.stdout.trim();
    if version.is_empty() {
        return Err(OutputError::UnexpectedShape { details: "empty version string".to_string() }.into());
    }
    debug!("{} reports version {version}", program.display());
    Ok(version.to_string())
}
