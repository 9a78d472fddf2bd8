use cloc_runner_domain::{Invocation, Report};
use cloc_runner_ports::{ExecutionOutput, OutputMapper, ProcessRunner};
use cloc_runner_shared_kernel::{ExecutionError, Result};

/// Runs one invocation and turns what it printed into a [`Report`].
pub struct RunReport<'a> {
    runner: &'a dyn ProcessRunner,
    mapper: &'a dyn OutputMapper,
}

impl<'a> RunReport<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, mapper: &'a dyn OutputMapper) -> Self {
        Self { runner, mapper }
    }

    pub fn run(&self, invocation: &Invocation) -> Result<Report> {
        let output = self.runner.run(invocation)?;
        self.interpret(output)
    }

    /// A failed run reports its standard error and its stdout is never parsed.
    pub fn interpret(&self, output: ExecutionOutput) -> Result<Report> {
        if !output.success() {
            return Err(failure(output).into());
        }
        let tree = self.mapper.read_tree(&output.stdout)?;
        Ok(Report::from_tree(tree))
    }
}

pub(crate) fn failure(output: ExecutionOutput) -> ExecutionError {
    let stderr = output.stderr.trim();
    let stderr = if stderr.is_empty() {
        format!("exited with status {}", output.exit_code)
    } else {
        stderr.to_string()
    };
    ExecutionError::NonZeroExit { code: output.exit_code, stderr }
}
