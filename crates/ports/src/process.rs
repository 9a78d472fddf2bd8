// crates/ports/src/process.rs
use cloc_runner_domain::Invocation;
use cloc_runner_shared_kernel::Result;

/// Captured result of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOutput {
    /// Exit code, `-1` when the process was terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Port for running an invocation to completion.
///
/// Implementations block the calling thread until the process exits or the
/// invocation's timeout elapses, in which case the process is killed and
/// [`ClocError::Timeout`](cloc_runner_shared_kernel::ClocError::Timeout) is returned.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> Result<ExecutionOutput>;
}
