// crates/domain/src/invocation.rs
use std::{
    ffi::{OsStr, OsString},
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use cloc_runner_shared_kernel::{ConfigurationError, Result};
use derive_builder::Builder;

/// Immutable description of one external process run.
///
/// Produced once per target by the command builder and copied (never
/// mutated) whenever a report mode needs an extra trailing argument.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Invocation {
    program: PathBuf,
    #[builder(default, setter(each(name = "arg", into)))]
    args: Vec<OsString>,
    #[builder(default)]
    working_dir: Option<PathBuf>,
    /// `None` means the run is unbounded.
    #[builder(default)]
    timeout: Option<Duration>,
}

impl Invocation {
    pub fn builder() -> InvocationBuilder {
        InvocationBuilder::default()
    }

    /// Finish an [`InvocationBuilder`], reporting a missing program as a configuration error.
    pub fn build(builder: &InvocationBuilder) -> Result<Self> {
        let invocation = builder.build().map_err(|e| ConfigurationError::Invocation(e.to_string()))?;
        Ok(invocation.normalized())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Copy of this invocation with `value` appended to the argument list.
    #[must_use]
    pub fn with_argument(&self, value: impl Into<OsString>) -> Self {
        let mut copy = self.clone();
        copy.args.push(value.into());
        copy
    }

    /// Copy of this invocation bound to a different timeout.
    #[must_use]
    pub fn with_timeout(&self, timeout: Option<Duration>) -> Self {
        Self { timeout: timeout.filter(|t| !t.is_zero()), ..self.clone() }
    }

    /// Whether `arg` appears anywhere in the argument list.
    pub fn has_argument(&self, arg: impl AsRef<OsStr>) -> bool {
        let arg = arg.as_ref();
        self.args.iter().any(|a| a == arg)
    }

    // A zero timeout is the same as none at all.
    fn normalized(mut self) -> Self {
        self.timeout = self.timeout.filter(|t| !t.is_zero());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
