//! # cloc_runner
//!
//! Typed binding for the [cloc](https://github.com/AlDanial/cloc) line counter.
//!
//! Counting itself is done by the external tool; this crate builds its
//! command line with validated options, runs it with an optional timeout and
//! parses the JSON it prints into a [`Report`].
//!
//! ```no_run
//! # fn main() -> cloc_runner::Result<()> {
//! let report = cloc_runner::command()
//!     .timeout(30)
//!     .all_cores()
//!     .target(".")?
//!     .lines_by_language()?;
//! if let Some(sum) = report.sum()? {
//!     println!("{} lines of code", sum.code);
//! }
//! # Ok(())
//! # }
//! ```

// Transitive dependencies pull in more than one version of a few crates.
#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;

pub use cloc_runner_domain::{ClocOptions, Counts, Flag, Header, Invocation, OptionSet, Parameter, Report, ReportMode};
pub use cloc_runner_infra::{
    CachedLocator, ExecutableSource, JsonMapper, StdProcessRunner, executable::ENV_EXECUTABLE, global_locator,
};
pub use cloc_runner_ports::{ExecutableLocator, ExecutionOutput, OutputMapper, ProcessRunner};
pub use cloc_runner_shared_kernel::{
    ClocError, ConfigurationError, ErrorContext, ExecutionError, FileCount, LineCount, OutputError, ResolutionError,
    Result,
};
pub use cloc_runner_usecase::{Cloc, ClocBuilder};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const CLOC_URL: &str = "https://github.com/AlDanial/cloc";

/// A builder wired to the real process runner, the default JSON mapper and
/// the process-wide executable locator.
pub fn command() -> ClocBuilder {
    ClocBuilder::new(
        Arc::new(StdProcessRunner::default()),
        Arc::new(global_locator()),
        Arc::new(JsonMapper),
    )
}

/// Version of the executable [`command`] would run.
pub fn version() -> Result<String> {
    let program = global_locator().locate()?;
    cloc_runner_usecase::query_version(&StdProcessRunner::default(), &program, None)
}

/// Homepage of the line-counting tool.
pub fn url() -> &'static str {
    CLOC_URL
}
