//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates the domain model and the ports to implement the
//! public command API:
//!
//! - [`builder`]: Validated, fluent configuration of a command
//! - [`command`]: A configured command and its report modes
//! - [`orchestrator`]: Running one invocation and interpreting the result
//! - [`version`]: Querying the tool's own version
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod builder;
pub mod command;
pub mod orchestrator;
pub mod version;

#[cfg(test)]
mod test_support;

pub use builder::ClocBuilder;
pub use command::Cloc;
pub use orchestrator::RunReport;
pub use version::query_version;
