#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod invocation;
pub mod options;
pub mod report;

pub use config::ClocOptions;
pub use invocation::{Invocation, InvocationBuilder};
pub use options::{Flag, OptionSet, Parameter, ReportMode};
pub use report::{Counts, Header, Report};
