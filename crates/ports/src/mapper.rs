// crates/ports/src/mapper.rs
use std::fmt;

use cloc_runner_shared_kernel::Result;
use serde_json::{Map, Value};

/// Port turning captured standard output into a JSON object tree.
///
/// Failures must be reported as
/// [`ClocError::MalformedOutput`](cloc_runner_shared_kernel::ClocError::MalformedOutput).
pub trait OutputMapper: fmt::Debug + Send + Sync {
    fn read_tree(&self, stdout: &str) -> Result<Map<String, Value>>;
}
