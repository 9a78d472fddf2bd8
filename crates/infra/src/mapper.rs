// crates/infra/src/mapper.rs
use cloc_runner_ports::OutputMapper;
use cloc_runner_shared_kernel::{OutputError, Result};
use serde_json::{Map, Value};

/// Default materializer: `serde_json` into an object tree.
///
/// Blank output yields an empty tree, since the tool prints nothing at all
/// when there was nothing to count.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMapper;

impl OutputMapper for JsonMapper {
    fn read_tree(&self, stdout: &str) -> Result<Map<String, Value>> {
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(trimmed).map_err(OutputError::from)? {
            Value::Object(tree) => Ok(tree),
            other => Err(OutputError::UnexpectedShape {
                details: format!("expected a JSON object, found {}", kind(&other)),
            }
            .into()),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
