// crates/domain/src/config.rs
use std::path::Path;

use cloc_runner_shared_kernel::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};

/// Serializable option set, for callers that keep command settings in a file.
///
/// Every field is optional and falls back to the tool's own default. Values
/// are validated again when applied to a command builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClocOptions {
    /// Seconds; `0` disables the timeout.
    pub timeout: u64,
    /// Worker processes; `0` and `1` disable multiprocessing.
    pub cores: usize,
    /// Megabytes; must be positive when present.
    pub max_file_size: Option<u32>,
    pub no_recurse: bool,
    pub follow_links: bool,
    pub read_binary_files: bool,
    pub skip_uniqueness: bool,
    pub docstring_as_code: bool,
}

impl ClocOptions {
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| {
            ConfigurationError::Options { format: "JSON".to_string(), details: e.to_string() }.into()
        })
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        serde_yaml::from_str(input).map_err(|e| ConfigurationError::from(e).into())
    }

    /// Load options from a `.json` (or, with the `yaml` feature, `.yaml`/`.yml`) file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigurationError::OptionsRead { path: path.to_path_buf(), source })?;
        let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase()).unwrap_or_default();
        match ext.as_str() {
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            "json" => Self::from_json_str(&contents),
            other => Err(ConfigurationError::Options {
                format: if other.is_empty() { "unknown".to_string() } else { other.to_string() },
                details: format!("unsupported options file '{}'", path.display()),
            }
            .into()),
        }
    }
}
