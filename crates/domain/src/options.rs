// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Presence-only switches understood by the line-counting tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flag {
    /// Machine-readable output. Always present.
    Json,
    /// Suppress progress banners. Always present.
    Quiet,
    DocstringAsCode,
    FollowLinks,
    NoRecurse,
    ReadBinaryFiles,
    SkipUniqueness,
}

impl Flag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Quiet => "quiet",
            Self::DocstringAsCode => "docstring-as-code",
            Self::FollowLinks => "follow-links",
            Self::NoRecurse => "no-recurse",
            Self::ReadBinaryFiles => "read-binary-files",
            Self::SkipUniqueness => "skip-uniqueness",
        }
    }

    pub fn render(self) -> String {
        format!("--{}", self.as_str())
    }
}

/// Key-value options rendered as `--key=value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Parameter {
    Processes,
    MaxFileSize,
}

impl Parameter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processes => "processes",
            Self::MaxFileSize => "max-file-size",
        }
    }

    pub fn render(self, value: &str) -> String {
        format!("--{}={value}", self.as_str())
    }
}

/// Insertion-ordered flags and parameters of one command.
///
/// Flags behave like an ordered set, parameters like an ordered map: setting
/// an existing parameter replaces its value in place, so rendering is
/// reproducible for the same sequence of calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    flags: Vec<Flag>,
    parameters: Vec<(Parameter, String)>,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self { flags: vec![Flag::Json, Flag::Quiet], parameters: Vec::new() }
    }
}

impl OptionSet {
    /// Add `flag` when `enabled`, remove it otherwise.
    pub fn set_flag(&mut self, flag: Flag, enabled: bool) {
        if enabled {
            if !self.flags.contains(&flag) {
                self.flags.push(flag);
            }
        } else {
            self.flags.retain(|f| *f != flag);
        }
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn put(&mut self, parameter: Parameter, value: impl ToString) {
        let value = value.to_string();
        match self.parameters.iter_mut().find(|(p, _)| *p == parameter) {
            Some(slot) => slot.1 = value,
            None => self.parameters.push((parameter, value)),
        }
    }

    pub fn remove(&mut self, parameter: Parameter) {
        self.parameters.retain(|(p, _)| *p != parameter);
    }

    pub fn get(&self, parameter: Parameter) -> Option<&str> {
        self.parameters.iter().find(|(p, _)| *p == parameter).map(|(_, v)| v.as_str())
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn parameters(&self) -> &[(Parameter, String)] {
        &self.parameters
    }

    /// Flags first, then parameters, each in insertion order.
    pub fn render(&self) -> Vec<String> {
        self.flags
            .iter()
            .map(|flag| flag.render())
            .chain(self.parameters.iter().map(|(p, v)| p.render(v)))
            .collect()
    }
}

/// Aggregation granularity requested from the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    /// Counts aggregated by language (the tool's default).
    #[default]
    ByLanguage,
    ByFile,
    ByFileAndLanguage,
    /// File counts only, no line classification.
    CountFiles,
}

impl ReportMode {
    pub const ALL: [Self; 4] = [Self::ByLanguage, Self::ByFile, Self::ByFileAndLanguage, Self::CountFiles];

    /// Trailing switch appended to the base invocation, if any.
    pub const fn flag(self) -> Option<&'static str> {
        match self {
            Self::ByLanguage => None,
            Self::ByFile => Some("--by-file"),
            Self::ByFileAndLanguage => Some("--by-file-by-lang"),
            Self::CountFiles => Some("--only-count-files"),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByLanguage => "by-language",
            Self::ByFile => "by-file",
            Self::ByFileAndLanguage => "by-file-and-language",
            Self::CountFiles => "count-files",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "by-language" | "lang" | "language" => Ok(Self::ByLanguage),
            "by-file" | "file" => Ok(Self::ByFile),
            "by-file-and-language" | "by-file-by-lang" => Ok(Self::ByFileAndLanguage),
            "count-files" | "only-count-files" => Ok(Self::CountFiles),
            other => Err(format!("Unknown report mode: {other}")),
        }
    }
}
