//! Fact definitions.
//!
//! Describes where each built-in fact comes from on a live host.

use std::fmt;
use std::path::PathBuf;

use super::{PROC_CPUINFO, PROC_MEMINFO, UNAME_M};

/// Where a fact's lines are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactSource {
    /// Contents of a file.
    File(PathBuf),
    /// Standard output of a command (program followed by its arguments).
    Command(Vec<String>),
}

impl fmt::Display for FactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactSource::File(path) => write!(f, "{}", path.display()),
            FactSource::Command(argv) => write!(f, "{}", argv.join(" ")),
        }
    }
}

/// A named fact and its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactDefinition {
    /// Fact name used as the bundle key.
    pub name: String,
    /// Where to collect it from.
    pub source: FactSource,
}

impl FactDefinition {
    /// Define a fact read from a file.
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: FactSource::File(path.into()),
        }
    }

    /// Define a fact captured from a command's standard output.
    pub fn command<I, S>(name: impl Into<String>, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            source: FactSource::Command(argv.into_iter().map(Into::into).collect()),
        }
    }
}

/// The facts collected from a live host by default.
pub fn builtin_definitions() -> Vec<FactDefinition> {
    vec![
        FactDefinition::command(UNAME_M, ["uname", "-m"]),
        FactDefinition::file(PROC_CPUINFO, "/proc/cpuinfo"),
        FactDefinition::file(PROC_MEMINFO, "/proc/meminfo"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_hardware_facts() {
        let names: Vec<_> = builtin_definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec![UNAME_M, PROC_CPUINFO, PROC_MEMINFO]);
    }

    #[test]
    fn uname_is_a_command() {
        let defs = builtin_definitions();
        assert_eq!(
            defs[0].source,
            FactSource::Command(vec!["uname".to_string(), "-m".to_string()])
        );
    }

    #[test]
    fn source_display() {
        assert_eq!(
            FactSource::File(PathBuf::from("/proc/meminfo")).to_string(),
            "/proc/meminfo"
        );
        assert_eq!(
            FactSource::Command(vec!["uname".into(), "-m".into()]).to_string(),
            "uname -m"
        );
    }
}
