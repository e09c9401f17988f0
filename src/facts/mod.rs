//! Fact bundles and fact collection.
//!
//! A fact is the raw captured output of one system command or file, kept
//! as an ordered list of lines. Rules only ever see a [`FactBundle`]; where
//! the lines came from (live host or a replayed snapshot) is decided by a
//! [`FactCollector`].
//!
//! # Example
//!
//! ```
//! use satellite_sanity::facts::{FactBundle, UNAME_M};
//!
//! let facts = FactBundle::new().with_text(UNAME_M, "x86_64\n");
//! assert_eq!(facts.single_line(UNAME_M).unwrap(), "x86_64");
//! ```

pub mod collector;
pub mod definition;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SanityError};

pub use collector::{FactCollector, HostCollector, SnapshotCollector};
pub use definition::{builtin_definitions, FactDefinition, FactSource};

/// Output of `uname -m`.
pub const UNAME_M: &str = "uname_m";
/// Contents of `/proc/cpuinfo`.
pub const PROC_CPUINFO: &str = "proc_cpuinfo";
/// Contents of `/proc/meminfo`.
pub const PROC_MEMINFO: &str = "proc_meminfo";

/// Immutable mapping from fact name to captured output lines.
///
/// Built with [`FactBundle::with_fact`] / [`FactBundle::with_text`] or
/// collected from an iterator; there is no way to mutate a bundle once it
/// has been handed to a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactBundle {
    facts: BTreeMap<String, Vec<String>>,
}

impl FactBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fact from already split lines.
    pub fn with_fact<I, S>(mut self, name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facts
            .insert(name.into(), lines.into_iter().map(Into::into).collect());
        self
    }

    /// Add a fact from raw command output, splitting it into lines.
    pub fn with_text(self, name: impl Into<String>, text: &str) -> Self {
        self.with_fact(name, split_lines(text))
    }

    /// Get the lines of a fact, if present.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.facts.get(name).map(Vec::as_slice)
    }

    /// Get the lines of a fact, failing if the fact was not collected.
    pub fn lines(&self, name: &str) -> Result<&[String]> {
        self.get(name).ok_or_else(|| SanityError::FactMissing {
            fact: name.to_string(),
        })
    }

    /// Get the only line of a single-line fact.
    ///
    /// Any other line count is a precondition failure.
    pub fn single_line(&self, name: &str) -> Result<&str> {
        match self.lines(name)? {
            [line] => Ok(line),
            lines => Err(SanityError::FactLineCount {
                fact: name.to_string(),
                expected: 1,
                found: lines.len(),
            }),
        }
    }

    /// Check whether a fact is present.
    pub fn contains(&self, name: &str) -> bool {
        self.facts.contains_key(name)
    }

    /// Iterate over fact names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.facts.keys().map(String::as_str)
    }

    /// Number of facts in the bundle.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Check if the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Parse a bundle from a YAML map of fact name to list of lines.
    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize the bundle as YAML, the format [`FactBundle::from_yaml_str`] reads.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SanityError::Other(e.into()))
    }
}

impl<K, V> FromIterator<(K, V)> for FactBundle
where
    K: Into<String>,
    V: IntoIterator<Item = String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            facts: iter
                .into_iter()
                .map(|(name, lines)| (name.into(), lines.into_iter().collect()))
                .collect(),
        }
    }
}

/// Split captured output into lines without line terminators.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
