//! Fact collectors.
//!
//! - [`HostCollector`] reads facts from the machine it runs on
//! - [`SnapshotCollector`] replays facts captured earlier, either from a
//!   directory with one file per fact or from a YAML dump

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context};
use tracing::{debug, warn};

use super::definition::{builtin_definitions, FactDefinition, FactSource};
use super::{split_lines, FactBundle};
use crate::error::{Result, SanityError};

/// Source of a fact bundle.
pub trait FactCollector {
    /// Collect all facts into a bundle.
    fn collect(&self) -> Result<FactBundle>;
}

/// Collects facts from the live host.
///
/// Facts that cannot be read are logged and left out of the bundle, so the
/// rules needing them report a missing fact instead of the whole run failing.
#[derive(Debug, Clone)]
pub struct HostCollector {
    definitions: Vec<FactDefinition>,
}

impl HostCollector {
    /// Create a collector for the built-in fact definitions.
    pub fn new() -> Self {
        Self::with_definitions(builtin_definitions())
    }

    /// Create a collector for a custom set of definitions.
    pub fn with_definitions(definitions: Vec<FactDefinition>) -> Self {
        Self { definitions }
    }

    /// The definitions this collector reads.
    pub fn definitions(&self) -> &[FactDefinition] {
        &self.definitions
    }

    fn collect_one(source: &FactSource) -> anyhow::Result<String> {
        match source {
            FactSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            FactSource::Command(argv) => {
                let Some((program, args)) = argv.split_first() else {
                    bail!("empty command");
                };
                let output = Command::new(program)
                    .args(args)
                    .output()
                    .with_context(|| format!("failed to run {}", source))?;
                if !output.status.success() {
                    bail!("{} exited with {}", source, output.status);
                }
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
        }
    }
}

impl Default for HostCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCollector for HostCollector {
    fn collect(&self) -> Result<FactBundle> {
        let mut bundle = FactBundle::new();
        for def in &self.definitions {
            match Self::collect_one(&def.source) {
                Ok(text) => {
                    debug!(fact = %def.name, source = %def.source, "Collected fact");
                    bundle = bundle.with_text(def.name.clone(), &text);
                }
                Err(e) => {
                    warn!(fact = %def.name, "Could not collect fact: {:#}", e);
                }
            }
        }
        Ok(bundle)
    }
}

/// Replays facts from a captured snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotCollector {
    path: PathBuf,
}

impl SnapshotCollector {
    /// Create a collector for a snapshot directory or YAML file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(path: &Path, err: std::io::Error) -> SanityError {
        SanityError::SnapshotRead {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    fn collect_dir(&self) -> Result<FactBundle> {
        let dir_error = |e| Self::read_error(&self.path, e);
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(dir_error)? {
            let entry = entry.map_err(dir_error)?;
            if !entry.file_type().map_err(dir_error)?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            let text = fs::read_to_string(&path).map_err(|e| Self::read_error(&path, e))?;
            debug!(fact = %name, "Loaded fact from snapshot directory");
            entries.push((name, split_lines(&text)));
        }
        Ok(entries.into_iter().collect())
    }

    fn collect_file(&self) -> Result<FactBundle> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| Self::read_error(&self.path, e))?;
        FactBundle::from_yaml_str(&content).map_err(|e| SanityError::SnapshotParse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

impl FactCollector for SnapshotCollector {
    fn collect(&self) -> Result<FactBundle> {
        if !self.path.exists() {
            return Err(SanityError::SnapshotNotFound {
                path: self.path.clone(),
            });
        }
        let bundle = if self.path.is_dir() {
            self.collect_dir()?
        } else {
            self.collect_file()?
        };
        debug!(
            path = %self.path.display(),
            facts = bundle.len(),
            "Loaded fact snapshot"
        );
        Ok(bundle)
    }
}
