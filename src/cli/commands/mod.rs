//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Fact loading is shared through
//! [`load_facts`] so `check` and `facts` see the same bundle.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod facts;
pub mod list;

use std::path::Path;

use crate::error::Result;
use crate::facts::{FactBundle, FactCollector, HostCollector, SnapshotCollector};

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

/// Load facts from a snapshot when given, otherwise from the live host.
pub fn load_facts(snapshot: Option<&Path>) -> Result<FactBundle> {
    match snapshot {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading facts from snapshot");
            SnapshotCollector::new(path).collect()
        }
        None => {
            tracing::debug!("Collecting facts from host");
            HostCollector::new().collect()
        }
    }
}
