//! Hardware and configuration checks.
//!
//! This module provides host validation through a pluggable rule-based
//! system.
//!
//! # Overview
//!
//! The check system consists of:
//!
//! - **Rules** - Individual pure checks over a fact bundle ([`Rule`] trait)
//! - **Registry** - Explicit list of available rules ([`RuleRegistry`])
//! - **Runner** - Evaluates rules and aggregates outcomes ([`RuleRunner`])
//! - **Output** - Human and JSON report formatters
//!
//! # Example
//!
//! ```
//! use satellite_sanity::check::{RuleRegistry, RuleRunner};
//! use satellite_sanity::facts::{FactBundle, PROC_MEMINFO, UNAME_M};
//!
//! let facts = FactBundle::new()
//!     .with_fact(UNAME_M, ["s390x"])
//!     .with_fact(PROC_MEMINFO, ["MemTotal:       8388608 kB"]);
//!
//! let registry = RuleRegistry::with_builtins();
//! let report = RuleRunner::new(registry.iter().collect()).run(&facts);
//! assert!(report.all_passed());
//! ```

pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod runner;

pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
pub use registry::RuleRegistry;
pub use rule::{Rule, RuleId, Violations};
pub use rules::HardwareRequirementsRule;
pub use runner::{RuleOutcome, RuleRunner, RuleStatus, RunReport};
