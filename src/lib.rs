//! satellite-sanity - Hardware sanity checks for Satellite hosts.
//!
//! satellite-sanity collects facts about a host (architecture, CPU and
//! memory information) and runs rules that report whether the host meets
//! the minimum requirements for running Satellite. Facts can come from the
//! live host or from a snapshot captured elsewhere.
//!
//! # Modules
//!
//! - [`check`] - Rules, rule registry, runner, and report formatters
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`facts`] - Fact bundles and fact collectors
//! - [`ui`] - Terminal output, colors, and verbosity
//!
//! # Example
//!
//! ```
//! use satellite_sanity::check::{HardwareRequirementsRule, Rule};
//! use satellite_sanity::facts::{FactBundle, PROC_CPUINFO, PROC_MEMINFO, UNAME_M};
//!
//! let facts = FactBundle::new()
//!     .with_fact(UNAME_M, ["x86_64"])
//!     .with_fact(PROC_CPUINFO, ["cpu MHz\t\t: 2399.9", "cache size\t: 1024 KB"])
//!     .with_fact(PROC_MEMINFO, ["MemTotal:       8388608 kB"]);
//!
//! let violations = HardwareRequirementsRule.evaluate(&facts).unwrap().unwrap();
//! assert_eq!(violations.len(), 1);
//! assert!(violations.errors()[0].contains("CPU speed"));
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod facts;
pub mod ui;

pub use error::{Result, SanityError};
