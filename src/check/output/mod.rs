//! Report output formatters.
//!
//! This module provides formatters for writing a [`RunReport`] in different
//! formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::check::RunReport;
use std::io::Write;

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting check reports.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
