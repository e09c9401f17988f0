//! Human-readable output formatter.
//!
//! Formats check results for terminal display with optional color support.

use super::ReportFormatter;
use crate::check::{RuleStatus, RunReport};
use crate::ui::SanityTheme;
use std::io::Write;

const TEXT_INDENT: &str = "    ";

/// Formats check output for human consumption.
pub struct HumanFormatter {
    theme: SanityTheme,
    show_passed: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(theme: SanityTheme) -> Self {
        Self {
            theme,
            show_passed: true,
        }
    }

    /// Whether to list rules that passed (quiet output hides them).
    pub fn show_passed(mut self, show: bool) -> Self {
        self.show_passed = show;
        self
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()> {
        for outcome in report.outcomes() {
            match &outcome.status {
                RuleStatus::Passed => {
                    if self.show_passed {
                        writeln!(
                            writer,
                            "{} {}",
                            self.theme.pass.apply_to("[PASS]"),
                            outcome.name
                        )?;
                    }
                }
                RuleStatus::Failed { text, .. } => {
                    writeln!(
                        writer,
                        "{} {}",
                        self.theme.fail.apply_to("[FAIL]"),
                        self.theme.bold.apply_to(&outcome.name)
                    )?;
                    for line in text.lines() {
                        writeln!(writer, "{}{}", TEXT_INDENT, line)?;
                    }
                }
                RuleStatus::Errored { message } => {
                    writeln!(
                        writer,
                        "{} {}: {}",
                        self.theme.warning.apply_to("[ERROR]"),
                        outcome.name,
                        message
                    )?;
                }
            }
        }

        writeln!(
            writer,
            "{}",
            self.theme.dim.apply_to(format!(
                "{} rule(s) checked: {} passed, {} failed, {} errored",
                report.outcomes().len(),
                report.passed(),
                report.failed(),
                report.errored()
            ))
        )?;

        Ok(())
    }
}
