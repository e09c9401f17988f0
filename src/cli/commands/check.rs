//! Check command implementation.
//!
//! The `satellite-sanity check` command evaluates the selected rules against
//! the live host or a fact snapshot and reports the outcome.

use crate::check::{
    HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, RuleRegistry, RuleRunner,
    RunReport,
};
use crate::cli::args::CheckArgs;
use crate::error::{Result, SanityError};
use crate::ui::{SanityTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::load_facts;

/// Exit code when input could not be loaded or a rule could not run.
const EXIT_BAD_INPUT: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Format the report using the requested formatter.
    fn format_output(&self, report: &RunReport, ui: &dyn UserInterface) -> Result<String> {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(report, &mut output)?,
            OutputFormat::Human => {
                let theme = SanityTheme::for_colors(ui.use_colors());
                HumanFormatter::new(theme)
                    .show_passed(ui.output_mode().shows_passed())
                    .format(report, &mut output)?
            }
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = RuleRegistry::with_builtins();
        let rules = match registry.select(&self.args.rule, &self.args.tags) {
            Ok(rules) => rules,
            Err(e @ SanityError::UnknownRule { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_BAD_INPUT));
            }
            Err(e) => return Err(e),
        };

        if rules.is_empty() {
            ui.warning("No rules match the given tags");
            return Ok(CommandResult::success());
        }

        let facts = match load_facts(self.args.facts.as_deref()) {
            Ok(facts) => facts,
            Err(e) if e.is_snapshot() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_BAD_INPUT));
            }
            Err(e) => return Err(e),
        };

        if ui.output_mode().shows_details() && self.args.format == OutputFormat::Human {
            ui.show_header("Satellite sanity checks");
            let names: Vec<_> = facts.names().collect();
            ui.message(&format!("Facts: {}", names.join(", ")));
        }

        let report = RuleRunner::new(rules).run(&facts);

        let output = self.format_output(&report, ui)?;
        for line in output.lines() {
            ui.message(line);
        }

        if self.args.format == OutputFormat::Human
            && report.all_passed()
            && ui.output_mode().shows_passed()
        {
            ui.success("All checks passed");
        }

        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}
