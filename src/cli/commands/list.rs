//! List command implementation.
//!
//! The `satellite-sanity list` command lists the registered rules.

use serde::Serialize;

use crate::check::RuleRegistry;
use crate::cli::args::ListArgs;
use crate::error::{Result, SanityError};
use crate::ui::{SanityTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

#[derive(Serialize)]
struct RuleEntry<'a> {
    id: String,
    name: &'a str,
    tags: &'a [&'static str],
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = RuleRegistry::with_builtins();
        let rules = registry.select(&[], &self.args.tags)?;

        if self.args.json {
            let entries: Vec<_> = rules
                .iter()
                .map(|rule| RuleEntry {
                    id: rule.id().0,
                    name: rule.name(),
                    tags: rule.tags(),
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| SanityError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if rules.is_empty() {
            ui.warning("No rules match the given tags");
            return Ok(CommandResult::success());
        }

        let theme = SanityTheme::for_colors(ui.use_colors());
        for rule in rules {
            ui.message(&format!(
                "{}  {} {}",
                theme.bold.apply_to(rule.id()),
                rule.name(),
                theme.dim.apply_to(format!("[{}]", rule.tags().join(", ")))
            ));
        }

        Ok(CommandResult::success())
    }
}
