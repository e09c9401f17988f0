//! Facts command implementation.
//!
//! The `satellite-sanity facts` command prints the fact bundle that `check`
//! would evaluate, as YAML. Saving that output gives a snapshot that can be
//! replayed later with `--facts`.

use crate::cli::args::FactsArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::load_facts;

/// The facts command implementation.
pub struct FactsCommand {
    args: FactsArgs,
}

impl FactsCommand {
    /// Create a new facts command.
    pub fn new(args: FactsArgs) -> Self {
        Self { args }
    }
}

impl Command for FactsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let facts = match load_facts(self.args.facts.as_deref()) {
            Ok(facts) => facts,
            Err(e) if e.is_snapshot() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if facts.is_empty() {
            ui.warning("No facts collected");
        }

        ui.message(facts.to_yaml()?.trim_end());
        Ok(CommandResult::success())
    }
}
