//! Rule registry for managing rules.
//!
//! The [`RuleRegistry`] stores all available rules and provides methods for
//! registering, retrieving, selecting, and iterating over them. Rules are
//! listed explicitly in [`RuleRegistry::with_builtins`]; nothing is
//! discovered at runtime.

use std::collections::BTreeMap;

use super::rule::{Rule, RuleId};
use super::rules::HardwareRequirementsRule;
use crate::error::{Result, SanityError};

/// Registry of available rules, ordered by rule id.
pub struct RuleRegistry {
    rules: BTreeMap<RuleId, Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(HardwareRequirementsRule));
        registry
    }

    /// Register a rule, replacing any rule with the same id.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn Rule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Select rules by id and tag.
    ///
    /// Empty `ids` means every rule; empty `tags` means no tag filter.
    /// A rule matches the tag filter if it carries any of the tags.
    /// Requesting an id that is not registered is an error.
    pub fn select(&self, ids: &[String], tags: &[String]) -> Result<Vec<&dyn Rule>> {
        let candidates: Vec<&dyn Rule> = if ids.is_empty() {
            self.iter().collect()
        } else {
            ids.iter()
                .map(|id| {
                    self.get(&RuleId::new(id.as_str()))
                        .ok_or_else(|| SanityError::UnknownRule { id: id.clone() })
                })
                .collect::<Result<_>>()?
        };

        Ok(candidates
            .into_iter()
            .filter(|rule| tags.is_empty() || tags.iter().any(|t| rule.has_tag(t)))
            .collect())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
