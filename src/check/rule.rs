//! Rule definitions.
//!
//! This module provides the core traits and types for defining rules:
//!
//! - [`Rule`] - The trait that all rules must implement
//! - [`RuleId`] - Unique identifier for a rule
//! - [`Violations`] - Findings reported by a failing rule

use serde::Serialize;

use crate::error::Result;
use crate::facts::FactBundle;

/// Unique identifier for a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Findings of a failing rule, in the order they were detected.
///
/// A rule that passes returns no `Violations` at all, so an instance always
/// carries at least one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violations {
    errors: Vec<String>,
}

impl Violations {
    /// Wrap collected messages, or `None` when there are none.
    pub fn from_errors(errors: Vec<String>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The messages in detection order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if there are no messages.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A check that maps a fact bundle to either nothing or a set of violations.
///
/// Rules are pure: they do no I/O and keep no state between calls.
/// Malformed input facts are reported as `Err`; hardware that falls short
/// is reported as `Ok(Some(violations))`.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Tags used to select groups of rules (e.g. a product version).
    fn tags(&self) -> &[&'static str];

    /// Evaluate the rule against the facts.
    fn evaluate(&self, facts: &FactBundle) -> Result<Option<Violations>>;

    /// Render a failing result as text for the user.
    fn render(&self, violations: &Violations) -> String;

    /// Whether this rule carries the given tag.
    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| *t == tag)
    }
}
