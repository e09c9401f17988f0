//! Rule execution.
//!
//! The [`RuleRunner`] evaluates a selection of rules against one fact bundle
//! and collects a [`RunReport`]. It keeps a finding (the host fails a check)
//! apart from a broken rule input (facts missing or malformed).

use tracing::{debug, info, warn};

use super::rule::{Rule, RuleId, Violations};

/// What happened when a single rule was evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleStatus {
    /// The host meets the rule.
    Passed,
    /// The host fails the rule.
    Failed {
        /// Individual findings.
        violations: Violations,
        /// The rule's rendering of the findings.
        text: String,
    },
    /// The rule could not be evaluated because its input facts are broken.
    Errored {
        /// Description of the data problem.
        message: String,
    },
}

/// Outcome of one rule.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    /// Rule identifier.
    pub rule_id: RuleId,
    /// Human-readable rule name.
    pub name: String,
    /// Tags the rule carries.
    pub tags: Vec<String>,
    /// Evaluation status.
    pub status: RuleStatus,
}

/// Outcomes of a whole run, in evaluation order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    outcomes: Vec<RuleOutcome>,
}

impl RunReport {
    /// Build a report from outcomes.
    pub fn new(outcomes: Vec<RuleOutcome>) -> Self {
        Self { outcomes }
    }

    /// All outcomes.
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    /// Number of rules that passed.
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, RuleStatus::Passed))
    }

    /// Number of rules that found problems.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, RuleStatus::Failed { .. }))
    }

    /// Number of rules that could not be evaluated.
    pub fn errored(&self) -> usize {
        self.count(|s| matches!(s, RuleStatus::Errored { .. }))
    }

    /// Whether every rule passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.outcomes.len()
    }

    /// Process exit code for this report.
    ///
    /// 0 when everything passed, 1 when some rule found problems,
    /// 2 when some rule could not be evaluated.
    pub fn exit_code(&self) -> i32 {
        if self.errored() > 0 {
            2
        } else if self.failed() > 0 {
            1
        } else {
            0
        }
    }

    fn count(&self, pred: impl Fn(&RuleStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Evaluates rules against a fact bundle.
pub struct RuleRunner<'a> {
    rules: Vec<&'a dyn Rule>,
}

impl<'a> RuleRunner<'a> {
    /// Create a runner for the given rules.
    pub fn new(rules: Vec<&'a dyn Rule>) -> Self {
        Self { rules }
    }

    /// Number of rules this runner evaluates.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there is nothing to evaluate.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule and collect the outcomes.
    pub fn run(&self, facts: &crate::facts::FactBundle) -> RunReport {
        let outcomes = self
            .rules
            .iter()
            .map(|rule| Self::run_one(*rule, facts))
            .collect();
        let report = RunReport::new(outcomes);

        info!(
            total = report.outcomes().len(),
            passed = report.passed(),
            failed = report.failed(),
            errored = report.errored(),
            "Rules evaluated"
        );

        report
    }

    fn run_one(rule: &dyn Rule, facts: &crate::facts::FactBundle) -> RuleOutcome {
        let status = match rule.evaluate(facts) {
            Ok(None) => {
                debug!(rule = %rule.id(), "Rule passed");
                RuleStatus::Passed
            }
            Ok(Some(violations)) => {
                debug!(rule = %rule.id(), findings = violations.len(), "Rule failed");
                let text = rule.render(&violations);
                RuleStatus::Failed { violations, text }
            }
            Err(e) => {
                warn!(rule = %rule.id(), "Rule could not be evaluated: {}", e);
                RuleStatus::Errored {
                    message: e.to_string(),
                }
            }
        };

        RuleOutcome {
            rule_id: rule.id(),
            name: rule.name().to_string(),
            tags: rule.tags().iter().map(|t| t.to_string()).collect(),
            status,
        }
    }
}
