//! JSON output formatter.
//!
//! Formats check results as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::check::{RuleStatus, RunReport};
use serde::Serialize;
use std::io::Write;

/// Formats check output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: Vec<JsonResult<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    rule_id: &'a str,
    name: &'a str,
    tags: &'a [String],
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    passed: usize,
    failed: usize,
    errored: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()> {
        let results = report
            .outcomes()
            .iter()
            .map(|o| {
                let (status, errors, message) = match &o.status {
                    RuleStatus::Passed => ("pass", None, None),
                    RuleStatus::Failed { violations, .. } => {
                        ("fail", Some(violations.errors()), None)
                    }
                    RuleStatus::Errored { message } => ("error", None, Some(message.as_str())),
                };
                JsonResult {
                    rule_id: &o.rule_id.0,
                    name: &o.name,
                    tags: &o.tags,
                    status,
                    errors,
                    message,
                }
            })
            .collect();

        let output = JsonOutput {
            results,
            summary: JsonSummary {
                total: report.outcomes().len(),
                passed: report.passed(),
                failed: report.failed(),
                errored: report.errored(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{RuleId, RuleOutcome, Violations};

    fn report() -> RunReport {
        RunReport::new(vec![
            RuleOutcome {
                rule_id: RuleId::new("ok"),
                name: "Ok".into(),
                tags: vec!["Satellite_5".into()],
                status: RuleStatus::Passed,
            },
            RuleOutcome {
                rule_id: RuleId::new("hw"),
                name: "Hardware".into(),
                tags: vec![],
                status: RuleStatus::Failed {
                    violations: Violations::from_errors(vec!["low RAM".into()]).unwrap(),
                    text: "ignored".into(),
                },
            },
            RuleOutcome {
                rule_id: RuleId::new("broken"),
                name: "Broken".into(),
                tags: vec![],
                status: RuleStatus::Errored {
                    message: "Missing fact: uname_m".into(),
                },
            },
        ])
    }

    fn parse(report: &RunReport) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(report, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = parse(&report());
        assert!(parsed["results"].is_array());
        assert_eq!(parsed["results"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn statuses_and_payloads() {
        let parsed = parse(&report());
        let results = &parsed["results"];

        assert_eq!(results[0]["status"], "pass");
        assert_eq!(results[0]["tags"][0], "Satellite_5");
        assert!(results[0]["errors"].is_null());

        assert_eq!(results[1]["status"], "fail");
        assert_eq!(results[1]["errors"][0], "low RAM");

        assert_eq!(results[2]["status"], "error");
        assert_eq!(results[2]["message"], "Missing fact: uname_m");
    }

    #[test]
    fn summary_counts_by_status() {
        let parsed = parse(&report());
        assert_eq!(parsed["summary"]["total"], 3);
        assert_eq!(parsed["summary"]["passed"], 1);
        assert_eq!(parsed["summary"]["failed"], 1);
        assert_eq!(parsed["summary"]["errored"], 1);
    }

    #[test]
    fn default_impl_works() {
        let formatter = JsonFormatter;
        let mut output = Vec::new();
        formatter.format(&RunReport::default(), &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["summary"]["total"], 0);
    }
}
