//! Satellite 5 minimum hardware requirements.
//!
//! Checks CPU speed and cache size (x86_64 only, the only architecture
//! with documented CPU minimums) and total RAM (all architectures).

use crate::check::{Rule, RuleId, Violations};
use crate::error::{Result, SanityError};
use crate::facts::{FactBundle, PROC_CPUINFO, PROC_MEMINFO, UNAME_M};

/// Minimum CPU clock in MHz on x86_64.
pub const MIN_CPU_SPEED_MHZ: u32 = 2400;
/// Minimum CPU cache in KB on x86_64.
pub const MIN_CPU_CACHE_KB: u32 = 512;
/// Minimum total RAM in kB (4 GiB).
pub const MIN_RAM_KB: u64 = 4 * 1024 * 1024;

const X86_64: &str = "x86_64";

const X86_64_REQUIREMENTS_URL: &str = "https://access.redhat.com/documentation/en-US/Red_Hat_Satellite/5.7/html-single/Installation_Guide/index.html#x86_64_Hardware_Requirements";
const S390X_REQUIREMENTS_URL: &str = "https://access.redhat.com/documentation/en-US/Red_Hat_Satellite/5.7/html-single/Installation_Guide/index.html#s390x_Hardware_Requirements";

/// Validates CPU and memory against Satellite 5 minimums.
pub struct HardwareRequirementsRule;

impl Rule for HardwareRequirementsRule {
    fn id(&self) -> RuleId {
        RuleId::new("sat5-hw-reqs")
    }

    fn name(&self) -> &str {
        "Check basic HW requirements"
    }

    fn tags(&self) -> &[&'static str] {
        &["Satellite_5"]
    }

    fn evaluate(&self, facts: &FactBundle) -> Result<Option<Violations>> {
        let mut errors = Vec::new();

        if os_arch(facts)? == X86_64 {
            if let Some(speed) = cpu_speed(facts)? {
                if speed < f64::from(MIN_CPU_SPEED_MHZ) {
                    errors.push(format!(
                        "CPU speed {} MHz is below minimal requirement of {} MHz",
                        speed.round() as i64,
                        MIN_CPU_SPEED_MHZ
                    ));
                }
            }
            if let Some(cache) = cpu_cache(facts)? {
                if cache < f64::from(MIN_CPU_CACHE_KB) {
                    errors.push(format!(
                        "CPU cache {} KB is below minimal requirement of {} KB",
                        cache.round() as i64,
                        MIN_CPU_CACHE_KB
                    ));
                }
            }
        }

        if let Some(ram) = ram_size(facts)? {
            if ram < MIN_RAM_KB as f64 {
                errors.push(format!(
                    "RAM size {} kB is below minimal requirement of {} kB",
                    ram, MIN_RAM_KB
                ));
            }
        }

        Ok(Violations::from_errors(errors))
    }

    fn render(&self, violations: &Violations) -> String {
        let mut out =
            String::from("System running Satellite 5 should meet minimal required HW configuration:\n");
        for error in violations.errors() {
            out.push_str("  ");
            out.push_str(error);
            out.push('\n');
        }
        out.push_str("See ");
        out.push_str(X86_64_REQUIREMENTS_URL);
        out.push('\n');
        out.push_str("See ");
        out.push_str(S390X_REQUIREMENTS_URL);
        out
    }
}

/// Architecture the host runs on.
pub fn os_arch(facts: &FactBundle) -> Result<&str> {
    facts.single_line(UNAME_M)
}

/// CPU clock in MHz, or `None` off x86_64 or when not reported.
pub fn cpu_speed(facts: &FactBundle) -> Result<Option<f64>> {
    if os_arch(facts)? != X86_64 {
        return Ok(None);
    }
    find_value(facts, PROC_CPUINFO, "cpu MHz", None)
}

/// CPU cache size in KB, or `None` off x86_64 or when not reported.
pub fn cpu_cache(facts: &FactBundle) -> Result<Option<f64>> {
    if os_arch(facts)? != X86_64 {
        return Ok(None);
    }
    find_value(facts, PROC_CPUINFO, "cache size", Some(" KB"))
}

/// Total RAM in kB, or `None` when not reported.
pub fn ram_size(facts: &FactBundle) -> Result<Option<f64>> {
    find_value(facts, PROC_MEMINFO, "MemTotal:", Some(" kB"))
}

/// Parse the value of the first `key : value` line starting with `prefix`.
fn find_value(
    facts: &FactBundle,
    fact: &str,
    prefix: &str,
    unit: Option<&str>,
) -> Result<Option<f64>> {
    let Some(line) = facts
        .lines(fact)?
        .iter()
        .find(|line| line.starts_with(prefix))
    else {
        return Ok(None);
    };

    let parse_error = |message: String| SanityError::FactParse {
        fact: fact.to_string(),
        line: line.clone(),
        message,
    };

    let raw = line
        .split(':')
        .nth(1)
        .ok_or_else(|| parse_error("missing ':' separator".to_string()))?
        .trim();
    let value = match unit {
        Some(unit) => raw.replace(unit, ""),
        None => raw.to_string(),
    };
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|e| parse_error(e.to_string()))
}
