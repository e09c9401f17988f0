//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PASSING_FACTS: &str = r#"
uname_m:
  - x86_64
proc_cpuinfo:
  - "processor\t: 0"
  - "cpu MHz\t\t: 2600.000"
  - "cache size\t: 8192 KB"
proc_meminfo:
  - "MemTotal:       16384000 kB"
"#;

const FAILING_FACTS: &str = r#"
uname_m:
  - x86_64
proc_cpuinfo:
  - "cpu MHz\t\t: 2399.9"
  - "cache size\t: 1024 KB"
proc_meminfo:
  - "MemTotal:       4194303 kB"
"#;

const BROKEN_FACTS: &str = r#"
uname_m: []
proc_meminfo:
  - "MemTotal:       16384000 kB"
"#;

fn write_facts(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("facts.yml");
    fs::write(&path, content).unwrap();
    (temp, path)
}

fn sanity() -> Command {
    let mut cmd = Command::new(cargo_bin("satellite-sanity"));
    cmd.env_remove("SATELLITE_SANITY_FACTS");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    sanity()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Check whether a host is fit"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    sanity()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_check_passing_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_facts(PASSING_FACTS);
    sanity()
        .args(["--no-color", "check", "--facts"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[PASS] Check basic HW requirements"));
    Ok(())
}

#[test]
fn cli_check_failing_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_facts(FAILING_FACTS);
    sanity()
        .args(["--no-color", "check", "--facts"])
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] Check basic HW requirements"))
        .stdout(predicate::str::contains(
            "CPU speed 2400 MHz is below minimal requirement of 2400 MHz",
        ))
        .stdout(predicate::str::contains(
            "RAM size 4194303 kB is below minimal requirement of 4194304 kB",
        ))
        .stdout(predicate::str::contains("CPU cache").not());
    Ok(())
}

#[test]
fn cli_check_reads_snapshot_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_facts(FAILING_FACTS);
    sanity()
        .env("SATELLITE_SANITY_FACTS", &path)
        .args(["--no-color", "check"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_without_command_runs_check() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_facts(FAILING_FACTS);
    sanity()
        .env("SATELLITE_SANITY_FACTS", &path)
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] Check basic HW requirements"));
    Ok(())
}

#[test]
fn cli_check_broken_snapshot_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_facts(BROKEN_FACTS);
    sanity()
        .args(["--no-color", "check", "--facts"])
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[ERROR]"));
    Ok(())
}

#[test]
fn cli_check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_facts(FAILING_FACTS);
    let output = sanity()
        .args(["check", "--format", "json", "--facts"])
        .arg(&path)
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["summary"]["failed"], 1);
    assert_eq!(parsed["results"][0]["rule_id"], "sat5-hw-reqs");
    assert_eq!(parsed["results"][0]["errors"].as_array().unwrap().len(), 2);
    Ok(())
}

#[test]
fn cli_check_snapshot_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("uname_m"), "s390x\n")?;
    fs::write(temp.path().join("proc_meminfo"), "MemTotal: 8388608 kB\n")?;

    sanity()
        .args(["--no-color", "check", "--facts"])
        .arg(temp.path())
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_check_missing_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    sanity()
        .args(["--no-color", "check", "--facts"])
        .arg(temp.path().join("absent.yml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("absent.yml"));
    Ok(())
}

#[test]
fn cli_list_rules() -> Result<(), Box<dyn std::error::Error>> {
    sanity()
        .args(["--no-color", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sat5-hw-reqs"));
    Ok(())
}

#[test]
fn cli_facts_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("uname_m"), "s390x\n")?;

    sanity()
        .args(["facts", "--facts"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("uname_m:"))
        .stdout(predicate::str::contains("s390x"));
    Ok(())
}

#[test]
fn cli_completions() -> Result<(), Box<dyn std::error::Error>> {
    sanity()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("satellite-sanity"));
    Ok(())
}

#[test]
fn cli_check_unreadable_snapshot_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("facts.yml");
    fs::write(&path, b"\xff\xfe")?;
    sanity()
        .args(["--no-color", "check", "--facts"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read fact snapshot"));
    Ok(())
}

#[test]
fn cli_verbose_json_output_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_facts(PASSING_FACTS);
    let output = sanity()
        .args(["-v", "--no-color", "check", "--format", "json", "--facts"])
        .arg(&path)
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["summary"]["total"], 1);
    assert_eq!(parsed["results"][0]["status"], "pass");
    Ok(())
}

#[test]
fn cli_silent_reports_through_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_facts(FAILING_FACTS);
    sanity()
        .args(["--silent", "check", "--facts"])
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_silent_still_shows_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    sanity()
        .args(["--silent", "--no-color", "check", "--facts"])
        .arg(temp.path().join("missing.yml"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.yml"));
    Ok(())
}
