use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_both_reports_and_configure() {
    let mut cmd = Command::cargo_bin("oncall-analysis").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analytics"))
        .stdout(predicate::str::contains("incidents-log"))
        .stdout(predicate::str::contains("configure"));
}

#[test]
fn analytics_help_documents_range_flags_and_default_output() {
    let mut cmd = Command::cargo_bin("oncall-analysis").unwrap();

    cmd.args(["analytics", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--start-date"))
        .stdout(predicate::str::contains("--end-date"))
        .stdout(predicate::str::contains("YYYY-mm-dd"))
        .stdout(predicate::str::contains("data/analytics.csv"));
}

#[test]
fn incidents_log_help_documents_default_output() {
    let mut cmd = Command::cargo_bin("oncall-analysis").unwrap();

    cmd.args(["incidents-log", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data/incident_log.json"));
}

#[test]
fn unknown_subcommands_fail_with_usage() {
    let mut cmd = Command::cargo_bin("oncall-analysis").unwrap();

    cmd.arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
