//! CLI surface tests.
//!
//! Verifies that the binary:
//! - Advertises every subcommand
//! - Rejects invalid horizons before touching the network
//! - Surfaces transport failures as errors instead of panicking
//! - Refuses to start the TUI without a terminal

use assert_cmd::Command;
use predicates::prelude::*;

fn evcast() -> Command {
    Command::cargo_bin("evcast").unwrap()
}

#[test]
fn help_lists_every_subcommand() {
    evcast().arg("--help").assert().success().stdout(
        predicate::str::contains("dashboard")
            .and(predicate::str::contains("forecast"))
            .and(predicate::str::contains("metrics"))
            .and(predicate::str::contains("doctor")),
    );
}

#[test]
fn version_flag_works() {
    evcast()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("evcast"));
}

#[test]
fn forecast_rejects_zero_months_before_any_request() {
    evcast()
        .args(["forecast", "--months", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn forecast_rejects_non_numeric_months() {
    evcast()
        .args(["forecast", "--months", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn metrics_surfaces_transport_failure() {
    // Port 1 is reserved; the connection is refused immediately.
    evcast()
        .args(["--service-url", "http://127.0.0.1:1", "metrics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn dashboard_requires_an_interactive_terminal() {
    evcast()
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
