use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("calq").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn show_prints_a_quote_breakdown() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("show")
        .assert()
        .success()
        .stdout(contains("final price:"))
        .stdout(contains("(none selected)"));
}

#[test]
fn config_show_includes_derived_cost_per_hour() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("cost per hour:"));
}

#[test]
fn service_list_shows_builtin_catalog() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["service", "list"])
        .assert()
        .success()
        .stdout(contains("Landing Page Simples"))
        .stdout(contains("Google My Business"));
}

#[test]
fn unknown_service_errors_on_stderr() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["select", "no-such-service"])
        .assert()
        .failure()
        .stderr(contains("unknown service"));
}
