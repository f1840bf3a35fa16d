use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("calq");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // worksheet commands
    run_help(&home, &["show"]);
    run_help(&home, &["select"]);
    run_help(&home, &["deselect"]);
    run_help(&home, &["hours"]);
    run_help(&home, &["save"]);

    // grouped subcommands
    run_help(&home, &["history"]);
    run_help(&home, &["history", "list"]);
    run_help(&home, &["history", "show"]);
    run_help(&home, &["history", "export"]);
    run_help(&home, &["history", "clear"]);

    run_help(&home, &["config"]);
    run_help(&home, &["config", "show"]);
    run_help(&home, &["config", "set"]);
    run_help(&home, &["config", "reset"]);

    run_help(&home, &["service"]);
    run_help(&home, &["service", "list"]);
    run_help(&home, &["service", "add"]);
    run_help(&home, &["service", "remove"]);
    run_help(&home, &["service", "reset"]);
}
