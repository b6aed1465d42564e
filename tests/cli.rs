use assert_cmd::Command;
use predicates::prelude::*;

fn netshell() -> Command {
    let mut cmd = Command::cargo_bin("netshell").unwrap();
    cmd.arg("--no-history");
    cmd
}

#[test]
fn test_exit_prints_farewell() {
    netshell()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to NetShell!"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn test_unknown_command_continues() {
    netshell()
        .write_stdin("frobnicate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: frobnicate"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn test_set_is_completion_only() {
    netshell()
        .write_stdin("set interface eth0\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: set interface eth0"));
}

#[test]
fn test_end_of_input_is_normal_exit() {
    netshell()
        .write_stdin("frobnicate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: frobnicate"));
}

#[test]
fn test_commands_after_exit_are_ignored() {
    netshell()
        .write_stdin("exit\nfrobnicate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command").not());
}

#[test]
fn test_history_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("history");

    Command::cargo_bin("netshell")
        .unwrap()
        .arg("--history-file")
        .arg(&history)
        .write_stdin("frobnicate\nexit\n")
        .assert()
        .success();

    assert!(history.exists());
}

#[test]
fn test_history_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("netshell")
        .unwrap()
        .arg("--history-file")
        .arg(dir.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("History file is a directory"));
}

#[test]
fn test_subcommands_are_rejected() {
    Command::cargo_bin("netshell")
        .unwrap()
        .arg("show")
        .assert()
        .failure();
}
