use assert_cmd::Command;
use predicates::prelude::*;
use relato_testing::TestWorld;

#[allow(deprecated)]
fn relato() -> Command {
    Command::cargo_bin("relato").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    relato()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Write, browse and save family travel reports"))
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("feed"))
        .stdout(predicate::str::contains("saved"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_report_help_lists_subcommands() {
    relato()
        .args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("template"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("move"))
        .stdout(predicate::str::contains("attach"))
        .stdout(predicate::str::contains("detach"))
        .stdout(predicate::str::contains("remove"));
}

#[test]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new();
    let mut cmd = relato();
    world
        .configure_command(&mut cmd)
        .assert()
        .success()
        .stdout(predicate::str::contains("relato - family travel reports"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn test_unknown_season_is_rejected() {
    let world = TestWorld::new();
    let mut cmd = relato();
    world
        .configure_command(&mut cmd)
        .args(["feed", "list", "--season", "monsoon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid season"));
}
