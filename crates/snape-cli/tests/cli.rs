use assert_cmd::Command;
use predicates::prelude::*;

fn snape(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("snape-cli").unwrap();
    cmd.env("HOME", home);
    cmd
}

#[test]
fn help_lists_options_and_directory() {
    let home = tempfile::tempdir().unwrap();
    snape(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--width-size"))
        .stdout(predicate::str::contains("--height-size"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("~/.snape/"));
}

#[test]
fn version_is_printed() {
    let home = tempfile::tempdir().unwrap();
    snape(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn narrow_width_is_rejected_cleanly() {
    let home = tempfile::tempdir().unwrap();
    snape(home.path())
        .args(["--width-size", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: width-size must be between 200 and 600 (got 100)",
        ));

    // Nothing is touched before validation passes
    assert!(!home.path().join(".snape").exists());
}

#[test]
fn tall_height_is_rejected_cleanly() {
    let home = tempfile::tempdir().unwrap();
    snape(home.path())
        .args(["--verbose", "--height-size", "601"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: height-size must be between 200 and 600 (got 601)",
        ))
        .stdout(predicate::str::contains("Starting Snape").not());
}

#[test]
fn negative_width_is_reported_with_its_value() {
    let home = tempfile::tempdir().unwrap();
    snape(home.path())
        .args(["--width-size", "-5", "--height-size", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(got -5)"));
}

#[test]
fn non_numeric_width_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    snape(home.path())
        .args(["--width-size", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("width-size"));
}

#[cfg(target_os = "linux")]
#[test]
fn clipboard_holder_without_display_exits_before_ready() {
    let home = tempfile::tempdir().unwrap();
    snape(home.path())
        .arg("--clipboard-holder")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .write_stdin("Hello, World!")
        .assert()
        .failure()
        .stdout(predicate::str::contains("ready").not());

    // The holder never loads or seeds snippets
    assert!(!home.path().join(".snape").exists());
}
