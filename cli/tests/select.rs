//! # Filepick Select Integration Tests
//!
//! File: cli/tests/select.rs
//!
//! ## Overview
//!
//! Runs the real binary against stand-in selector scripts executed by `sh`,
//! checking the printed output contract end to end.
//!
#![cfg(unix)]

mod common;

use common::{filepick_cmd, write_user_config, SelectorFixture};
use predicates::prelude::*;
use std::fs;

const NO_SELECTION: &str = "No files selected or an error occurred.\n";

#[test]
fn test_prints_selected_paths_in_order() {
    let fixture = SelectorFixture::new("printf 'a/b.txt\\nc/d.txt'\n");
    fixture
        .cmd()
        .assert()
        .success()
        .stdout("Selected files:\na/b.txt\nc/d.txt\n");
}

#[test]
fn test_trims_surrounding_whitespace() {
    let fixture = SelectorFixture::new("printf '  a.txt  \\n'\n");
    fixture
        .cmd()
        .assert()
        .success()
        .stdout("Selected files:\na.txt\n");
}

#[test]
fn test_keeps_duplicate_paths() {
    let fixture = SelectorFixture::new("printf 'x.txt\\ny.txt\\nx.txt\\n'\n");
    fixture
        .cmd()
        .assert()
        .success()
        .stdout("Selected files:\nx.txt\ny.txt\nx.txt\n");
}

#[test]
fn test_empty_output_means_no_selection() {
    let fixture = SelectorFixture::new("exit 0\n");
    fixture
        .cmd()
        .assert()
        .success()
        .stdout(NO_SELECTION);
}

#[test]
fn test_user_cancel_prints_no_selection() {
    let fixture = SelectorFixture::new("printf 'ignored.txt\\n'\necho 'User canceled.' >&2\nexit 1\n");
    fixture
        .cmd()
        .assert()
        .success()
        .stdout(NO_SELECTION)
        .stdout(predicate::str::contains("ignored.txt").not())
        .stderr(predicate::str::contains("Error: User canceled."))
        .stderr(predicate::str::contains("failed with exit code 1"));
}

#[test]
fn test_missing_interpreter_prints_no_selection() {
    let fixture = SelectorFixture::new("printf 'a.txt'\n");
    filepick_cmd(fixture.dir.path())
        .arg("--interpreter")
        .arg("nonexistent_filepick_test_command_98765")
        .arg("--script")
        .arg(&fixture.script)
        .assert()
        .success()
        .stdout(NO_SELECTION)
        .stderr(predicate::str::contains("Exception occurred:"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_repeated_runs_are_identical() {
    let fixture = SelectorFixture::new("printf '/tmp/one.txt\\n/tmp/two.txt\\n'\n");
    let first = fixture.cmd().assert().success().get_output().stdout.clone();
    let second = fixture.cmd().assert().success().get_output().stdout.clone();
    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        "Selected files:\n/tmp/one.txt\n/tmp/two.txt\n"
    );
}

#[test]
fn test_env_vars_select_the_script() {
    let fixture = SelectorFixture::new("printf 'from-env.txt'\n");
    filepick_cmd(fixture.dir.path())
        .env("FILEPICK_INTERPRETER", "sh")
        .env("FILEPICK_SCRIPT", &fixture.script)
        .assert()
        .success()
        .stdout("Selected files:\nfrom-env.txt\n");
}

#[test]
fn test_project_config_selects_the_script() {
    let fixture = SelectorFixture::new("printf 'from-config.txt'\n");
    fs::write(
        fixture.dir.path().join(".filepick.toml"),
        "[selector]\nscript_path = \"select_files.sh\"\ninterpreter = \"sh\"\n",
    )
    .unwrap();
    filepick_cmd(fixture.dir.path())
        .assert()
        .success()
        .stdout("Selected files:\nfrom-config.txt\n");
}

#[test]
fn test_cli_flag_overrides_project_config() {
    let fixture = SelectorFixture::new("printf 'from-flag.txt'\n");
    fs::write(
        fixture.dir.path().join(".filepick.toml"),
        "[selector]\nscript_path = \"does_not_exist.sh\"\ninterpreter = \"sh\"\n",
    )
    .unwrap();
    filepick_cmd(fixture.dir.path())
        .arg("--script")
        .arg(&fixture.script)
        .assert()
        .success()
        .stdout("Selected files:\nfrom-flag.txt\n");
}

#[test]
fn test_user_config_selects_the_script() {
    let fixture = SelectorFixture::new("printf 'from-user-config.txt'\n");
    write_user_config(
        fixture.dir.path(),
        &format!(
            "[selector]\ninterpreter = \"sh\"\nscript_path = \"{}\"\n",
            fixture.script.display()
        ),
    );
    filepick_cmd(fixture.dir.path())
        .assert()
        .success()
        .stdout("Selected files:\nfrom-user-config.txt\n");
}

#[test]
fn test_project_config_overrides_user_config() {
    let fixture = SelectorFixture::new("printf 'from-project.txt'\n");
    write_user_config(
        fixture.dir.path(),
        "[selector]\ninterpreter = \"sh\"\nscript_path = \"does_not_exist.sh\"\n",
    );
    // Only the script is set here; the interpreter still comes from the user file.
    fs::write(
        fixture.dir.path().join(".filepick.toml"),
        "[selector]\nscript_path = \"select_files.sh\"\n",
    )
    .unwrap();
    filepick_cmd(fixture.dir.path())
        .assert()
        .success()
        .stdout("Selected files:\nfrom-project.txt\n");
}
