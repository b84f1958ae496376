//! End-to-end binary tests.

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Binary command sandboxed to `dir`: working directory and config/log
/// directory both point at the scratch dir, so nothing lands in the
/// developer's real config directory.
fn assignmentdb(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("assignmentdb");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

#[test]
fn test_create_and_preview() {
    let dir = tempfile::tempdir().unwrap();

    assignmentdb(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Database created successfully at:"))
        .stdout(predicate::str::contains("- departments: 4 records"))
        .stdout(predicate::str::contains("- employees: 10 records"))
        .stdout(predicate::str::contains("- projects: 8 records"))
        .stdout(predicate::str::contains("TABLE PREVIEWS"))
        .stdout(predicate::str::contains("DEPARTMENTS:"))
        .stdout(predicate::str::contains("EMPLOYEES:"))
        .stdout(predicate::str::contains("Human Resources"))
        .stdout(predicate::str::contains("Jack Robinson"))
        // projects preview is disabled
        .stdout(predicate::str::contains("PROJECTS:").not());

    assert!(dir.path().join("sql_assignment.db").exists());
}

#[test]
fn test_rerun_replaces_dataset() {
    let dir = tempfile::tempdir().unwrap();

    assignmentdb(dir.path()).assert().success();
    assignmentdb(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- employees: 10 records"));
}

#[test]
fn test_preview_column_headers_present() {
    let dir = tempfile::tempdir().unwrap();

    assignmentdb(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("department_id"))
        .stdout(predicate::str::contains("department_name"))
        .stdout(predicate::str::contains("employee_id"))
        .stdout(predicate::str::contains("manager_id"));
}

#[test]
fn test_log_file_stays_in_sandbox() {
    let dir = tempfile::tempdir().unwrap();

    assignmentdb(dir.path()).assert().success();

    let logged = dir
        .path()
        .join(".config")
        .join("assignmentdb")
        .join("assignmentdb.log");
    assert!(
        logged.exists(),
        "log file should be created under the scratch config dir"
    );
}
