use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FILE_RS: &str = "\
fn begining() {}

struct Succesful;

const CONSTANT_SUCCESFUL: i32 = 0;

fn caller() {
    let var_succesful = 0;
    'authorithyLoop: loop {
        break 'authorithyLoop;
    }
}
";

const FILE_TEST_RS: &str = "fn check_begining() {}\n";

fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("file.rs"), FILE_RS).unwrap();
    fs::write(dir.path().join("file_test.rs"), FILE_TEST_RS).unwrap();
    dir
}

fn typospot() -> Command {
    let mut cmd = Command::cargo_bin("typospot").unwrap();
    // exact-match assertions below want the plain-text lines
    cmd.arg("--no-color");
    cmd
}

fn expected_file_lines(path: &Path) -> String {
    let p = path.display();
    format!(
        "{p}:1 \"begining\" should be beginning in begining\n\
         {p}:3 \"Succesful\" should be Successful in Succesful\n\
         {p}:5 \"SUCCESFUL\" should be SUCCESSFUL in CONSTANT_SUCCESFUL\n\
         {p}:8 \"succesful\" should be successful in var_succesful\n\
         {p}:9 \"authorithy\" should be authority in authorithyLoop\n\
         {p}:10 \"authorithy\" should be authority in authorithyLoop\n"
    )
}

#[test]
fn test_default_scan_reports_every_occurrence() {
    let dir = fixture_dir();
    let file = dir.path().join("file.rs");

    typospot()
        .arg(file.display().to_string())
        .assert()
        .success()
        .stdout(expected_file_lines(&file));
}

#[test]
fn test_directory_scan_includes_test_files_by_default() {
    let dir = fixture_dir();
    let expected = format!(
        "{}{}:1 \"begining\" should be beginning in check_begining\n",
        expected_file_lines(&dir.path().join("file.rs")),
        dir.path().join("file_test.rs").display()
    );

    typospot()
        .arg(dir.path().display().to_string())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_tests_false_excludes_test_files() {
    let dir = fixture_dir();

    typospot()
        .arg(dir.path().display().to_string())
        .args(["--tests", "false"])
        .assert()
        .success()
        .stdout(expected_file_lines(&dir.path().join("file.rs")));
}

#[test]
fn test_set_exit_status_fails_on_findings() {
    let dir = fixture_dir();
    let file = dir.path().join("file.rs");

    typospot()
        .arg(file.display().to_string())
        .arg("--set-exit-status")
        .assert()
        .failure()
        .code(1)
        .stdout(expected_file_lines(&file));
}

#[test]
fn test_clean_scan_exits_zero_with_set_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("clean.rs"), "fn well_named() {}\n").unwrap();

    typospot()
        .arg(dir.path().display().to_string())
        .arg("--set-exit-status")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_ignore_words_suppress_all_their_diagnostics() {
    let dir = fixture_dir();
    let file = dir.path().join("file.rs");

    typospot()
        .arg(file.display().to_string())
        .args(["-i", "begining,succesful,authorithy"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_functions_only() {
    let dir = fixture_dir();
    let file = dir.path().join("file.rs");

    typospot()
        .arg(file.display().to_string())
        .arg("--functions")
        .assert()
        .success()
        .stdout(format!(
            "{}:1 \"begining\" should be beginning in begining\n",
            file.display()
        ));
}

#[test]
fn test_constants_only() {
    let dir = fixture_dir();
    let file = dir.path().join("file.rs");

    typospot()
        .arg(file.display().to_string())
        .arg("--constants")
        .assert()
        .success()
        .stdout(format!(
            "{}:5 \"SUCCESFUL\" should be SUCCESSFUL in CONSTANT_SUCCESFUL\n",
            file.display()
        ));
}

#[test]
fn test_variables_only() {
    let dir = fixture_dir();
    let file = dir.path().join("file.rs");

    typospot()
        .arg(file.display().to_string())
        .arg("--variables")
        .assert()
        .success()
        .stdout(format!(
            "{}:8 \"succesful\" should be successful in var_succesful\n",
            file.display()
        ));
}

#[test]
fn test_missing_target_fails_without_partial_output() {
    typospot()
        .arg("no/such/path.rs")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("could not resolve target"));
}

#[test]
fn test_json_output_lines() {
    let dir = fixture_dir();
    let file = dir.path().join("file.rs");

    let output = typospot()
        .arg(file.display().to_string())
        .args(["-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let lines: Vec<_> = std::str::from_utf8(&output).unwrap().lines().collect();
    assert_eq!(lines.len(), 6);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["line"], 1);
    assert_eq!(first["word"], "begining");
    assert_eq!(first["suggestion"], "beginning");
    assert_eq!(first["identifier"], "begining");
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = fixture_dir();
    fs::write(
        dir.path().join(".typospot.toml"),
        "ignore_words = [\"begining\"]\nfail_on_findings = true\n",
    )
    .unwrap();

    typospot()
        .current_dir(dir.path())
        .arg("file.rs")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("begining").not())
        .stdout(predicate::str::contains("authorithy"));
}
