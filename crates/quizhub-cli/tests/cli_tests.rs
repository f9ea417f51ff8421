//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GOOD_QUIZ: &str = r#"{
  "title": "Capitals",
  "questions": [
    { "question": "Capital of France?", "options": ["Paris", "Rome"], "correctIndex": 0 },
    { "text": "Capital of Japan?", "options": ["Osaka", "Tokyo"], "correctIndex": 1, "explanation": "Since 1868." }
  ]
}"#;

fn quizhub(data: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizhub").unwrap();
    cmd.current_dir(data.path())
        .env_remove("QUIZHUB_DATA_DIR")
        .arg("--data-dir")
        .arg(data.path().join("store"));
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn admin(data: &TempDir) -> Command {
    let mut cmd = quizhub(data);
    cmd.args(["admin", "--username", "admin", "--password", "Admin@123"]);
    cmd
}

#[test]
fn help_lists_subcommands() {
    let data = TempDir::new().unwrap();
    quizhub(&data)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("admin"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_flag() {
    let data = TempDir::new().unwrap();
    quizhub(&data)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizhub"));
}

#[test]
fn list_shows_default_quiz() {
    let data = TempDir::new().unwrap();
    quizhub(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("QuizHub"))
        .stdout(predicate::str::contains("default-rajasthan-quiz"))
        .stdout(predicate::str::contains("Rajasthan Folk Dance"));
}

#[test]
fn history_starts_empty() {
    let data = TempDir::new().unwrap();
    quizhub(&data)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed quizzes yet."));
}

#[test]
fn validate_good_file() {
    let data = TempDir::new().unwrap();
    let file = write_file(&data, "good.json", GOOD_QUIZ);
    quizhub(&data)
        .arg("validate")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz: Capitals (2 questions)"))
        .stdout(predicate::str::contains("Quiz file valid."));
}

#[test]
fn validate_reports_lint_warnings() {
    let data = TempDir::new().unwrap();
    let file = write_file(
        &data,
        "odd.json",
        r#"{"title":"Odd","questions":[{"text":"Q","options":["only"],"correctIndex":3}]}"#,
    );
    quizhub(&data)
        .arg("validate")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("only 1 option(s)"))
        .stdout(predicate::str::contains("2 warning(s) found."));
}

#[test]
fn validate_rejects_missing_fields() {
    let data = TempDir::new().unwrap();
    let file = write_file(
        &data,
        "bad.json",
        r#"{"title":"Bad","questions":[{"options":["a","b"]}]}"#,
    );
    quizhub(&data)
        .arg("validate")
        .arg("--file")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("some questions are missing required fields"));
}

#[test]
fn validate_rejects_bad_structure() {
    let data = TempDir::new().unwrap();
    let file = write_file(&data, "flat.json", r#"{"questions":[]}"#);
    quizhub(&data)
        .arg("validate")
        .arg("--file")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON structure"));
}

#[test]
fn validate_nonexistent_file() {
    let data = TempDir::new().unwrap();
    quizhub(&data)
        .args(["validate", "--file", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read quiz file"));
}

#[test]
fn admin_import_then_list() {
    let data = TempDir::new().unwrap();
    let file = write_file(&data, "good.json", GOOD_QUIZ);
    admin(&data)
        .arg("import")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz \"Capitals\" added successfully!"));

    quizhub(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Capitals"))
        .stdout(predicate::str::contains("Rajasthan Folk Dance"));

    let raw = std::fs::read_to_string(data.path().join("store/quiz-app-data.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);
    assert!(records[1]["createdAt"].is_i64());
}

#[test]
fn admin_rejects_bad_password() {
    let data = TempDir::new().unwrap();
    quizhub(&data)
        .args(["admin", "--username", "admin", "--password", "nope", "set-name", "--name", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid username or password"));

    quizhub(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("QuizHub"));
}

#[test]
fn admin_set_name() {
    let data = TempDir::new().unwrap();
    admin(&data)
        .args(["set-name", "--name", "Folk Trivia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("App name updated!"));

    quizhub(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Folk Trivia"));
}

#[test]
fn admin_set_blank_name_fails() {
    let data = TempDir::new().unwrap();
    admin(&data)
        .args(["set-name", "--name", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("app name cannot be empty"));
}

#[test]
fn admin_delete_with_yes() {
    let data = TempDir::new().unwrap();
    admin(&data)
        .args(["delete", "--id", "default-rajasthan-quiz", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted \"Rajasthan Folk Dance (Lok Nartya)\"."));

    quizhub(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quizzes available. Ask admin to upload one."));
}

#[test]
fn admin_delete_declined_keeps_quiz() {
    let data = TempDir::new().unwrap();
    admin(&data)
        .args(["delete", "--id", "default-rajasthan-quiz"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[y/N]"))
        .stdout(predicate::str::contains("Nothing deleted."));

    quizhub(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-rajasthan-quiz"));
}

#[test]
fn admin_delete_unknown_id_is_noop() {
    let data = TempDir::new().unwrap();
    admin(&data)
        .args(["delete", "--id", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted."))
        .stdout(predicate::str::contains("[y/N]").not());
}

#[test]
fn scripted_play_records_history() {
    let data = TempDir::new().unwrap();
    quizhub(&data)
        .arg("play")
        .write_stdin("Asha\n1\n2\n\n\n2\n\n\n1\n\n\n3\n\n\n2\n\n\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Outstanding!"))
        .stdout(predicate::str::contains("Score: 100%"));

    quizhub(&data)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Asha"))
        .stdout(predicate::str::contains("5/5"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn play_with_name_flag_skips_prompt() {
    let data = TempDir::new().unwrap();
    quizhub(&data)
        .args(["play", "--name", "Ravi"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your name").not())
        .stdout(predicate::str::contains("All rights reserved."));
}

#[test]
fn init_creates_starter_files() {
    let dir = TempDir::new().unwrap();
    #[allow(deprecated)]
    Command::cargo_bin("quizhub")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizhub.toml"));

    assert!(dir.path().join("quizhub.toml").exists());
    assert!(dir.path().join("quizzes/example.json").exists());

    #[allow(deprecated)]
    Command::cargo_bin("quizhub")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping."));
}

#[test]
fn missing_config_file_fails() {
    let data = TempDir::new().unwrap();
    quizhub(&data)
        .args(["--config", "absent.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
