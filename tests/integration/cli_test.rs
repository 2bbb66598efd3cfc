//! CLI behavior tests.
//!
//! Every test isolates the config location through XDG_CONFIG_HOME so runs
//! cannot see (or disturb) a real user config.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn typist(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("typist").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_config(config_home: &TempDir, content: &str) {
    let dir = config_home.path().join("typist");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), content).unwrap();
}

// ============================================================================
// Basics
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("script"))
        .stdout(predicate::str::contains("count"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_prints_crate_version() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp).arg("definitely-not-a-command").assert().failure();
}

// ============================================================================
// run
// ============================================================================

#[test]
fn run_without_tty_prints_phrases_plainly() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .args(["run", "Hello", "World"])
        .assert()
        .success()
        .stdout("Hello\nWorld\n");
}

#[test]
fn run_banner_without_tty_prints_phrases_plainly() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .args(["run", "--banner", "Hello", "World"])
        .assert()
        .success()
        .stdout("Hello\nWorld\n");
}

#[test]
fn run_with_empty_phrase_list_is_a_silent_noop() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "phrases = []\n");
    typist(&tmp).arg("run").assert().success().stdout("");
}

#[test]
fn run_uses_configured_phrases_when_none_are_given() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "phrases = [\"from config\"]\n");
    typist(&tmp)
        .arg("run")
        .assert()
        .success()
        .stdout("from config\n");
}

// ============================================================================
// count
// ============================================================================

#[test]
fn count_without_tty_prints_target() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .args(["count", "1234"])
        .assert()
        .success()
        .stdout("1234\n");
}

// ============================================================================
// script
// ============================================================================

#[test]
fn script_text_format_lists_frames_with_delays() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .args(["script", "AB", "C", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("   100ms  A\n"))
        .stdout(predicate::str::contains("  2000ms  AB\n"));
}

#[test]
fn script_jsonl_has_header_and_frame_lines() {
    let tmp = TempDir::new().unwrap();
    let output = typist(&tmp)
        .args(["script", "AB", "C"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();
    let mut lines = output.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with('{'));
    assert!(header.contains("\"version\":1"));
    // No timestamp unless requested, so the export is reproducible.
    assert!(!header.contains("timestamp"));
    assert_eq!(lines.next().unwrap(), "[100, \"A\"]");
}

#[test]
fn script_with_timestamp_includes_it_in_header() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .args(["script", "A", "--timestamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"timestamp\":"));
}

#[test]
fn script_respects_cycle_count() {
    let tmp = TempDir::new().unwrap();
    let one = typist(&tmp)
        .args(["script", "A", "--format", "text"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let two = typist(&tmp)
        .args(["script", "A", "--format", "text", "--cycles", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(two.len(), one.len() * 2);
}

#[test]
fn script_with_empty_phrase_list_emits_nothing() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "phrases = []\n");
    typist(&tmp).arg("script").assert().success().stdout("");
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_points_into_typist_dir() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typist"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_creates_default_file() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp).args(["config", "init"]).assert().success();

    let content = fs::read_to_string(tmp.path().join("typist").join("config.toml")).unwrap();
    assert!(content.contains("phrases"));
    assert!(content.contains("type_char_ms = 100"));
}

#[test]
fn config_init_twice_keeps_existing_file() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "phrases = [\"mine\"]\n");
    typist(&tmp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let content = fs::read_to_string(tmp.path().join("typist").join("config.toml")).unwrap();
    assert!(content.contains("mine"));
}

#[test]
fn config_show_prints_toml() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("phrases"))
        .stdout(predicate::str::contains("[pacing]"));
}

#[test]
fn config_migrate_adds_missing_keys_after_confirmation() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "# mine\nphrases = [\"keep\"]\n");
    typist(&tmp)
        .args(["config", "migrate"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated successfully"));

    let content = fs::read_to_string(tmp.path().join("typist").join("config.toml")).unwrap();
    assert!(content.contains("# mine"));
    assert!(content.contains("keep"));
    assert!(content.contains("hold_ms"));
}

#[test]
fn config_migrate_declined_leaves_file_alone() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "phrases = [\"keep\"]\n");
    typist(&tmp)
        .args(["config", "migrate"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made"));

    let content = fs::read_to_string(tmp.path().join("typist").join("config.toml")).unwrap();
    assert!(!content.contains("hold_ms"));
}

#[test]
fn config_migrate_up_to_date_reports_no_changes() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp).args(["config", "init"]).assert().success();
    typist(&tmp)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    let tmp = TempDir::new().unwrap();
    typist(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typist"));
}
