//! Integration tests for the hx CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn session_file(dir: &TempDir) -> PathBuf {
    dir.path().join("session.json")
}

fn hexivium(session: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hexivium").unwrap();
    cmd.env_remove("HEXIVIUM_INTERPRETER")
        .env_remove("HEXIVIUM_DATASET")
        .env_remove("HEXIVIUM_SESSION")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--session")
        .arg(session);
    cmd
}

fn read_session(session: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(session).unwrap()).unwrap()
}

/// Record the reference reading `[7, 8, 9, 6, 7, 8]`.
fn cast_reference(session: &Path) {
    for v in ["7", "8", "9", "6", "7", "8"] {
        hexivium(session)
            .args(["toss", "--value", v])
            .assert()
            .success();
    }
}

// ---------------------------------------------------------------------------
// toss
// ---------------------------------------------------------------------------

#[test]
fn toss_records_lines_and_persists() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);

    hexivium(&session)
        .args(["--seed", "11", "toss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1: "));

    let state = read_session(&session);
    assert_eq!(state["seed"], 11);
    assert_eq!(state["reading"]["toss_count"], 1);
}

#[test]
fn toss_all_then_reject() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);

    hexivium(&session)
        .args(["--seed", "5", "toss", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 6: "))
        .stdout(predicate::str::contains("Inner: "));

    hexivium(&session)
        .arg("toss")
        .assert()
        .success()
        .stdout(predicate::str::contains("hexagram is complete"));

    assert_eq!(read_session(&session)["reading"]["toss_count"], 6);
}

#[test]
fn same_seed_same_reading() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    for dir in [&a, &b] {
        hexivium(&session_file(dir))
            .args(["--seed", "2024", "toss", "--all"])
            .assert()
            .success();
    }
    assert_eq!(
        read_session(&session_file(&a))["reading"]["lines"],
        read_session(&session_file(&b))["reading"]["lines"]
    );
}

#[test]
fn toss_rejects_invalid_value() {
    let dir = TempDir::new().unwrap();
    hexivium(&session_file(&dir))
        .args(["toss", "--value", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// show / status
// ---------------------------------------------------------------------------

#[test]
fn show_reference_reading() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    cast_reference(&session);

    hexivium(&session)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inner: Already Fording (#63)"))
        .stdout(predicate::str::contains("Outer: Following (#17)"))
        .stdout(predicate::str::contains("Line 3 (Outer Change): "))
        .stdout(predicate::str::contains("Line 4 (Inner Change): "));

    let state = read_session(&session);
    assert_eq!(
        state["reading"]["lines"],
        serde_json::json!([7, 8, 9, 6, 7, 8])
    );
}

#[test]
fn show_empty_session() {
    let dir = TempDir::new().unwrap();
    hexivium(&session_file(&dir))
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lines cast yet."));
}

#[test]
fn status_reports_progress() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    hexivium(&session)
        .args(["toss", "--value", "6"])
        .assert()
        .success();

    hexivium(&session)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading: in progress (1 of 6 lines)"));
}

// ---------------------------------------------------------------------------
// ask
// ---------------------------------------------------------------------------

#[test]
fn ask_before_completion_is_ignored() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    hexivium(&session)
        .args(["toss", "--value", "7"])
        .assert()
        .success();

    hexivium(&session)
        .args(["ask", "Will", "it", "rain?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("finish the hexagram first"));

    assert!(read_session(&session)["user_question"].is_null());
}

#[test]
fn ask_after_completion_is_stored() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    cast_reference(&session);

    hexivium(&session)
        .args(["ask", "Should I move?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Should I move?"));

    assert_eq!(read_session(&session)["user_question"], "Should I move?");
}

// ---------------------------------------------------------------------------
// consult
// ---------------------------------------------------------------------------

#[test]
fn consult_without_interpreter_prints_prompt() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    cast_reference(&session);
    hexivium(&session)
        .args(["ask", "What now?"])
        .assert()
        .success();

    hexivium(&session)
        .arg("consult")
        .assert()
        .success()
        .stdout(predicate::str::contains("Act as an I-Ching oracle"))
        .stdout(predicate::str::contains("What now?"))
        .stdout(predicate::str::contains(
            "inner state of awareness: Already Fording",
        ));
}

#[test]
fn consult_before_completion_fails() {
    let dir = TempDir::new().unwrap();
    hexivium(&session_file(&dir))
        .arg("consult")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not complete yet (0 of 6"));
}

#[cfg(unix)]
#[test]
fn consult_with_interpreter() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    cast_reference(&session);

    hexivium(&session)
        .args(["--interpreter", "cat", "consult"])
        .assert()
        .success()
        .stdout(predicate::str::contains("body hexagram number: 63"));

    let journal = read_session(&session)["journal"]["entries"].to_string();
    assert!(journal.contains("Interpretation"));
}

#[cfg(unix)]
#[test]
fn consult_failure_keeps_reading() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    cast_reference(&session);

    hexivium(&session)
        .env("HEXIVIUM_INTERPRETER", "false")
        .arg("consult")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: The oracle could not be reached"));

    let state = read_session(&session);
    assert_eq!(state["reading"]["toss_count"], 6);
    assert!(
        state["journal"]["entries"]
            .to_string()
            .contains("InterpreterFailure")
    );
}

// ---------------------------------------------------------------------------
// dataset
// ---------------------------------------------------------------------------

#[test]
fn list_shows_all_hexagrams() {
    let dir = TempDir::new().unwrap();
    hexivium(&session_file(&dir))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Force"))
        .stdout(predicate::str::contains("Already Fording"))
        .stdout(predicate::str::contains("64 hexagrams"));
}

#[test]
fn lookup_by_number_key_and_name() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);

    hexivium(&session)
        .args(["lookup", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Force"))
        .stdout(predicate::str::contains("Line 1: Hidden dragon. Do not act."));

    hexivium(&session)
        .args(["lookup", "100110"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Following"));

    hexivium(&session)
        .args(["lookup", "already fording"])
        .assert()
        .success()
        .stdout(predicate::str::contains("63. Already Fording"));
}

#[test]
fn lookup_unknown_fails() {
    let dir = TempDir::new().unwrap();
    hexivium(&session_file(&dir))
        .args(["lookup", "Nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hexagram not found"));
}

#[test]
fn custom_dataset_with_missing_keys() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    let dataset = dir.path().join("tiny.json");
    fs::write(
        &dataset,
        r#"{"111111": {"name": "Force", "number": 1, "lines": ["a","b","c","d","e","f"]}}"#,
    )
    .unwrap();

    for _ in 0..6 {
        hexivium(&session)
            .arg("--dataset")
            .arg(&dataset)
            .args(["toss", "--value", "6"])
            .assert()
            .success();
    }

    hexivium(&session)
        .arg("--dataset")
        .arg(&dataset)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inner: unknown"))
        .stdout(predicate::str::contains("Outer: Force (#1)"));
}

#[test]
fn malformed_dataset_fails() {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("bad.json");
    fs::write(&dataset, "{ nope").unwrap();

    hexivium(&session_file(&dir))
        .arg("--dataset")
        .arg(&dataset)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.json"));
}

// ---------------------------------------------------------------------------
// journal / new / note
// ---------------------------------------------------------------------------

#[test]
fn journal_export_to_file() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    cast_reference(&session);
    hexivium(&session)
        .args(["note", "Quiet", "morning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note recorded."));

    let out = dir.path().join("journal.md");
    hexivium(&session)
        .args(["journal", "--output"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("# I-Ching Reading Journal"));
    assert!(content.contains("**Line 3**: 9"));
    assert!(content.contains("## Already Fording (#63) → Following (#17)"));
    assert!(content.contains("> Quiet morning"));
}

#[test]
fn journal_text_and_unknown_format() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    hexivium(&session)
        .args(["toss", "--value", "8"])
        .assert()
        .success();

    hexivium(&session)
        .args(["journal", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1: 8"));

    hexivium(&session)
        .args(["journal", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn new_starts_a_fresh_reading() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);
    cast_reference(&session);
    let old_id = read_session(&session)["id"].clone();

    hexivium(&session)
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("new reading"));

    let state = read_session(&session);
    assert_ne!(state["id"], old_id);
    assert_eq!(state["reading"]["toss_count"], 0);
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_processes_commands_and_persists() {
    let dir = TempDir::new().unwrap();
    let session = session_file(&dir);

    hexivium(&session)
        .arg("play")
        .write_stdin("toss 7\ntoss 8\nlines\ndance\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lines (bottom to top): 7 8"))
        .stdout(predicate::str::contains("unknown command: dance"))
        .stdout(predicate::str::contains("Goodbye!"));

    assert_eq!(read_session(&session)["reading"]["toss_count"], 2);
}

#[test]
fn play_stops_at_eof() {
    let dir = TempDir::new().unwrap();
    hexivium(&session_file(&dir))
        .arg("play")
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I-Ching Commands"));
}
