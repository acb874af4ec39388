//! Integration tests for the lnu CLI.
//!
//! Run with: `cargo test --package lnu-cli --test cli_integration`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Helper to run the lnu CLI with an isolated environment.
///
/// The config directory points into `home` so a developer's own config file
/// never leaks into the tests.
fn run_lnu_with_home(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lnu"))
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("LNU_DATA_PATH")
        .env_remove("LNU_NO_SEED")
        .env_remove("LNU_BIND")
        .args(args)
        .output()
        .expect("Failed to execute lnu command")
}

/// Helper to run the lnu CLI in a throwaway home.
fn run_lnu(args: &[&str]) -> Output {
    let temp = TempDir::new().unwrap();
    run_lnu_with_home(temp.path(), args)
}

/// Parse stdout as JSON.
fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

const WATER_TOML: &str = r#"
[[morphemes]]
surface = "samqwan"
gloss = "water"
role = "root"

[[entries]]
headword = "samqwan"
english_gloss = "water"
part_of_speech = "NI"
animacy = "inanimate"
"#;

// =============================================================================
// Word and sentence
// =============================================================================

#[test]
fn test_word_hit_json() {
    let output = run_lnu(&["word", "KESALUL", "--json"]);
    assert!(output.status.success(), "lnu word should succeed");

    let json = stdout_json(&output);
    assert_eq!(json["matched_entry"]["headword"], "kesalul");
    assert_eq!(json["guessed_morphemes"].as_array().unwrap().len(), 0);
}

#[test]
fn test_word_miss_text() {
    let output = run_lnu(&["word", "lnu'jik"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Guessed morphemes:"));
    assert!(stdout.contains("UNKNOWN-ROOT"));
    assert!(stdout.contains("Animacy: animate"));
}

#[test]
fn test_blank_word_is_null() {
    let output = run_lnu(&["word", "   ", "--json"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), Value::Null);
}

#[test]
fn test_sentence_json() {
    let output = run_lnu(&["sentence", "Kwe',", "teluisi", "Katew.", "--json"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["sentence"], "Kwe', teluisi Katew.");
    assert_eq!(json["tokens"].as_array().unwrap().len(), 3);
    assert_eq!(json["analyses"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn test_generate_json() {
    let output = run_lnu(&[
        "generate",
        "refrigerator",
        "--purpose",
        "keeps food cold",
        "--tag",
        "home",
        "--json",
    ]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["concept"], "refrigerator");
    let candidates = json["candidates"].as_array().unwrap();
    assert_eq!(candidates[0]["word"], "Mesentaqtekekim");
    assert_eq!(candidates.last().unwrap()["word"], "Apoqnmatultimik");
}

#[test]
fn test_compound_text() {
    let output = run_lnu(&["compound", "weenie"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().next().unwrap().contains("weenieaqan"));
    assert!(stdout.contains("fluent Mi'kmaw speakers"));
}

// =============================================================================
// Dictionary
// =============================================================================

#[test]
fn test_lookup_english() {
    let output = run_lnu(&["lookup", "thank you", "-t", "english", "--json"]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["headword"], "wela'lin");
}

#[test]
fn test_lookup_bad_input_type_fails() {
    let output = run_lnu(&["lookup", "kwe'", "-t", "french"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown input type"));
}

#[test]
fn test_lookup_orthography() {
    let output = run_lnu(&["lookup", "gesalul", "--orth", "both", "--json"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["headword"], "kesalul");
    assert_eq!(json["sfo_spelling"], "kesalul");
    assert_eq!(json["lo_spelling"], "gesalul");

    let output = run_lnu(&["lookup", "kesalul", "-o", "LO"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().next().unwrap().starts_with("gesalul – I love you"));
}

#[test]
fn test_lookup_bad_orthography_fails() {
    let output = run_lnu(&["lookup", "kesalul", "--orth", "ipa"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown orthography"));
}

#[test]
fn test_entries_text() {
    let output = run_lnu(&["entries"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("kwe'"));
    assert!(stdout.contains("entries"));
}

// =============================================================================
// Data loading and configuration
// =============================================================================

#[test]
fn test_data_flag_extends_seed() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("water.toml");
    fs::write(&data, WATER_TOML).unwrap();

    let output = run_lnu_with_home(
        temp.path(),
        &["--data", data.to_str().unwrap(), "word", "samqwansi", "--json"],
    );
    assert!(output.status.success());

    let json = stdout_json(&output);
    let morphemes = json["guessed_morphemes"].as_array().unwrap();
    assert_eq!(morphemes[0]["surface"], "samqwan");
    assert_eq!(morphemes[0]["gloss"], "water");
    assert_eq!(morphemes[1]["surface"], "si");
}

#[test]
fn test_env_data_path_without_seed() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("water.toml");
    fs::write(&data, WATER_TOML).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_lnu"))
        .current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("LNU_DATA_PATH", &data)
        .env("LNU_NO_SEED", "true")
        .env_remove("LNU_BIND")
        .args(["entries", "--json"])
        .output()
        .expect("Failed to execute lnu command");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json, serde_json::json!(["samqwan"]));
}

#[test]
fn test_unsupported_data_file_fails() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("lexicon.yaml");
    fs::write(&data, "entries: []").unwrap();

    let output = run_lnu_with_home(temp.path(), &["--data", data.to_str().unwrap(), "entries"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_show_defaults() {
    let output = run_lnu(&["config", "show", "--json"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["bind"], "127.0.0.1:8787");
    assert_eq!(json["no_seed"], false);
    assert_eq!(json["data_path"], Value::Null);
}

#[test]
fn test_config_path() {
    let output = run_lnu(&["config", "path"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("config.json"));
}
