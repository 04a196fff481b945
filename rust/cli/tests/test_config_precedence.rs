//! Configuration layering: defaults < BLACKJACK_CONFIG file < BLACKJACK_* env < flags.

use blackjack_cli::{run, run_with_input};
use serde_json::Value;
use serial_test::serial;
use std::io::Cursor;

const VARS: &[&str] = &[
    "BLACKJACK_CONFIG",
    "BLACKJACK_PLAYERS",
    "BLACKJACK_STARTING_BALANCE",
    "BLACKJACK_SEED",
    "BLACKJACK_ROUNDS",
];

fn clear_env() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

fn cfg_json() -> Value {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["blackjack", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    serde_json::from_slice(&out).unwrap()
}

fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("blackjack.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["players"]["value"].as_u64(), Some(2));
    assert_eq!(json["players"]["source"].as_str(), Some("default"));
    assert_eq!(json["starting_balance"]["value"].as_u64(), Some(100));
    assert!(json["seed"]["value"].is_null());
    assert!(json["rounds"]["value"].is_null());
    assert_eq!(json["rounds"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "players = 4\nseed = 456\nrounds = 3\n");
    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", &path);
        std::env::set_var("BLACKJACK_SEED", "99");
    }

    let json = cfg_json();
    assert_eq!(json["players"]["value"].as_u64(), Some(4));
    assert_eq!(json["players"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(99));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["rounds"]["value"].as_u64(), Some(3));
    assert_eq!(json["starting_balance"]["source"].as_str(), Some("default"));
    clear_env();
}

#[test]
#[serial]
fn flags_override_env() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_PLAYERS", "5");
        std::env::set_var("BLACKJACK_STARTING_BALANCE", "20");
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(Vec::new());
    let code = run_with_input(
        ["blackjack", "play", "--players", "1", "--seed", "8"],
        &mut stdin,
        &mut out,
        &mut err,
    );
    clear_env();

    assert_eq!(code, 0);
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("play: players=1 balance=20 seed=8"), "out: {}", out);
    assert!(!out.contains("Player 2"));
}

#[test]
#[serial]
fn invalid_env_value_is_an_error() {
    clear_env();
    unsafe {
        std::env::set_var("BLACKJACK_PLAYERS", "eleven");
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["blackjack", "cfg"], &mut out, &mut err);
    clear_env();

    assert_eq!(code, 2);
    let err = String::from_utf8(err).unwrap();
    assert!(err.contains("Invalid players"), "stderr: {}", err);
    assert!(out.is_empty());
}

#[test]
#[serial]
fn out_of_range_file_value_is_rejected() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "players = 12\n");
    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", &path);
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(Vec::new());
    let code = run_with_input(["blackjack", "play"], &mut stdin, &mut out, &mut err);
    clear_env();

    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("players must be 1..=10"));
}

#[test]
#[serial]
fn malformed_file_is_reported() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "players = [\n");
    unsafe {
        std::env::set_var("BLACKJACK_CONFIG", &path);
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["blackjack", "cfg"], &mut out, &mut err);
    clear_env();

    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("cannot parse config file"));
}
