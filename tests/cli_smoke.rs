#![allow(clippy::unwrap_used)]
//! CLI smoke tests: the binary starts, validates its configuration and runs the
//! relay loop over piped stdin.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use common::{CannedServer, UNREACHABLE};

const KEY_VARS: &[&str] = &["DEEPL_API_KEY", "CHATGPT_API_KEY", "OPENAI_API_KEY", "RUST_LOG"];

/// A `pivot` command with a private config directory and no API keys in its environment.
#[allow(deprecated)]
fn pivot(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pivot").unwrap();
    for var in KEY_VARS {
        cmd.env_remove(var);
    }
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_config(config_home: &TempDir, contents: &str) {
    let dir = config_home.path().join("pivot");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

fn endpoints_config(deepl: &str, openai: &str) -> String {
    format!("[deepl]\nendpoint = \"{deepl}\"\n\n[openai]\nendpoint = \"{openai}\"\n")
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    pivot(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DeepL"))
        .stdout(predicate::str::contains("--pivot"))
        .stdout(predicate::str::contains("--reply"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    pivot(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    pivot(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("EN"))
        .stdout(predicate::str::contains("JA"))
        .stdout(predicate::str::contains("Japanese"));
}

#[test]
fn test_missing_deepl_key_is_a_config_error() {
    let home = TempDir::new().unwrap();
    pivot(&home)
        .env("CHATGPT_API_KEY", "sk-test")
        .write_stdin("hello\n")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("DEEPL_API_KEY"));
}

#[test]
fn test_missing_openai_key_is_a_config_error() {
    let home = TempDir::new().unwrap();
    pivot(&home)
        .env("DEEPL_API_KEY", "deepl-test")
        .write_stdin("hello\n")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("CHATGPT_API_KEY"));
}

#[test]
fn test_invalid_language_code() {
    let home = TempDir::new().unwrap();
    pivot(&home)
        .env("DEEPL_API_KEY", "deepl-test")
        .env("CHATGPT_API_KEY", "sk-test")
        .args(["--reply", "xx"])
        .write_stdin("hello\n")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_malformed_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[deepl\nendpoint = ");
    pivot(&home)
        .arg("config")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_config_shows_key_state_without_the_key() {
    let home = TempDir::new().unwrap();
    pivot(&home)
        .env("DEEPL_API_KEY", "super-secret-value")
        .args(["config", "--reply", "de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(set)"))
        .stdout(predicate::str::contains("export CHATGPT_API_KEY"))
        .stdout(predicate::str::contains("DE"))
        .stdout(predicate::str::contains("super-secret-value").not());
}

#[test]
fn test_piped_question_is_answered() {
    let home = TempDir::new().unwrap();
    let deepl = CannedServer::start(vec![
        (200, r#"{"translations":[{"detected_source_language":"ES","text":"hola"}]}"#),
        (200, r#"{"translations":[{"detected_source_language":"ES","text":"response"}]}"#),
    ]);
    let openai = CannedServer::ok(
        r#"{"choices":[{"message":{"role":"assistant","content":"respuesta"},"finish_reason":"stop","index":0}]}"#,
    );
    write_config(
        &home,
        &endpoints_config(&deepl.url("/v2"), &openai.url("/v1")),
    );

    pivot(&home)
        .env("DEEPL_API_KEY", "deepl-test")
        .env("CHATGPT_API_KEY", "sk-test")
        .arg("--quiet")
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout("response\n");

    assert_eq!(deepl.finish().len(), 2);
    assert_eq!(openai.finish().len(), 1);
}

#[test]
fn test_unreachable_services_do_not_stop_the_loop() {
    let home = TempDir::new().unwrap();
    write_config(&home, &endpoints_config(UNREACHABLE, UNREACHABLE));

    pivot(&home)
        .env("DEEPL_API_KEY", "deepl-test")
        .env("CHATGPT_API_KEY", "sk-test")
        .arg("--quiet")
        .write_stdin("first\nsecond\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Failed to translate the question").count(2));
}
