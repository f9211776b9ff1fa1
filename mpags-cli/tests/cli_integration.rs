//! Integration tests for the mpags-cipher binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mpags() -> Command {
    let mut cmd = Command::cargo_bin("mpags-cipher").unwrap();
    cmd.env_remove("MPAGS_CIPHER_KEY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_caesar_from_stdin() {
    mpags()
        .args(["-c", "caesar", "-k", "3"])
        .write_stdin("Attack at Dawn!")
        .assert()
        .success()
        .stdout("DWWDFNDWGDZQ\n");
}

#[test]
fn test_default_cipher_is_caesar_with_null_key() {
    mpags()
        .write_stdin("hello, world 42")
        .assert()
        .success()
        .stdout("HELLOWORLD42\n");
}

#[test]
fn test_caesar_decrypt() {
    mpags()
        .args(["-k", "3", "--decrypt"])
        .write_stdin("DWWDFNDWGDZQ")
        .assert()
        .success()
        .stdout("ATTACKATDAWN\n");
}

#[test]
fn test_playfair_textbook_example() {
    mpags()
        .args(["-c", "playfair", "-k", "playfair"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("KGYVRV\n");
}

#[test]
fn test_vigenere_round_trip_through_files() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    let cipher = temp_dir.path().join("cipher.txt");
    let recovered = temp_dir.path().join("recovered.txt");
    fs::write(&plain, "Attack at dawn, 1200 hours.\nMeet at the bridge.\n").unwrap();

    mpags()
        .args(["-c", "vigenere", "-k", "lemon", "-j", "3"])
        .arg("-i")
        .arg(&plain)
        .arg("-o")
        .arg(&cipher)
        .assert()
        .success()
        .stdout("");

    mpags()
        .args(["-c", "vigenere", "-k", "lemon", "--decrypt", "-j", "2"])
        .arg("-i")
        .arg(&cipher)
        .arg("-o")
        .arg(&recovered)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&recovered).unwrap(),
        "ATTACKATDAWN1200HOURSMEETATTHEBRIDGE\n"
    );
}

#[test]
fn test_worker_count_does_not_change_output() {
    let text = "The quick brown fox jumps over the lazy dog 0123456789 ".repeat(20);
    let expected = mpags()
        .args(["-c", "playfair", "-k", "monarchy", "-j", "1"])
        .write_stdin(text.clone())
        .output()
        .unwrap();
    assert!(expected.status.success());

    for workers in ["2", "5", "16"] {
        mpags()
            .args(["-c", "playfair", "-k", "monarchy", "-j", workers])
            .write_stdin(text.clone())
            .assert()
            .success()
            .stdout(expected.stdout.clone());
    }
}

#[test]
fn test_json_output() {
    mpags()
        .args(["-c", "vigenere", "-k", "lemon", "-f", "json", "-j", "1"])
        .write_stdin("attackatdawn")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""cipher": "vigenere""#))
        .stdout(predicate::str::contains(r#""mode": "encrypt""#))
        .stdout(predicate::str::contains(r#""chunks": 1"#))
        .stdout(predicate::str::contains(r#""text": "LXFOPVEFRNHR""#));
}

#[test]
fn test_empty_playfair_key_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    mpags()
        .args(["-c", "playfair"])
        .arg("-o")
        .arg(&output)
        .write_stdin("hello")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("cipher construction failed"));

    assert!(!output.exists());
}

#[test]
fn test_invalid_caesar_key_fails() {
    mpags()
        .args(["-k", "three"])
        .write_stdin("hello")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("three"));
}

#[test]
fn test_unknown_cipher_is_a_usage_error() {
    mpags()
        .args(["-c", "enigma"])
        .write_stdin("hello")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_input_file() {
    mpags()
        .args(["-i", "does-not-exist.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_excessive_worker_count_is_a_config_error() {
    mpags()
        .args(["-k", "3", "-j", "1000000"])
        .write_stdin("hello")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("configuration error"))
        .stderr(predicate::str::contains("worker_count must be at most 1024"));
}

#[test]
fn test_short_input_runs_as_one_chunk() {
    mpags()
        .args(["-c", "vigenere", "-k", "lemon", "-f", "json", "-j", "4"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""chunks": 1"#))
        .stdout(predicate::str::contains(r#""text": "LFO""#));
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("mpags.toml");
    let contents = r#"
[engine]
worker_count = 2
execution_mode = "sequential"

[output]
format = "json"
"#;
    fs::write(&config, contents).unwrap();

    mpags()
        .args(["-k", "1"])
        .arg("--config")
        .arg(&config)
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""text": "BCD""#));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.toml");
    fs::write(&config, "[engine]\nexecution_mode = \"sideways\"\n").unwrap();

    mpags()
        .arg("--config")
        .arg(&config)
        .write_stdin("abc")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("sideways"));
}

#[test]
fn test_generate_config() {
    mpags()
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[engine]"))
        .stdout(predicate::str::contains("worker_count = 4"))
        .stdout(predicate::str::contains("[output]"));
}

#[test]
fn test_version() {
    mpags()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mpags-cipher "));
}

#[test]
fn test_help_lists_options() {
    mpags()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--cipher"))
        .stdout(predicate::str::contains("--decrypt"))
        .stdout(predicate::str::contains("--workers"));
}
