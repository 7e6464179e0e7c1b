use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Runs the binary with `home` as both `HOME` and working directory, so the
/// config and the log file land there.
fn run(home: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_numconv"));
    cmd.args(args)
        .current_dir(home)
        .env("HOME", home)
        .env_remove("NUMCONV_BASE")
        .env_remove("NUMCONV_LOG_LEVEL");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run numconv binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// Exit Status and Output
// ============================================================================

#[test]
fn test_rejected_input_exits_with_failure() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--from", "bin", "2"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Please enter a valid binary number"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_overflow_exits_with_generic_message() {
    let home = TempDir::new().unwrap();
    let nines = "9".repeat(30);
    let output = run(home.path(), &[&nines], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Invalid input. Please check your number."));
}

#[test]
fn test_hex_without_prefixes() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--from", "hex", "--no-prefix", "ff"], &[]);

    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Decimal") && lines[0].ends_with(" 255"));
    assert!(lines[1].ends_with(" 11111111"));
    assert!(lines[2].ends_with(" 377"));
    assert!(lines[3].ends_with(" FF"));
    assert!(!text.contains("0x") && !text.contains("0b") && !text.contains("0o"));
}

#[test]
fn test_prefixes_shown_by_default() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--from", "16", "ff"], &[]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("0xFF"));
    assert!(text.contains("0b11111111"));
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--json", "10"], &[]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "decimal": "10",
            "binary": "1010",
            "octal": "12",
            "hexadecimal": "A"
        })
    );
}

#[test]
fn test_env_base_used_without_flag() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &["--json", "777"], &[("NUMCONV_BASE", "oct")]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["decimal"], "511");
}

// ============================================================================
// Config and Logging
// ============================================================================

#[test]
fn test_config_phase_messages_reach_log_file() {
    let home = TempDir::new().unwrap();
    let output = run(
        home.path(),
        &["10"],
        &[("NUMCONV_BASE", "base7"), ("NUMCONV_LOG_LEVEL", "trace")],
    );

    assert!(output.status.success());
    assert!(home.path().join(".numconv").join("config.toml").exists());

    let log = fs::read_to_string(home.path().join("numconv.log")).unwrap();
    assert!(log.contains("No config file found"), "log was:\n{log}");
    assert!(log.contains("Ignoring unknown base \"base7\""), "log was:\n{log}");
    assert!(log.contains("numconv starting with input base 10"));
}

#[test]
fn test_config_file_sets_base_and_log_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".numconv");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.toml"),
        "[general]\ndefault_base = \"hexadecimal\"\nshow_prefixes = false\n\n[logging]\nlevel = \"debug\"\nfile = \"conv.log\"\n",
    )
    .unwrap();

    let output = run(home.path(), &["ff"], &[]);

    assert!(output.status.success());
    assert!(stdout(&output).lines().next().unwrap().ends_with(" 255"));
    let log = fs::read_to_string(home.path().join("conv.log")).unwrap();
    assert!(log.contains("Loaded config from"), "log was:\n{log}");
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".numconv");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[general\n").unwrap();

    let output = run(home.path(), &["10"], &[]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("using defaults"));
    let log = fs::read_to_string(home.path().join("numconv.log")).unwrap();
    assert!(log.contains("Falling back to default config"));
}
