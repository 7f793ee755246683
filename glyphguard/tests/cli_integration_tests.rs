// glyphguard/tests/cli_integration_tests.rs
//! Command-line integration tests for the `glyphguard` binary.
//!
//! Each test spawns the built executable with `assert_cmd`, feeds it stdin and
//! checks stdout, stderr and the exit code. Output is never a terminal here,
//! so no ANSI escapes need stripping.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn glyphguard() -> Command {
    let mut cmd = Command::cargo_bin("glyphguard").unwrap();
    cmd.env_remove("GLYPHGUARD_CONFIG");
    cmd.env("RUST_LOG", "debug");
    cmd
}

fn run_glyphguard(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = glyphguard();
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

fn temp_file(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{}", yaml)?;
    Ok(file)
}

#[test]
fn sanitize_strips_zero_width_space() {
    run_glyphguard("Hello\u{200B}world", &["sanitize"])
        .success()
        .stdout("Helloworld\n");
}

#[test]
fn sanitize_aggressive_folds_homoglyphs() {
    run_glyphguard("\u{0430}pple", &["sanitize", "--mode", "aggressive"])
        .success()
        .stdout("apple\n");
}

#[test]
fn unknown_mode_falls_back_to_safe() {
    run_glyphguard("\u{0430}pple", &["sanitize", "-m", "paranoid"])
        .success()
        .stdout("\u{0430}pple\n");
}

#[test]
fn sanitize_writes_output_file() -> Result<()> {
    let out = NamedTempFile::new()?;
    let path = out.path().to_str().unwrap().to_string();
    run_glyphguard("a\u{202E}b", &["sanitize", "-o", &path]).success();
    assert_eq!(fs::read_to_string(&path)?, "ab\n");
    Ok(())
}

#[test]
fn sanitize_reads_input_file() -> Result<()> {
    let input = temp_file("x\u{200D}y")?;
    let path = input.path().to_str().unwrap().to_string();
    run_glyphguard("", &["sanitize", "-i", &path, "-m", "aggressive"])
        .success()
        .stdout("xy\n");
    Ok(())
}

#[test]
fn sanitize_diff_escapes_invisibles() {
    run_glyphguard("Hello\u{200B}world\n", &["sanitize", "--diff"])
        .success()
        .stdout(predicate::str::contains("-Hello<U+0200B>world"))
        .stdout(predicate::str::contains("+Helloworld"));
}

#[test]
fn sanitize_json_includes_stats() -> Result<()> {
    let output = glyphguard()
        .args(["sanitize", "--json"])
        .write_stdin("a\u{200B}b")
        .output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["text"], "ab\n");
    assert_eq!(value["stats"]["invisibles_removed"], 1);
    assert_eq!(value["stats"]["advisories"]["had_default_ignorables"], true);
    Ok(())
}

#[test]
fn sanitize_stats_go_to_stderr() {
    run_glyphguard("a\u{200B}b", &["sanitize", "--stats"])
        .success()
        .stdout("ab\n")
        .stderr(predicate::str::contains("invisibles_removed"));
}

#[test]
fn analyze_json_is_camel_case() -> Result<()> {
    let output = glyphguard()
        .args(["analyze", "--json"])
        .write_stdin("Test\u{202E}reverse\u{202C}text")
        .output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["sanitizedText"], "Testreversetext\n");
    let hits = value["hits"].as_array().unwrap();
    assert!(hits
        .iter()
        .any(|h| h["kind"] == "bidi_controls" && h["severity"] == "block"));
    assert!(value["diffOps"].as_array().is_some());
    Ok(())
}

#[test]
fn analyze_report_lists_findings() {
    run_glyphguard("pay\u{200B}pal", &["analyze"])
        .success()
        .stdout(predicate::str::contains("pay[-<U+0200B>-]pal"))
        .stdout(predicate::str::contains("default_ignorables"));
}

#[test]
fn fail_on_block_exit_code() {
    run_glyphguard("a\u{202E}b", &["analyze", "--fail-on-block"]).code(2);
    run_glyphguard("a\u{200B}b", &["analyze", "--fail-on-block"]).success();
    run_glyphguard("a\u{202E}b", &["analyze"]).success();
}

#[test]
fn inspect_lists_codepoints_without_sanitizing() -> Result<()> {
    let output = glyphguard()
        .args(["inspect", "--json"])
        .write_stdin("a\u{200B}\u{0663}")
        .output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["codePoint"], 0x200B);
    assert_eq!(items[0]["kinds"][0], "default_ignorables");
    assert_eq!(items[1]["kinds"][0], "non_ascii_digits");
    Ok(())
}

#[test]
fn config_ceiling_rejects_large_input() -> Result<()> {
    let config = temp_file("max_input_bytes: 4\n")?;
    let path = config.path().to_str().unwrap().to_string();
    run_glyphguard("too long", &["--config", &path, "analyze"])
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum of 4 bytes"));
    run_glyphguard("too long", &["sanitize", "--config", &path])
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum of 4 bytes"));
    Ok(())
}

#[test]
fn config_default_mode_is_used() -> Result<()> {
    let config = temp_file("default_mode: aggressive\n")?;
    run_glyphguard("\u{0430}pple", &["sanitize"])
        .success()
        .stdout("\u{0430}pple\n");
    glyphguard()
        .env("GLYPHGUARD_CONFIG", config.path())
        .arg("sanitize")
        .write_stdin("\u{0430}pple")
        .assert()
        .success()
        .stdout("apple\n");
    Ok(())
}

#[test]
fn missing_config_fails_with_path() {
    run_glyphguard("x", &["--config", "/no/such/glyphguard.yaml", "sanitize"])
        .failure()
        .stderr(predicate::str::contains("/no/such/glyphguard.yaml"));
}

#[test]
fn invalid_theme_is_reported() -> Result<()> {
    let theme = temp_file("bogus_entry:\n  fg: red\n")?;
    let path = theme.path().to_str().unwrap().to_string();
    run_glyphguard("x", &["--theme", &path, "sanitize"])
        .failure()
        .stderr(predicate::str::contains("Failed to parse theme file"));
    Ok(())
}
