//! CLI-level tests through the shared entry point with a captured writer.
#![allow(clippy::unwrap_used)]

use std::fs;
use stringquotes::entry_point::run_with_args_to;
use tempfile::TempDir;

fn run(args: Vec<String>) -> (i32, String) {
    let mut buffer = Vec::new();
    let code = run_with_args_to(args, &mut buffer).unwrap();
    (code, String::from_utf8(buffer).unwrap())
}

fn fixture_dir(content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.py"), content).unwrap();
    dir
}

#[test]
fn test_violation_sets_exit_code() {
    let dir = fixture_dir("bad = \"x\"\n");
    let (code, output) = run(vec![dir.path().to_string_lossy().into_owned()]);

    assert_eq!(code, 1);
    assert!(output.contains("S800"), "missing rule code in: {output}");
    assert!(
        output.contains("bad.py:1:7:"),
        "missing location in: {output}"
    );
    assert!(output.contains("should be '"));
}

#[test]
fn test_double_preference_flag() {
    let dir = fixture_dir("bad = \"x\"\n");
    let (code, output) = run(vec![
        dir.path().to_string_lossy().into_owned(),
        "--string-quotes".to_owned(),
        "double".to_owned(),
    ]);

    assert_eq!(code, 0);
    assert!(output.contains("No quote inconsistencies"));
}

#[test]
fn test_json_output() {
    let dir = fixture_dir("bad = \"x\"\n");
    let (code, output) = run(vec![
        dir.path().to_string_lossy().into_owned(),
        "--json".to_owned(),
    ]);

    assert_eq!(code, 1);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let diagnostics = value.as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["line"], 1);
    assert_eq!(diagnostics[0]["col"], 6);
    assert_eq!(diagnostics[0]["rule_id"], "S800");
}

#[test]
fn test_config_file_sets_preference() {
    let dir = fixture_dir("bad = \"x\"\n");
    fs::write(
        dir.path().join(".stringquotes.toml"),
        "[stringquotes]\nstring-quotes = \"double\"\n",
    )
    .unwrap();

    let (code, _) = run(vec![dir.path().to_string_lossy().into_owned()]);
    assert_eq!(code, 0);
}

#[test]
fn test_flag_overrides_config_file() {
    let dir = fixture_dir("bad = \"x\"\n");
    fs::write(
        dir.path().join(".stringquotes.toml"),
        "[stringquotes]\nstring-quotes = \"double\"\n",
    )
    .unwrap();

    let (code, _) = run(vec![
        dir.path().to_string_lossy().into_owned(),
        "--string-quotes".to_owned(),
        "single".to_owned(),
    ]);
    assert_eq!(code, 1);
}

#[test]
fn test_unparseable_file_is_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.py"), "def (\n").unwrap();
    fs::write(dir.path().join("clean.py"), "ok = 'fine'\n").unwrap();

    let (code, output) = run(vec![dir.path().to_string_lossy().into_owned()]);
    assert_eq!(code, 0);
    assert!(output.contains("warning:"), "missing warning in: {output}");
    assert!(output.contains("broken.py"));
}

#[test]
fn test_noqa_file_is_clean() {
    let dir = fixture_dir("bad = \"x\"  # noqa\n");
    let (code, output) = run(vec![dir.path().to_string_lossy().into_owned()]);
    assert_eq!(code, 0);
    assert!(output.contains("No quote inconsistencies"));
}

#[test]
fn test_help_exits_zero() {
    let (code, output) = run(vec!["--help".to_owned()]);
    assert_eq!(code, 0);
    assert!(output.contains("--string-quotes"));
}

#[test]
fn test_unknown_preference_is_rejected() {
    let dir = fixture_dir("bad = \"x\"\n");
    let (code, _) = run(vec![
        dir.path().to_string_lossy().into_owned(),
        "--string-quotes".to_owned(),
        "triple".to_owned(),
    ]);
    assert_eq!(code, 2);
}
