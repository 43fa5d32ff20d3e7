//! End-to-end runs of the `strval` binary
use std::io::Write;
use std::process::{Command, Output, Stdio};

use string_validators::patterns;

fn run_strval(args: &[&str], stdin: Option<&str>) -> Output {
    // Isolated from any project config or user profiles on the host
    let home = tempfile::tempdir().expect("tempdir");

    let mut child = Command::new(env!("CARGO_BIN_EXE_strval"))
        .args(args)
        .current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn strval");

    {
        let mut child_stdin = child.stdin.take().expect("Child stdin should be available");
        if let Some(input) = stdin {
            child_stdin
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for strval")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout should be UTF-8")
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn check_values_reports_each_value() {
    let output = run_strval(&["check", "phone", "13800138000", "12345678901"], None);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec!["1\tvalid\t13800138000", "2\tinvalid\t12345678901"]
    );
}

#[test]
fn check_all_valid_exits_zero() {
    let output = run_strval(&["check", "lower-case", "abc", "xyz"], None);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["1\tvalid\tabc", "2\tvalid\txyz"]);
}

#[test]
fn check_stdin_skips_blank_lines_and_keeps_line_numbers() {
    let output = run_strval(&["check", "lower-case"], Some("abc\n\nABC\n"));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec!["1\tvalid\tabc", "3\tinvalid\tABC"]
    );
}

#[test]
fn check_json_rejects_non_string_elements() {
    let output = run_strval(&["check-json", "email", "-"], Some(r#"["a@b.com", 5]"#));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec!["1\tvalid\ta@b.com", "2\tinvalid\t5"]
    );
}

#[test]
fn check_json_report_is_machine_readable() {
    let output = run_strval(&["check", "bank", "622202123456789012", "--json"], None);

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["format"], "bank");
    assert_eq!(report["entries"][0]["valid"], true);
}

#[test]
fn pattern_prints_the_rule_source() {
    let output = run_strval(&["pattern", "email"], None);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec![patterns::EMAIL_PATTERN]);
}

#[test]
fn formats_marks_profile_driven_entries() {
    let output = run_strval(&["formats"], None);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 10);
    assert!(lines.contains(&"phone\tprofile".to_string()));
    assert!(lines.contains(&"url\tprofile".to_string()));
    assert!(lines.contains(&"email".to_string()));
}

#[test]
fn unknown_format_is_an_error() {
    let output = run_strval(&["check", "zipcode", "12345"], None);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
