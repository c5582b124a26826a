//! Integration tests for the `pt` binary.

use std::io::Write as _;
use std::process::{Command, Stdio};

const SAMPLE_LOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/testdata/sample.log");

fn pt() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pt"))
}

#[test]
fn test_report_from_file() {
    let output = pt().arg(SAMPLE_LOG).output().expect("failed to run pt");
    assert!(output.status.success(), "pt should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Units come out by total wall time, descending.
    assert!(
        stdout.starts_with("0 : src/CMakeFiles/core.dir/parser.cpp.o"),
        "slowest unit should lead: {stdout}"
    );
    assert!(stdout.contains("1 : src/CMakeFiles/core.dir/lexer.cpp.o"));
    assert!(stdout.contains("2 : src/CMakeFiles/core.dir/driver.cpp.o"));
    assert!(stdout.contains("phase parsing"));
    assert!(stdout.contains("PHASES SUMMARY"), "summary should be appended");
    // The unit that never reached a TOTAL line must not appear.
    assert!(!stdout.contains("codegen.cpp.o"));
}

#[test]
fn test_report_from_stdin() {
    let mut child = pt()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn pt");

    let sample = std::fs::read_to_string(SAMPLE_LOG).unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(sample.as_bytes())
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PHASES SUMMARY"));
}

#[test]
fn test_limit_suppresses_summary() {
    let output = pt()
        .arg(SAMPLE_LOG)
        .args(["-l", "1"])
        .output()
        .expect("failed to run pt");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 : src/CMakeFiles/core.dir/parser.cpp.o"));
    assert!(!stdout.contains("lexer.cpp.o"));
    assert!(!stdout.contains("PHASES SUMMARY"));
}

#[test]
fn test_sort_by_path_ascending() {
    let output = pt()
        .arg(SAMPLE_LOG)
        .args(["-s", "path", "--asc"])
        .output()
        .expect("failed to run pt");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("0 : src/CMakeFiles/core.dir/driver.cpp.o"),
        "lexicographically first path should lead: {stdout}"
    );
}

#[test]
fn test_filters_drop_units_and_phases() {
    let output = pt()
        .arg(SAMPLE_LOG)
        .args(["--include", "lexer", "--exclude-phase", "setup"])
        .output()
        .expect("failed to run pt");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lexer.cpp.o"));
    assert!(!stdout.contains("parser.cpp.o"));
    assert!(!stdout.contains("phase setup"));
}

#[test]
fn test_diff_mode_renders_both_sides() {
    let dir = tempfile::tempdir().unwrap();
    let before = dir.path().join("before.log");
    let after = dir.path().join("after.log");
    std::fs::write(
        &before,
        "\
[ 50%] Building CXX object x.cpp.o
Execution times (seconds)
 phase parsing           :   0.80 (57%) usr   0.20 (67%) sys   1.10 (52%) wall   70234 kB (71%) ggc
 TOTAL                 :   1.40             0.30            10.00              98582 kB
",
    )
    .unwrap();
    std::fs::write(
        &after,
        "\
[ 50%] Building CXX object x.cpp.o
Execution times (seconds)
 phase parsing           :   0.90 (60%) usr   0.25 (70%) sys   1.40 (55%) wall   71034 kB (72%) ggc
 TOTAL                 :   1.60             0.35            12.00              99120 kB
[ 60%] Building CXX object y.cpp.o
Execution times (seconds)
 phase parsing           :   0.20 (50%) usr   0.05 (40%) sys   0.30 (48%) wall   20020 kB (55%) ggc
 TOTAL                 :   0.40             0.10             3.00              28220 kB
",
    )
    .unwrap();

    let output = pt()
        .arg(&before)
        .arg(&after)
        .output()
        .expect("failed to run pt");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("x.cpp.o"));
    assert!(stdout.contains("y.cpp.o"), "unit new in the second log: {stdout}");
    assert!(stdout.contains("--->"));
    assert!(stdout.contains("  TOTAL :   10.0 s. =  0.2 m.  --->    12.0 s. =  0.2 m."));
    // y.cpp.o has no counterpart in the first log; its left total is zero.
    assert!(stdout.contains("  TOTAL :    0.0 s. =  0.0 m.  --->     3.0 s. =  0.1 m."));
    assert!(stdout.contains("PHASES SUMMARY"));
}

#[test]
fn test_missing_file_fails() {
    let output = pt()
        .arg("/nonexistent/build.log")
        .output()
        .expect("failed to run pt");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to read log file"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_invalid_unit_line_pattern_fails() {
    let output = pt()
        .arg(SAMPLE_LOG)
        .args(["--unit-line", "no capture group"])
        .output()
        .expect("failed to run pt");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("capture group"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_empty_input_prints_summary_only() {
    let mut child = pt()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn pt");

    child.stdin.take();

    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success(), "empty input is not an error");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("PHASES SUMMARY"));
}
