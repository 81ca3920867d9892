use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use divtest_core::{verify, LINE_COUNT, LINE_LEN, TABLE_LEN};

fn divtest() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_divtest"));
    cmd.env_remove("DIVTEST_RUN_SINK").env_remove("RUST_LOG");
    cmd
}

fn model() -> Output {
    Command::new(env!("CARGO_BIN_EXE_divtest-model"))
        .output()
        .expect("failed to run divtest-model")
}

fn expected() -> Vec<u8> {
    let mut out = Vec::new();
    divtest_core::run(&mut out);
    out
}

#[test]
fn model_prints_the_table() {
    let output = model();
    assert!(output.status.success());
    assert_eq!(output.stdout.len(), TABLE_LEN);
    assert_eq!(output.stdout.split(|&c| c == b'\n').count(), LINE_COUNT + 1);
    assert_eq!(output.stdout, expected());
    assert!(verify(&output.stdout).is_ok());

    let lines: Vec<&[u8]> = output.stdout.chunks(LINE_LEN).collect();
    assert_eq!(lines[0], b"00000000\n");
    assert_eq!(lines[32 * 32], b"7fffffff\n");
    assert_eq!(lines[31 * 32 + 31], b"00000000\n");
}

#[test]
fn model_is_deterministic() {
    assert_eq!(model().stdout, model().stdout);
}

#[test]
fn run_through_both_sinks() {
    for sink in ["console", "trap"] {
        let output = divtest()
            .args(["run", "--sink", sink])
            .output()
            .unwrap();
        assert!(output.status.success(), "sink {sink} failed");
        assert_eq!(output.stdout, expected(), "sink {sink} diverged");
    }
}

#[test]
fn run_sink_from_environment() {
    let output = divtest()
        .arg("run")
        .env("DIVTEST_RUN_SINK", "trap")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, expected());

    let output = divtest()
        .arg("run")
        .env("DIVTEST_RUN_SINK", "uart")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn run_rejects_unknown_sink_argument() {
    let output = divtest()
        .args(["run", "--sink", "uart"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn check_accepts_model_transcript() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&model().stdout).unwrap();

    let output = divtest()
        .arg("check")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with(": 1056 lines match\n"), "{stdout}");
}

#[test]
fn check_reports_first_divergence() {
    let mut transcript = expected();
    transcript[32 * 32 * LINE_LEN] = b'f';

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&transcript).unwrap();

    let output = divtest()
        .arg("check")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not match the quotient table"), "{stderr}");
    assert!(stderr.contains("line 1025, column 1"), "{stderr}");
}

#[test]
fn check_reads_stdin() {
    let mut child = divtest()
        .args(["check", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Truncated transcript.
    child
        .stdin
        .take()
        .unwrap()
        .write_all(&expected()[..LINE_LEN * 3])
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("3 complete lines"), "{stderr}");
}

#[test]
fn check_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = divtest()
        .arg("check")
        .arg(dir.path().join("absent.log"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to open"));
}
