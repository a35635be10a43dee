//! Shared helpers for running the `semrange` binary in integration tests.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Captured result of one binary invocation.
pub(crate) struct Run {
    pub output: Output,
}

impl Run {
    pub(crate) fn success(&self) -> bool {
        self.output.status.success()
    }

    pub(crate) fn stdout_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.output.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Interval column of every text line.
    #[allow(dead_code)] // not every test binary inspects text output
    pub(crate) fn intervals(&self) -> Vec<String> {
        self.stdout_lines()
            .iter()
            .map(|line| line.split('\t').nth(1).unwrap_or_default().to_string())
            .collect()
    }

    /// Every stdout line parsed as a JSON report.
    #[allow(dead_code)]
    pub(crate) fn json_reports(&self) -> Vec<serde_json::Value> {
        self.stdout_lines()
            .iter()
            .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
            .collect()
    }
}

/// Runs the binary with `args`, feeding `stdin` when given.
pub(crate) fn semrange(args: &[&str], stdin: Option<&str>) -> Run {
    let mut child = Command::new(env!("CARGO_BIN_EXE_semrange"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn semrange binary");

    {
        let mut pipe = child.stdin.take().expect("Failed to capture stdin");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for semrange");
    Run { output }
}
