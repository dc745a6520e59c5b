//! Code execution in a separate interpreter process.
//!
//! Replies can carry runnable fenced blocks. Running one must never take the
//! host down with it, so the code goes to a child process with a wall-clock
//! timeout and a cap on captured output. Faults come back as `Error:` lines
//! in the captured text instead of surfacing as typed failures.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::CatseekError;

pub const DEFAULT_INTERPRETER: &str = "python3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 64 * 1024;

const PROBE_TIMEOUT_SECS: u64 = 2;

/// Runs untrusted snippets in a child interpreter.
///
/// The default interpreter is `python3 -I -`: isolated mode ignores
/// `PYTHON*` environment variables and the user site directory, and `-`
/// makes it read the program from stdin.
#[derive(Debug, Clone)]
pub struct SandboxRunner {
    interpreter: String,
    args: Vec<String>,
    timeout: Duration,
    max_output_bytes: usize,
}

impl SandboxRunner {
    pub fn new() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            args: vec!["-I".to_string(), "-".to_string()],
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }

    /// Replaces the interpreter command line. The interpreter must read the
    /// program text from stdin.
    pub fn with_interpreter(mut self, interpreter: impl Into<String>, args: Vec<String>) -> Self {
        self.interpreter = interpreter.into();
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_output_bytes(mut self, max_output_bytes: usize) -> Self {
        self.max_output_bytes = max_output_bytes;
        self
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Checks that the configured interpreter answers `--version`.
    ///
    /// Callers treat failure as a degraded state, not a startup error: the
    /// chat stays usable with running disabled.
    pub async fn probe(&self) -> Result<String, CatseekError> {
        let mut command = Command::new(&self.interpreter);
        command
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let output = tokio::time::timeout(Duration::from_secs(PROBE_TIMEOUT_SECS), command.output())
            .await
            .map_err(|_| {
                CatseekError::Probe(format!("'{}' did not answer in time", self.interpreter))
            })??;
        if !output.status.success() {
            return Err(CatseekError::Probe(format!(
                "'{}' exited with {}",
                self.interpreter, output.status
            )));
        }
        // python3 reports on stdout; some interpreters use stderr
        let text = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr)
        } else {
            String::from_utf8_lossy(&output.stdout)
        };
        match text.lines().find(|line| !line.trim().is_empty()) {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(CatseekError::Probe(format!(
                "'{}' reported no version",
                self.interpreter
            ))),
        }
    }

    /// Executes `code` and returns the combined stdout/stderr text.
    ///
    /// Total: spawn failures, timeouts, and non-zero exits all end up as
    /// `Error:` lines in the returned text, never as panics or errors.
    pub async fn run(&self, code: &str) -> String {
        match self.try_run(code).await {
            Ok(text) => text,
            Err(err) => format!("Error: {err}\n"),
        }
    }

    async fn try_run(&self, code: &str) -> io::Result<String> {
        let mut command = Command::new(&self.interpreter);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let mut child = command.spawn().map_err(|err| {
            io::Error::new(
                err.kind(),
                format!("failed to launch '{}': {err}", self.interpreter),
            )
        })?;
        if let Some(mut stdin) = child.stdin.take() {
            // A child that exits before reading produces EPIPE here; its own
            // output is the more useful signal, so the write is best-effort.
            stdin.write_all(code.as_bytes()).await.ok();
        }
        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => Ok(self.render(output?)),
            // kill_on_drop reaps the abandoned child
            Err(_) => Ok(format!("Error: timed out after {:?}\n", self.timeout)),
        }
    }

    fn render(&self, output: std::process::Output) -> String {
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        if !output.status.success() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            match output.status.code() {
                Some(code) => text.push_str(&format!("Error: exit code {code}\n")),
                None => text.push_str("Error: terminated by signal\n"),
            }
        }
        truncate_output(text, self.max_output_bytes)
    }
}

impl Default for SandboxRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_output(mut text: String, limit: usize) -> String {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text.push_str("\n… [output truncated]");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_runner() -> SandboxRunner {
        SandboxRunner::new().with_interpreter("sh", vec!["-s".to_string()])
    }

    #[tokio::test]
    async fn captures_stdout() {
        let output = shell_runner().run("echo hi").await;
        assert_eq!(output, "hi\n");
    }

    #[tokio::test]
    async fn combines_stdout_and_stderr() {
        let output = shell_runner().run("echo out; echo err 1>&2").await;
        assert!(output.contains("out"));
        assert!(output.contains("err"));
    }

    #[tokio::test]
    async fn nonzero_exit_is_reported_inline() {
        let output = shell_runner().run("exit 3").await;
        assert!(output.contains("Error: exit code 3"));
    }

    #[tokio::test]
    async fn long_running_code_times_out() {
        let runner = shell_runner().with_timeout(Duration::from_millis(200));
        let output = runner.run("sleep 5").await;
        assert!(output.contains("Error"));
        assert!(output.contains("timed out"));
    }

    #[tokio::test]
    async fn output_is_capped() {
        let runner = shell_runner().with_max_output_bytes(64);
        let code = "i=0; while [ $i -lt 100 ]; do echo aaaaaaaaaa; i=$((i+1)); done";
        let output = runner.run(code).await;
        assert!(output.len() < 128);
        assert!(output.contains("[output truncated]"));
    }

    #[tokio::test]
    async fn missing_interpreter_becomes_error_text() {
        let runner = SandboxRunner::new().with_interpreter("definitely-not-a-real-binary", vec![]);
        let output = runner.run("echo hi").await;
        assert!(output.starts_with("Error:"));
        assert!(output.contains("definitely-not-a-real-binary"));
    }

    #[tokio::test]
    async fn probe_fails_for_missing_interpreter() {
        let runner = SandboxRunner::new().with_interpreter("definitely-not-a-real-binary", vec![]);
        assert!(runner.probe().await.is_err());
    }

    #[tokio::test]
    async fn python_faults_stay_inside_the_boundary() {
        let runner = SandboxRunner::new();
        if runner.probe().await.is_err() {
            eprintln!("python3 not available; skipping");
            return;
        }
        let output = runner.run("print(1+1)").await;
        assert!(output.contains('2'));
        let output = runner.run("1/0").await;
        assert!(output.contains("Error"));
    }

    #[tokio::test]
    async fn probe_reports_a_version_line() {
        let runner = SandboxRunner::new();
        match runner.probe().await {
            Ok(version) => assert!(version.contains("Python")),
            Err(_) => eprintln!("python3 not available; skipping"),
        }
    }
}
