//! AI agent CLI backends.
//!
//! Each backend wraps one agent CLI (`claude`, `codex`, `gemini`) and runs it
//! non-interactively as a child process with the prompt as an argument. The
//! agent only processes text, so no permission bypass flags are passed.

mod claude;
mod codex;
mod gemini;

pub use claude::ClaudeBackend;
pub use codex::CodexBackend;
pub use gemini::GeminiBackend;

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors from invoking an agent CLI.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Agent not available: {0}")]
    NotAvailable(String),

    #[error("Failed to run agent: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Agent timed out after {0:?}")]
    Timeout(Duration),

    #[error("Agent exited with code {code}: {stderr}")]
    ExitCode { code: i32, stderr: String },

    #[error("Agent rate limited: {0}")]
    RateLimited(String),
}

/// An agent CLI that turns a prompt into a text answer.
pub trait AgentBackend: Send + Sync {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Whether the CLI can be found on `PATH`.
    fn is_available(&self) -> bool;

    /// Run the agent with `prompt` and return its stdout.
    fn invoke(&self, prompt: &str, timeout: Duration) -> BackendResult<String>;
}

/// Which agent CLI to use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Claude,
    Codex,
    #[default]
    Gemini,
}

impl BackendKind {
    /// Instantiate the backend.
    pub fn create(self) -> Box<dyn AgentBackend> {
        match self {
            BackendKind::Claude => Box::new(ClaudeBackend::new()),
            BackendKind::Codex => Box::new(CodexBackend::new()),
            BackendKind::Gemini => Box::new(GeminiBackend::new()),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Claude => write!(f, "claude"),
            BackendKind::Codex => write!(f, "codex"),
            BackendKind::Gemini => write!(f, "gemini"),
        }
    }
}

/// Check whether `command` resolves to a file on `PATH`.
pub fn command_exists(command: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| is_executable(&dir.join(command)))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Look for a rate limit message in agent stderr.
///
/// Returns the first line mentioning the limit.
pub fn parse_rate_limit_info(stderr: &str) -> Option<String> {
    const PATTERNS: &[&str] = &["rate limit", "rate_limit", "too many requests", "429"];

    stderr
        .lines()
        .find(|line| {
            let lower = line.to_lowercase();
            PATTERNS.iter().any(|p| lower.contains(p))
        })
        .map(|line| line.trim().to_string())
}

/// Spawn `program` with `args` plus the prompt and collect its output.
pub(crate) fn run_agent(
    program: &str,
    args: &[&str],
    prompt: &str,
    timeout: Duration,
) -> BackendResult<String> {
    let mut child = Command::new(program)
        .args(args)
        .arg(prompt)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let output = match wait_with_timeout(&mut child, timeout) {
        Ok(output) => output,
        Err(_) => {
            // Kill the process if timeout
            let _ = child.kill();
            let _ = child.wait();
            return Err(BackendError::Timeout(timeout));
        }
    };

    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).to_string());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if let Some(info) = parse_rate_limit_info(&stderr) {
        return Err(BackendError::RateLimited(info));
    }

    Err(BackendError::ExitCode {
        code: output.status.code().unwrap_or(-1),
        stderr,
    })
}

struct AgentOutput {
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

/// Wait for child process with timeout.
///
/// std::process has no native timeout, so this polls `try_wait`. Pipes are
/// drained on helper threads so a chatty agent cannot fill them and stall.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> std::io::Result<AgentOutput> {
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let start = Instant::now();
    let poll_interval = Duration::from_millis(100);

    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if start.elapsed() >= timeout {
            return Err(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "Process timed out",
            ));
        }
        thread::sleep(poll_interval);
    };

    let collect = |handle: Option<thread::JoinHandle<Vec<u8>>>| {
        handle.and_then(|h| h.join().ok()).unwrap_or_default()
    };

    Ok(AgentOutput {
        status,
        stdout: collect(stdout),
        stderr: collect(stderr),
    })
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf).ok();
        buf
    })
}
