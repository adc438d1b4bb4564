//! The seam to the external narrative interpreter.
//!
//! The oracle never interprets a reading itself. It hands the hexagram
//! context and the user's question to an [`Interpreter`] and displays
//! whatever comes back.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use thiserror::Error;

use crate::query::compose_prompt;

/// Why an interpreter call failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterpretError {
    /// A transient failure; asking again may succeed.
    #[error("interpreter temporarily unavailable: {0}")]
    Retryable(String),

    /// A failure that will not go away by retrying.
    #[error("interpreter failed: {0}")]
    Terminal(String),
}

impl InterpretError {
    /// Whether the caller may retry the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Retryable(_))
    }
}

/// Something that turns a hexagram context plus a question into prose.
pub trait Interpreter {
    /// Short label used in logs and journal entries.
    fn name(&self) -> &str;

    /// Produce a narrative reading.
    fn interpret(&self, context: &str, question: &str) -> Result<String, InterpretError>;
}

/// Runs an external program, writing the composed prompt to its stdin and
/// reading the answer from its stdout.
///
/// The context and question are also exported as `HEXIVIUM_CONTEXT` and
/// `HEXIVIUM_QUESTION` for programs that prefer the environment.
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    program: OsString,
    args: Vec<OsString>,
    label: String,
}

impl CommandInterpreter {
    /// Interpreter backed by `program` with no arguments.
    pub fn new(program: impl Into<OsString>) -> Self {
        let program = program.into();
        let label = program.to_string_lossy().into_owned();
        Self {
            program,
            args: Vec::new(),
            label,
        }
    }

    /// Parse a whitespace-separated command line such as `llm -m small`.
    ///
    /// Returns `None` for a blank string.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let program = words.next()?;
        Some(Self::new(program).args(words))
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Interpreter for CommandInterpreter {
    fn name(&self) -> &str {
        &self.label
    }

    fn interpret(&self, context: &str, question: &str) -> Result<String, InterpretError> {
        let prompt = compose_prompt(context, question);
        tracing::debug!(program = %self.label, bytes = prompt.len(), "calling interpreter");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env("HEXIVIUM_CONTEXT", context)
            .env("HEXIVIUM_QUESTION", question)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| classify_io(&self.label, e))?;

        let writer = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || {
                // A program that ignores its input closes the pipe early.
                match stdin.write_all(prompt.as_bytes()) {
                    Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
                    _ => Ok(()),
                }
            })
        });

        let output = child
            .wait_with_output()
            .map_err(|e| classify_io(&self.label, e))?;

        if let Some(handle) = writer {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => return Err(classify_io(&self.label, e)),
                Err(_) => {
                    return Err(InterpretError::Terminal(format!(
                        "{}: stdin writer panicked",
                        self.label
                    )));
                }
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            tracing::warn!(program = %self.label, status = %output.status, "interpreter exited unsuccessfully");
            return Err(InterpretError::Terminal(if detail.is_empty() {
                format!("{} exited with {}", self.label, output.status)
            } else {
                format!("{} exited with {}: {detail}", self.label, output.status)
            }));
        }

        let answer = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if answer.is_empty() {
            return Err(InterpretError::Retryable(format!(
                "{} returned no output",
                self.label
            )));
        }
        tracing::debug!(program = %self.label, bytes = answer.len(), "interpreter answered");
        Ok(answer)
    }
}

fn classify_io(label: &str, err: io::Error) -> InterpretError {
    match err.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
            InterpretError::Retryable(format!("{label}: {err}"))
        }
        io::ErrorKind::NotFound => InterpretError::Terminal(format!("{label}: program not found")),
        _ => InterpretError::Terminal(format!("{label}: {err}")),
    }
}
