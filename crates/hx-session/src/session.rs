//! Reading session management.
//!
//! `Session` owns a [`SessionState`] and the dataset for one pass. It binds
//! the toss action, gates the question on completion, hands the reading to
//! an interpreter, and dispatches the interactive commands.

use chrono::Utc;
use hx_core::{HexagramDataset, HexagramLine, render};
use hx_oracle::{
    ChangingLinesInfo, InterpretError, Interpreter, Phase, Reading, TossOutcome, compose_prompt,
    format_query,
};

use crate::error::{SessionError, SessionResult};
use crate::journal::{Journal, JournalEntry};
use crate::state::SessionState;

/// Result of [`Session::set_question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    /// Stored with the session.
    Accepted,
    /// Ignored because the reading is not complete yet.
    Deferred,
}

/// Result of [`Session::consult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultOutcome {
    /// The interpreter answered.
    Answered(String),
    /// The interpreter failed; the reading is untouched and may be retried.
    Failed {
        /// Generic notice for the user.
        notice: String,
        /// Whether retrying may help.
        retryable: bool,
    },
    /// The reading is not complete yet.
    NotReady,
}

/// One reading session.
pub struct Session {
    state: SessionState,
    dataset: HexagramDataset,
    interpreter: Option<Box<dyn Interpreter>>,
}

impl Session {
    /// Wrap a loaded or fresh state.
    pub fn new(state: SessionState, dataset: HexagramDataset) -> Self {
        Self {
            state,
            dataset,
            interpreter: None,
        }
    }

    /// Attach the interpreter used by the `consult` command.
    pub fn with_interpreter(mut self, interpreter: Box<dyn Interpreter>) -> Self {
        self.interpreter = Some(interpreter);
        self
    }

    /// The persisted state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Give back the state for saving.
    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// The dataset in use.
    pub fn dataset(&self) -> &HexagramDataset {
        &self.dataset
    }

    /// The reading.
    pub fn reading(&self) -> &Reading {
        &self.state.reading
    }

    /// The journal.
    pub fn journal(&self) -> &Journal {
        &self.state.journal
    }

    /// Whether the toss trigger is live.
    pub fn toss_enabled(&self) -> bool {
        !self.state.reading.is_complete()
    }

    /// Cast the next line with three simulated coins.
    pub fn toss(&mut self) -> TossOutcome {
        let mut rng = self.state.toss_rng();
        let outcome = self.state.reading.toss(&mut rng);
        self.after_toss(outcome);
        outcome
    }

    /// Record a line cast outside the program.
    pub fn record(&mut self, line: HexagramLine) -> TossOutcome {
        let outcome = self.state.reading.record(line);
        self.after_toss(outcome);
        outcome
    }

    fn after_toss(&mut self, outcome: TossOutcome) {
        let TossOutcome::Accepted {
            line,
            coins,
            position,
        } = outcome
        else {
            return;
        };
        tracing::info!(position, value = line.value(), "line cast");
        self.state.journal.append(JournalEntry::Toss {
            position,
            value: line.value(),
            coins: coins.map(|c| c.to_string()),
            timestamp: Utc::now(),
        });
        if self.state.reading.is_complete() {
            let info = self.hexagram_info();
            self.state.journal.append(JournalEntry::HexagramComplete {
                inner: info.inner.title(),
                outer: info.outer.title(),
                timestamp: Utc::now(),
            });
        }
    }

    /// Names, numbers, and changing lines of both hexagrams.
    pub fn hexagram_info(&self) -> ChangingLinesInfo {
        self.state.reading.interpret_changing_lines(&self.dataset)
    }

    /// Record the user's question. Ignored until the reading is complete.
    ///
    /// A blank question clears any stored one.
    pub fn set_question(&mut self, text: &str) -> QuestionOutcome {
        if !self.state.reading.is_complete() {
            tracing::warn!(
                toss_count = self.state.reading.toss_count(),
                "question ignored: reading not complete"
            );
            return QuestionOutcome::Deferred;
        }
        let text = text.trim();
        if text.is_empty() {
            self.state.user_question = None;
        } else {
            self.state.user_question = Some(text.to_string());
            self.state.journal.append(JournalEntry::Question {
                text: text.to_string(),
                timestamp: Utc::now(),
            });
        }
        QuestionOutcome::Accepted
    }

    /// The hexagram context paragraph for the interpreter.
    ///
    /// The question travels to the interpreter on its own, so it is left
    /// out of this paragraph.
    pub fn query(&self) -> String {
        format_query(&self.hexagram_info(), "")
    }

    /// The full prompt an interpreter would receive, once complete.
    pub fn prompt(&self) -> Option<String> {
        self.state
            .reading
            .is_complete()
            .then(|| compose_prompt(&self.query(), self.state.question()))
    }

    /// Ask an interpreter for a narrative reading.
    ///
    /// A failure is journaled as a generic notice; the reading stays as it
    /// was so the call can be repeated.
    pub fn consult(&mut self, interpreter: &dyn Interpreter) -> ConsultOutcome {
        if !self.state.reading.is_complete() {
            return ConsultOutcome::NotReady;
        }
        let context = self.query();
        let question = self.state.question().to_string();
        tracing::info!(interpreter = interpreter.name(), "consulting interpreter");
        match interpreter.interpret(&context, &question) {
            Ok(answer) => {
                self.state.journal.append(JournalEntry::Interpretation {
                    interpreter: interpreter.name().to_string(),
                    question,
                    answer: answer.clone(),
                    timestamp: Utc::now(),
                });
                ConsultOutcome::Answered(answer)
            }
            Err(err) => {
                tracing::warn!(interpreter = interpreter.name(), error = %err, "interpreter failed");
                let retryable = err.is_retryable();
                let notice = failure_notice(&err).to_string();
                self.state.journal.append(JournalEntry::InterpreterFailure {
                    interpreter: interpreter.name().to_string(),
                    notice: notice.clone(),
                    retryable,
                    timestamp: Utc::now(),
                });
                ConsultOutcome::Failed { notice, retryable }
            }
        }
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "toss" | "t" => self.do_toss(rest),
            "ask" => self.do_ask(rest),
            "consult" => Ok(self.do_consult()),
            "show" => Ok(self.render_reading()),
            "lines" => Ok(self.do_lines()),
            "note" => self.do_note(rest),
            "journal" => Ok(self.do_journal_show()),
            "export" => self.do_journal_export(rest),
            "status" => Ok(self.status_report()),
            "help" | "?" => Ok(help_text().to_string()),
            "quit" | "q" | "exit" => Ok("Goodbye!".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    fn do_toss(&mut self, rest: &str) -> SessionResult<String> {
        let outcome = if rest.is_empty() {
            self.toss()
        } else {
            let value: u8 = rest.parse().map_err(|_| {
                SessionError::InvalidChoice(format!("'{rest}' is not a line value (6-9)"))
            })?;
            self.record(HexagramLine::from_value(value)?)
        };
        Ok(self.describe_toss(outcome))
    }

    /// One-line description of a toss, plus the hexagram once complete.
    pub fn describe_toss(&self, outcome: TossOutcome) -> String {
        match outcome {
            TossOutcome::Rejected => {
                "The hexagram is complete. Start a new session for another reading.".to_string()
            }
            TossOutcome::Accepted {
                line,
                coins,
                position,
            } => {
                let mut out = match coins {
                    Some(coins) => format!("Line {position}: {coins} ({})", line.name()),
                    None => format!("Line {position}: {} ({})", line.value(), line.name()),
                };
                if self.state.reading.is_complete() {
                    out.push_str("\n\n");
                    out.push_str(&self.render_reading());
                }
                out
            }
        }
    }

    fn do_ask(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidChoice(
                "usage: ask <question>".to_string(),
            ));
        }
        Ok(match self.set_question(rest) {
            QuestionOutcome::Accepted => format!("Question recorded: {}", rest.trim()),
            QuestionOutcome::Deferred => format!(
                "Finish the hexagram first ({} of 6 lines cast).",
                self.state.reading.toss_count()
            ),
        })
    }

    fn do_consult(&mut self) -> String {
        let Some(interpreter) = self.interpreter.take() else {
            return match self.prompt() {
                Some(prompt) => {
                    format!("No interpreter configured. This is the prompt it would receive:\n\n{prompt}")
                }
                None => not_ready_text(self.state.reading.toss_count()),
            };
        };
        let outcome = self.consult(interpreter.as_ref());
        self.interpreter = Some(interpreter);
        match outcome {
            ConsultOutcome::Answered(answer) => answer,
            ConsultOutcome::Failed { notice, .. } => notice,
            ConsultOutcome::NotReady => not_ready_text(self.state.reading.toss_count()),
        }
    }

    /// The three-column hexagram drawing with names and changing lines.
    pub fn render_reading(&self) -> String {
        let reading = &self.state.reading;
        if reading.phase() == Phase::Empty {
            return "No lines cast yet.".to_string();
        }
        let mut out = render::render_columns(reading.lines(), reading.inner(), reading.outer());
        if reading.is_complete() {
            let info = self.hexagram_info();
            out.push('\n');
            out.push_str(&format!("Inner: {}\n", info.inner.title()));
            out.push_str(&format!("Outer: {}\n", info.outer.title()));
            let summary = info.summary();
            if summary.is_empty() {
                out.push_str("\nNo changing lines.\n");
            } else {
                out.push('\n');
                for line in summary {
                    out.push_str(&format!("{line}\n"));
                }
            }
        }
        out.trim_end().to_string()
    }

    fn do_lines(&self) -> String {
        let lines = self.state.reading.lines();
        if lines.is_empty() {
            return "No lines cast yet.".to_string();
        }
        let values: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        format!("Lines (bottom to top): {}", values.join(" "))
    }

    fn do_note(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidChoice("usage: note <text>".to_string()));
        }
        self.state.journal.append(JournalEntry::Note {
            text: rest.to_string(),
            timestamp: Utc::now(),
        });
        Ok("Note recorded.".to_string())
    }

    fn do_journal_show(&self) -> String {
        let journal = &self.state.journal;
        if journal.is_empty() {
            return "Journal is empty.".to_string();
        }
        let recent = journal.tail(10);
        let mut out = format!(
            "Journal ({} entries, showing last {}):\n\n",
            journal.len(),
            recent.len()
        );
        out.push_str(&recent.export_text());
        out.trim_end().to_string()
    }

    fn do_journal_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.state.journal.export_markdown()),
            "text" | "txt" => Ok(self.state.journal.export_text()),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    /// Summary of where the session stands.
    pub fn status_report(&self) -> String {
        let reading = &self.state.reading;
        let mut out = format!("Session: {}\n", self.state.id);
        out.push_str(&format!(
            "Reading: {} ({} of 6 lines)\n",
            reading.phase(),
            reading.toss_count()
        ));
        if reading.is_complete() {
            let info = self.hexagram_info();
            out.push_str(&format!(
                "Hexagrams: {} -> {}\n",
                info.inner.title(),
                info.outer.title()
            ));
        }
        match &self.state.user_question {
            Some(q) => out.push_str(&format!("Question: {q}\n")),
            None => out.push_str("Question: none\n"),
        }
        out.push_str(&format!("Journal: {} entries", self.state.journal.len()));
        out
    }
}

fn not_ready_text(toss_count: usize) -> String {
    format!("The hexagram is not complete yet ({toss_count} of 6 lines cast).")
}

fn failure_notice(err: &InterpretError) -> &'static str {
    match err {
        InterpretError::Retryable(_) => "The oracle is silent right now. Try again.",
        InterpretError::Terminal(_) => {
            "The oracle could not be reached. Your reading is saved; check the interpreter and try again."
        }
    }
}

/// Help for the interactive loop.
pub fn help_text() -> &'static str {
    "\
I-Ching Commands:
  toss [6-9]              Cast the next line (or record one you cast yourself)
  ask <question>          Record your question (after six lines)
  consult                 Ask the interpreter for a reading
  show                    Draw both hexagrams and the changing lines
  lines                   List the traditional line values
  note <text>             Add a journal note
  journal                 Show recent journal entries
  export [markdown|text]  Export the full journal
  status                  Show session status
  help                    Show this help
  quit                    Exit"
}
