// src/services/session_manager.rs
//! The interactive read loop.
//!
//! A session starts `Running` after the greeting and ends `Terminated` when a line
//! contains the exit token or the input runs out. The exit test is a lowercase
//! substring match, so "goodbye" or "maybe later, bye" also end the session.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::services::metrics_manager::{MetricsData, MetricsManager};
use crate::state::ChatBot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    ExitToken,
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub exit_reason: ExitReason,
    pub metrics: MetricsData,
}

pub fn is_exit(input: &str, exit_token: &str) -> bool {
    input.to_lowercase().contains(&exit_token.to_lowercase())
}

pub struct Session<'a, R, W> {
    bot: &'a ChatBot,
    input: R,
    output: W,
    state: SessionState,
    metrics: MetricsManager,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(bot: &'a ChatBot, input: R, output: W) -> Self {
        Self {
            bot,
            input,
            output,
            state: SessionState::Running,
            metrics: MetricsManager::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Print the greeting and handle lines until the session terminates.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let bot = self.bot;
        let config = bot.config();
        writeln!(self.output, "{}: {}", config.bot_name, config.greeting)?;

        let mut line = Vec::new();
        let exit_reason = loop {
            if let Some(reason) = self.step(&mut line)? {
                break reason;
            }
        };

        writeln!(self.output, "{}: {}", config.bot_name, config.farewell)?;
        self.output.flush()?;
        self.state = SessionState::Terminated;

        tracing::debug!(?exit_reason, "session terminated");
        Ok(SessionSummary {
            exit_reason,
            metrics: self.metrics.get_metrics(),
        })
    }

    /// One prompt/read/reply turn. Returns the exit reason once the session should end.
    fn step(&mut self, line: &mut Vec<u8>) -> Result<Option<ExitReason>> {
        let bot = self.bot;
        let config = bot.config();
        write!(self.output, "{}", config.user_prompt)?;
        self.output.flush()?;

        line.clear();
        if self.input.read_until(b'\n', line)? == 0 {
            // Keep the farewell off the prompt line.
            writeln!(self.output)?;
            return Ok(Some(ExitReason::EndOfInput));
        }

        // Invalid UTF-8 is replaced rather than ending the session.
        let decoded = String::from_utf8_lossy(line);
        let user_text = decoded.trim_end_matches(['\r', '\n']);
        if is_exit(user_text, &config.exit_token) {
            return Ok(Some(ExitReason::ExitToken));
        }

        let reply = bot.reply(user_text);
        self.metrics.record(&reply);
        writeln!(self.output, "{}: {}", config.bot_name, reply.text)?;
        Ok(None)
    }
}

pub fn run_session<R: BufRead, W: Write>(
    bot: &ChatBot,
    input: R,
    output: W,
) -> Result<SessionSummary> {
    let mut session = Session::new(bot, input, output);
    session.run()
}
