//! Main application loop
//!
//! Drives a [`Case`] from any line-based input to any output, so the same
//! code serves the terminal and in-memory transcripts.

use super::{widgets, Theme, HELP_TEXT, LOGO};
use crate::data::Severity;
use crate::game::{scenario, Case, GameConfig, Step, Verdict};
use crate::Result;
use anyhow::Context;
use std::io::{BufRead, ErrorKind, Write};
use tracing::{info_span, warn};

/// Application state
pub struct App<R, W> {
    input: R,
    output: W,
    pub theme: Theme,
    pub config: GameConfig,
    input_closed: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        let theme = if config.color {
            Theme::default()
        } else {
            Theme::plain()
        };
        Self {
            input,
            output,
            theme,
            config,
            input_closed: false,
        }
    }

    /// Give back the output sink, e.g. to inspect a transcript
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play a case from the first room to the verdict
    pub fn run(&mut self, case: &mut Case) -> Result<Verdict> {
        let span = info_span!("case", id = %case.id);
        let _guard = span.enter();

        self.banner()?;
        self.explore(case)?;
        if let Some(exit) = case.exit() {
            let summary = widgets::exploration_summary(exit, &case.journal, &self.theme);
            self.emit(&[summary])?;
        }

        let clues = case.clues();
        let lines = widgets::clue_list(&clues, &case.journal, &self.theme);
        self.emit(&lines)?;

        let verdict = if case.ledger.is_empty() {
            case.accuse("")
        } else {
            let lines = widgets::suspect_roll(case.index.suspects(), &self.theme);
            self.emit(&lines)?;
            self.prompt("Who is the culprit? ")?;
            let accused = self.read_line()?.unwrap_or_default();
            case.accuse(&accused)
        };

        let lines = widgets::verdict_block(&verdict, &self.theme);
        self.emit(&lines)?;

        if self.config.json_report {
            let json = case.report().to_json().context("serialising case report")?;
            writeln!(self.output, "{}", json).context("writing case report")?;
        }
        self.output.flush().context("flushing output")?;
        Ok(verdict)
    }

    fn banner(&mut self) -> Result<()> {
        let logo = self.theme.bold(LOGO, self.theme.header);
        let title = self.theme.bold(scenario::TITLE, self.theme.accent);
        let lines = vec![
            logo,
            title,
            scenario::SYNOPSIS.to_string(),
            String::new(),
            HELP_TEXT.to_string(),
        ];
        self.emit(&lines)
    }

    /// Navigation loop: one arrival per room, one prompt per junction
    fn explore(&mut self, case: &mut Case) -> Result<()> {
        loop {
            let arrival = case.enter_room()?;
            let lines = widgets::arrival_lines(&arrival, &self.theme);
            self.emit(&lines)?;
            if case.exit().is_some() {
                return Ok(());
            }

            loop {
                let lines = widgets::exits_prompt(&arrival.exits, &self.theme);
                self.emit(&lines)?;
                self.prompt("> ")?;

                let Some(line) = self.read_line()? else {
                    case.end_of_input();
                    let note = self
                        .theme
                        .message(Severity::Info, "No more input. You leave the mansion.");
                    self.emit(&[note])?;
                    return Ok(());
                };

                match case.submit(&line)? {
                    Step::Moved(_) => break,
                    Step::Finished(_) => {
                        let note = self
                            .theme
                            .message(Severity::Info, "Exploration over. You leave the mansion...");
                        self.emit(&[note])?;
                        return Ok(());
                    }
                    Step::NoPassage(side) => {
                        let note = self.theme.message(
                            Severity::Warning,
                            &format!("There is no passage to the {} here. Try again.", side),
                        );
                        self.emit(&[note])?;
                    }
                    Step::Rejected(_) => {
                        let note = self
                            .theme
                            .message(Severity::Warning, "Invalid option. Try again.");
                        self.emit(&[note])?;
                    }
                }
            }
        }
    }

    /// Next input line without its terminator, or `None` once input is gone.
    ///
    /// Undecodable bytes come back as replacement characters so the caller
    /// rejects the line instead of failing. Hard read errors close the input.
    fn read_line(&mut self) -> Result<Option<String>> {
        if self.input_closed {
            return Ok(None);
        }
        let mut buf = Vec::new();
        loop {
            match self.input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    self.input_closed = true;
                    return Ok(None);
                }
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    return Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "input failed, treating as closed");
                    self.input_closed = true;
                    return Ok(None);
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text).context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;
        Ok(())
    }

    fn emit(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line).context("writing to console")?;
        }
        Ok(())
    }
}
