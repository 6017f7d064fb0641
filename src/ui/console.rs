//! Line-oriented console: the only place the game touches stdin/stdout.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;
use crossterm::ExecutableCommand;

use crate::core::error::{GameError, Result};

pub trait Console {
    /// Shows `prompt` and reads one line without its line ending.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn write_line(&mut self, line: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    /// Cosmetic pacing delay, already scaled by the caller's base seconds.
    fn pause(&mut self, seconds: f64);

    /// Whether ANSI styling should be emitted.
    fn styled(&self) -> bool {
        false
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}

/// The real terminal.
pub struct TerminalConsole {
    speed: f64,
    styled: bool,
}

impl TerminalConsole {
    /// `speed` multiplies every pause; 0 disables them.
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            styled: io::stdout().is_tty(),
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(io::stdout(), "{line}")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if !self.styled {
            return Ok(());
        }
        let mut stdout = io::stdout();
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;
        Ok(())
    }

    fn pause(&mut self, seconds: f64) {
        let scaled = seconds * self.speed;
        if scaled > 0.0 {
            thread::sleep(Duration::from_secs_f64(scaled));
        }
    }

    fn styled(&self) -> bool {
        self.styled
    }
}

/// Console fed from a script, recording everything shown. Used by tests
/// and for replaying runs headless.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn push_input(&mut self, input: &str) {
        self.inputs.push_back(input.to_string());
    }

    /// Lines written so far, prompts included.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let input = self.inputs.pop_front().ok_or(GameError::InputClosed)?;
        self.output.push(format!("{prompt}{input}"));
        Ok(input)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn pause(&mut self, _seconds: f64) {}
}
