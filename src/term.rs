use crate::board::Board;
use crate::game::{Display, KeyInput};
use crate::TermInt;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};

/// Reads at most one key per call without waiting for input.
pub struct Keyboard;

impl KeyInput for Keyboard {
    fn poll_key(&mut self) -> Result<Option<char>> {
        if !poll(Duration::from_millis(0)).context("Error polling keyboard")? {
            return Ok(None);
        }

        match read().context("Error reading keyboard")? {
            // Raw mode swallows the signal, so Ctrl+C shows up as a key
            Event::Key(KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }) => Ok(Some('x')),
            Event::Key(KeyEvent { code: KeyCode::Char(ch), modifiers: _ }) => Ok(Some(ch)),
            _ => Ok(None),
        }
    }
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.set_raw_mode(true)?;
        self.set_cursor_visibility(false)
    }

    /// Runs every step even if an earlier one fails, then reports the first error.
    pub fn restore(&mut self) -> Result<()> {
        let raw = self.set_raw_mode(false);
        let shown = self.set_cursor_visibility(true);
        let screen = execute!(self.stdout, LeaveAlternateScreen).context("Error leaving alt screen");
        let clear = execute!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
            .context("Error clearing.");

        first_error(vec![raw, shown, screen, clear])
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set_raw_mode(&self, option: bool) -> Result<()> {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.context("Error setting raw mode.")
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<()> {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.context("Error setting cursor visibility.")
    }
}

/// Every step has already run by the time the results are collected.
fn first_error(results: Vec<Result<()>>) -> Result<()> {
    results.into_iter().collect()
}

impl Display for TermManager {
    fn draw(&mut self, board: &Board) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing.")?;

        // Raw mode does not return the carriage on '\n', so every row gets its own move
        for (y, row) in board.rows().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as TermInt), style::Print(row)).context("Error drawing board.")?;
        }

        self.stdout.flush().context("Error flushing.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn teardown_reports_the_first_failed_step() {
        let res = first_error(vec![Ok(()), Err(anyhow!("raw mode")), Ok(()), Err(anyhow!("alt screen"))]);
        assert_eq!(res.unwrap_err().to_string(), "raw mode");
        assert!(first_error(vec![Ok(()), Ok(())]).is_ok());
    }
}
