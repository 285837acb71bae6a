//! Interactive user prompting
//!
//! The [`Console`] trait is the only way the navigation controller talks to
//! the terminal, which keeps prompting separate from request logic and lets
//! tests drive the menus with scripted input.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};

use crate::error::{IssueDeskError, Result};

pub trait Console {
    /// Show `prompt` and read one line, without its line terminator.
    /// Returns [`IssueDeskError::InputClosed`] at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Like `read_line`, but the typed text is not echoed.
    fn read_secret(&mut self, prompt: &str) -> Result<String>;

    fn print(&mut self, text: &str);

    fn clear(&mut self) -> Result<()>;

    /// Prompt user for yes/no confirmation
    ///
    /// # Returns
    /// * `true` if user confirms with 'y' or 'Y'
    /// * `false` otherwise
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let input = self.read_line(&format!("{}? [y/N] ", prompt))?;
        Ok(input.trim().eq_ignore_ascii_case("y"))
    }

    /// Prompt user for text input, falling back to `default` on an empty
    /// answer.
    fn prompt_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let shown = match default {
            Some(d) => format!("{} [{}]: ", prompt, d),
            None => format!("{}: ", prompt),
        };
        let input = self.read_line(&shown)?;
        let input = input.trim();

        if input.is_empty()
            && let Some(d) = default
        {
            return Ok(d.to_string());
        }

        Ok(input.to_string())
    }
}

/// Console backed by the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(IssueDeskError::InputClosed);
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        if !io::stdin().is_terminal() {
            return self.read_line(prompt);
        }

        print!("{}", prompt);
        io::stdout().flush()?;

        terminal::enable_raw_mode()?;
        let secret = read_hidden();
        terminal::disable_raw_mode()?;
        println!();

        secret
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn clear(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        if stdout.is_terminal() {
            crossterm::execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Collect key presses until Enter while the terminal is in raw mode.
fn read_hidden() -> Result<String> {
    let mut secret = String::new();
    loop {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            match code {
                KeyCode::Enter => return Ok(secret),
                KeyCode::Char('c') | KeyCode::Char('d')
                    if modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    return Err(IssueDeskError::InputClosed);
                }
                KeyCode::Char(c) => secret.push(c),
                KeyCode::Backspace => {
                    secret.pop();
                }
                _ => {}
            }
        }
    }
}
