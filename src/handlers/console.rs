use std::{
    fmt::Display,
    io::{self, BufRead, Stdout, Write},
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};

use crate::errors::{AppError, AppResult};

/// Source of answer lines. `secret` input is not echoed back as typed.
pub trait LineInput {
    /// Returns the line without its terminator, or `None` once input ends.
    fn read_line(&mut self, secret: bool) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineInput for R {
    fn read_line(&mut self, _secret: bool) -> io::Result<Option<String>> {
        let mut line = String::new();
        if BufRead::read_line(self, &mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Keyboard input read through crossterm in raw mode, with our own echo so
/// passwords can be masked. Ctrl-C or Ctrl-D ends input.
pub struct TerminalInput {
    echo: Stdout,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self { echo: io::stdout() }
    }

    fn read_keys(&mut self, secret: bool) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Enter => return Ok(Some(line)),
                KeyCode::Char('c') | KeyCode::Char('d')
                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    return Ok(None)
                }
                KeyCode::Backspace => {
                    if line.pop().is_some() {
                        execute!(self.echo, cursor::MoveLeft(1), Print(' '), cursor::MoveLeft(1))?;
                    }
                }
                KeyCode::Char(c) => {
                    line.push(c);
                    execute!(self.echo, Print(if secret { '*' } else { c }))?;
                }
                _ => {}
            }
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput for TerminalInput {
    fn read_line(&mut self, secret: bool) -> io::Result<Option<String>> {
        terminal::enable_raw_mode()?;
        let line = self.read_keys(secret);
        terminal::disable_raw_mode()?;
        execute!(self.echo, Print("\n"))?;
        line
    }
}

/// Line-oriented terminal screen. Generic over its input and output so
/// screens can be driven by scripted input in tests.
pub struct Console<I, W> {
    input: I,
    output: W,
}

fn io_error(err: io::Error) -> AppError {
    AppError::InternalError(format!("Terminal I/O failed: {}", err))
}

impl<I: LineInput, W: Write> Console<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        queue!(self.output, Print(line), Print("\n")).map_err(io_error)
    }

    pub fn blank(&mut self) -> AppResult<()> {
        queue!(self.output, Print("\n")).map_err(io_error)
    }

    pub fn heading(&mut self, title: impl Display) -> AppResult<()> {
        queue!(
            self.output,
            Print("\n"),
            SetAttribute(Attribute::Bold),
            Print(format!("== {} ==", title)),
            SetAttribute(Attribute::Reset),
            Print("\n")
        )
        .map_err(io_error)
    }

    fn ask(&mut self, label: &str, secret: bool) -> AppResult<Option<String>> {
        queue!(self.output, Print(label), Print(" ")).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;
        self.input.read_line(secret).map_err(io_error)
    }

    /// Reads one trimmed line. `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        Ok(self.ask(label, false)?.map(|line| line.trim().to_string()))
    }

    /// Reads a masked line and keeps it exactly as typed.
    pub fn prompt_secret(&mut self, label: &str) -> AppResult<Option<String>> {
        self.ask(label, true)
    }

    /// Like [`prompt`](Self::prompt), but an empty answer keeps `current`.
    pub fn prompt_with_default(&mut self, label: &str, current: &str) -> AppResult<Option<String>> {
        let answer = self.prompt(&format!("{} [{}]", label, current))?;
        Ok(answer.map(|a| if a.is_empty() { current.to_string() } else { a }))
    }

    pub fn confirm(&mut self, question: &str) -> AppResult<bool> {
        let answer = self.prompt(&format!("{} (y/N)", question))?;
        Ok(matches!(answer.as_deref(), Some("y") | Some("Y") | Some("yes")))
    }

    pub fn report(&mut self, err: &AppError) -> AppResult<()> {
        queue!(
            self.output,
            SetForegroundColor(Color::Red),
            Print(format!("! {}", err.message())),
            ResetColor,
            Print("\n")
        )
        .map_err(io_error)
    }

    pub fn into_output(mut self) -> W {
        let _ = self.output.flush();
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_trims_and_detects_eof() {
        let mut c = console("  hello  \n");

        assert_eq!(c.prompt(">").unwrap().as_deref(), Some("hello"));
        assert_eq!(c.prompt(">").unwrap(), None);
    }

    #[test]
    fn test_prompt_secret_keeps_surrounding_spaces() {
        let mut c = console(" pass word \r\n");

        assert_eq!(c.prompt_secret("Password:").unwrap().as_deref(), Some(" pass word "));
    }

    #[test]
    fn test_prompt_with_default_keeps_current() {
        let mut c = console("\nnew\n");

        assert_eq!(c.prompt_with_default("Title", "old").unwrap().as_deref(), Some("old"));
        assert_eq!(c.prompt_with_default("Title", "old").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        let mut c = console("\ny\n");

        assert!(!c.confirm("Delete?").unwrap());
        assert!(c.confirm("Delete?").unwrap());
    }

    #[test]
    fn test_report_shows_message_only() {
        let mut c = console("");
        c.report(&AppError::NotFound("Quiz missing".into())).unwrap();

        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("! Quiz missing"));
        assert!(!out.contains("Not found"));
    }

    #[test]
    fn test_heading_wraps_title() {
        let mut c = console("");
        c.heading("Log in").unwrap();

        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("== Log in =="));
    }
}
