// input.rs

use anyhow::{anyhow, Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use std::io::{BufRead, Write};
use tracing::{error, warn};
use crate::completion::MenuHelper;
use crate::util::prompt_ignore_broken_pipe;

/// Where the session reads its lines from. `Ok(None)` means the input is closed.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>>;

    /// Same as `read_line`, for the menu prompt.
    fn read_choice(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>> {
        self.read_line(prompt, out)
    }
}

/// Plain buffered reader, used for piped stdin and in tests.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>> {
        prompt_ignore_broken_pipe(&mut *out, prompt).context("failed to write prompt")?;
        let mut buf = Vec::new();
        let bytes = self.reader.read_until(b'\n', &mut buf).context("failed to read input")?;
        if bytes == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail parsing like any other bad input.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Interactive terminal input through rustyline, with session-only recall.
pub struct EditorSource {
    editor: Editor<MenuHelper, DefaultHistory>,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .build();
        let mut editor = Editor::with_config(config).context("failed to create line editor")?;
        editor.set_helper(Some(MenuHelper::new()));
        Ok(Self { editor })
    }

    fn read(&mut self, prompt: &str, out: &mut dyn Write, menu: bool) -> Result<Option<String>> {
        out.flush().context("failed to flush output")?;
        if let Some(helper) = self.editor.helper() {
            helper.menu_active.set(menu);
        }
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            #[cfg(unix)]
            Err(ReadlineError::Utf8Error) => {
                warn!("discarding line that is not valid UTF-8");
                Ok(Some(String::new()))
            }
            Err(err) => {
                error!(error = %err, "line editor failed");
                Err(anyhow!("line editor failed: {}", err))
            }
        }
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>> {
        self.read(prompt, out, false)
    }

    fn read_choice(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>> {
        self.read(prompt, out, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_writes_prompt_and_strips_line_ending() {
        let mut source = ReaderSource::new(Cursor::new("Ada\r\n3.5\n"));
        let mut out = Vec::new();
        assert_eq!(source.read_line("name: ", &mut out).unwrap(), Some("Ada".to_string()));
        assert_eq!(source.read_choice("choice: ", &mut out).unwrap(), Some("3.5".to_string()));
        assert_eq!(String::from_utf8(out).unwrap(), "name: choice: ");
    }

    #[test]
    fn reader_reports_end_of_input() {
        let mut source = ReaderSource::new(Cursor::new("last"));
        let mut out = Vec::new();
        assert_eq!(source.read_line("> ", &mut out).unwrap(), Some("last".to_string()));
        assert_eq!(source.read_line("> ", &mut out).unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut source = ReaderSource::new(Cursor::new(b"\xff\xfe\n4\n".to_vec()));
        let mut out = Vec::new();
        assert_eq!(source.read_line("> ", &mut out).unwrap(), Some("\u{FFFD}\u{FFFD}".to_string()));
        assert_eq!(source.read_line("> ", &mut out).unwrap(), Some("4".to_string()));
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut source = ReaderSource::new(Cursor::new("\n"));
        let mut out = Vec::new();
        assert_eq!(source.read_line("> ", &mut out).unwrap(), Some(String::new()));
    }
}
