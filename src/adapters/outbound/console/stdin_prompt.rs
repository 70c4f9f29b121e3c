use crate::ports::outbound::InputPrompt;
use crate::shared::Result;
use std::io::{self, BufRead, Write};

/// StdinPrompt adapter reading answers from standard input
///
/// Prompts are written to stdout and flushed before reading, matching a
/// plain `input()`-style console exchange.
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPrompt for StdinPrompt {
    fn ask(&self, message: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", message)?;
        stdout.flush()?;

        read_answer(&mut io::stdin().lock())
    }
}

/// Reads one line, failing on end of input
fn read_answer<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("Input stream closed before an answer was given");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_answer_strips_line_ending() {
        let mut input = Cursor::new("2024-05-01\r\nnext\n");
        assert_eq!(read_answer(&mut input).unwrap(), "2024-05-01");
        assert_eq!(read_answer(&mut input).unwrap(), "next");
    }

    #[test]
    fn test_read_answer_keeps_inner_whitespace() {
        let mut input = Cursor::new("  May 1, 2024 \n");
        assert_eq!(read_answer(&mut input).unwrap(), "  May 1, 2024 ");
    }

    #[test]
    fn test_read_answer_last_line_without_newline() {
        let mut input = Cursor::new("11111111-1111-1111-1111-111111111111");
        assert_eq!(
            read_answer(&mut input).unwrap(),
            "11111111-1111-1111-1111-111111111111"
        );
    }

    #[test]
    fn test_read_answer_end_of_input() {
        let mut input = Cursor::new("");
        let err = read_answer(&mut input).unwrap_err();
        assert!(err.to_string().contains("Input stream closed"));
    }
}
