//! Line-oriented prompt helpers over any reader/writer pair.
//!
//! Generic over `BufRead`/`Write` so the menu can be driven from stdin in
//! production and from an in-memory script in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use canteen_core::validation::{parse_integer, parse_money, parse_percentage, validate_item_id};
use canteen_core::{DiscountRate, Money};

use crate::error::{ShellError, ShellResult};

/// Reads operator input and writes shell output.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: impl Display) -> ShellResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Reads one line; end of input is an error.
    pub fn ask(&mut self, prompt: &str) -> ShellResult<String> {
        self.read_line(prompt)?.ok_or_else(ShellError::input_closed)
    }

    /// Reads one line; blank means "not supplied".
    pub fn ask_optional(&mut self, prompt: &str) -> ShellResult<Option<String>> {
        let answer = self.ask(prompt)?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }

    pub fn ask_integer(&mut self, prompt: &str, field: &str) -> ShellResult<i64> {
        let answer = self.ask(prompt)?;
        Ok(parse_integer(field, &answer)?)
    }

    /// Reads a positive item id.
    pub fn ask_item_id(&mut self) -> ShellResult<i64> {
        let id = self.ask_integer("Item id: ", "item id")?;
        validate_item_id(id)?;
        Ok(id)
    }

    pub fn ask_money(&mut self, prompt: &str, field: &str) -> ShellResult<Money> {
        let answer = self.ask(prompt)?;
        Ok(parse_money(field, &answer)?)
    }

    pub fn ask_percentage(&mut self, prompt: &str) -> ShellResult<DiscountRate> {
        let answer = self.ask(prompt)?;
        Ok(parse_percentage(&answer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Cursor;

    #[test]
    fn test_read_line_trims_and_echoes_prompt() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new("  Coxinha  \n".as_bytes()), &mut out);

        assert_eq!(console.read_line("Name: ").unwrap().as_deref(), Some("Coxinha"));
        assert_eq!(console.read_line("Again: ").unwrap(), None);
        drop(console);

        assert_eq!(String::from_utf8(out).unwrap(), "Name: Again: ");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut console = Console::new(Cursor::new("".as_bytes()), Vec::new());
        let err = console.ask("Name: ").unwrap_err();
        assert_eq!(err.code, ErrorCode::InputClosed);
    }

    #[test]
    fn test_blank_optional_answer_is_none() {
        let mut console = Console::new(Cursor::new("\n4,50\n".as_bytes()), Vec::new());
        assert_eq!(console.ask_optional("Price: ").unwrap(), None);
        assert_eq!(console.ask_optional("Price: ").unwrap().as_deref(), Some("4,50"));
    }

    #[test]
    fn test_typed_answers() {
        let mut console = Console::new(Cursor::new("7\n4,50\n12.5\n0\n".as_bytes()), Vec::new());

        assert_eq!(console.ask_item_id().unwrap(), 7);
        assert_eq!(console.ask_money("Price: ", "price").unwrap().cents(), 450);
        assert_eq!(console.ask_percentage("Percent: ").unwrap().bps(), 1250);

        let err = console.ask_item_id().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
