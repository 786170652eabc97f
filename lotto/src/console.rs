use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use common::ValidationError;

use crate::view;

/// Line based prompt over any reader and writer.
pub struct Console<R, W>{
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W>{
    pub fn new(input: R, output: W) -> Self{
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W{
        &mut self.output
    }

    pub fn into_output(self) -> W{
        self.output
    }

    pub fn read_line(&mut self) -> anyhow::Result<String>{
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input line")?;
        if read == 0 {
            bail!("input closed before a valid value was entered");
        }

        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        return Ok(line);
    }

    /// Prints `prompt` once, then reads lines until `validate` accepts one. Every rejection is
    /// reported with its reason.
    pub fn ask<T, F>(&mut self, prompt: &str, mut validate: F) -> anyhow::Result<T>
    where F: FnMut(&str) -> Result<T, ValidationError> {
        writeln!(self.output, "{}", prompt)?;
        loop {
            let line = self.read_line()?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(error) => view::print_error(&mut self.output, error)?,
            }
        }
    }
}

#[cfg(test)]
mod tests{
    use std::io::Cursor;

    use judge::NumberSet;

    use super::*;

    #[test]
    fn test_read_line_strips_line_ending(){
        let mut console = Console::new(Cursor::new("1,2\r\n3 \n"), Vec::new());
        assert_eq!(console.read_line().unwrap(), "1,2");
        assert_eq!(console.read_line().unwrap(), "3 ");
        assert!(console.read_line().is_err());
    }

    #[test]
    fn test_ask_retries_until_valid(){
        let input = "1,2,3\n1,2,3,4,5,5\n1,2,3,4,5,6\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());

        let set = console.ask("Please enter the winning numbers.", NumberSet::parse).unwrap();
        assert_eq!(set, NumberSet::parse("1,2,3,4,5,6").unwrap());

        let text = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(text, "Please enter the winning numbers.\n\
            [ERROR] Exactly 6 numbers must be entered.\n\
            [ERROR] Numbers must not repeat.\n");
    }

    #[test]
    fn test_ask_fails_on_closed_input(){
        let mut console = Console::new(Cursor::new("x\n"), Vec::new());
        assert!(console.ask("prompt", NumberSet::parse).is_err());
    }
}
