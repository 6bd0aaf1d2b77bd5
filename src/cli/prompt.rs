use std::{
    io::{self, BufRead, StdinLock, Stdout, Write},
    path::Path,
};

use colored::Colorize;

use crate::core::{CompileError, Interaction};

/// Line-based prompt over any reader/writer pair (stdin/stdout in practice).
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalPrompt<R, W> {
    fn ask_source(&mut self, previous: &CompileError) -> io::Result<Option<String>> {
        writeln!(self.output, "{}. Please retry.", previous)?;
        write!(
            self.output,
            "Please input the folder to convert (no input to leave): "
        )?;
        self.output.flush()?;

        Ok(self.read_answer()?.filter(|answer| !answer.is_empty()))
    }

    fn confirm_overwrite(&mut self, dest: &Path) -> io::Result<bool> {
        loop {
            write!(
                self.output,
                "Destination file is {}. ({}es, {}o) ",
                dest.display(),
                "[y]".bold(),
                "[N]".bold()
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                writeln!(self.output)?;
                return Ok(false);
            };
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }
}
