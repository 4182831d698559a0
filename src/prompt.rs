// src/prompt.rs

//! Interactive prompts on the controlling terminal
//!
//! Questions are asked on the terminal device itself rather than on stdin so
//! that `-o -` can pipe the PKGBUILD to another program while the user still
//! answers interactively.

use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Reads answers from `R` and writes questions to `W`
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

/// Prompter bound to an opened terminal device
pub type TtyPrompter = Prompter<BufReader<File>, File>;

impl TtyPrompter {
    /// Open the terminal device for reading and writing
    pub fn open_tty(path: &Path) -> Result<Self> {
        let tty = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| Error::TerminalUnavailable {
                path: path.display().to_string(),
                source,
            })?;
        let writer = tty.try_clone()?;
        debug!("Opened terminal {}", path.display());
        Ok(Prompter::new(BufReader::new(tty), writer))
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Ask a question and return the trimmed answer, or `default` when the
    /// answer is blank
    pub fn ask(&mut self, label: &str, default: &str) -> Result<String> {
        if default.is_empty() {
            write!(self.writer, "{}: ", label)?;
        } else {
            write!(self.writer, "{}: ({}) ", label, default)?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| Error::Input(e.to_string()))?;
        if read == 0 {
            return Err(Error::Input("interrupted".to_string()));
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    /// Ask for a whitespace separated list
    pub fn ask_list(&mut self, label: &str) -> Result<Vec<String>> {
        let answer = self.ask(label, "")?;
        Ok(answer.split_whitespace().map(str::to_string).collect())
    }

    /// Write a status message without a trailing newline
    pub fn status(&mut self, message: &str) -> Result<()> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a status line
    pub fn status_line(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_empty_answer_uses_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Package Name", "bar-git").unwrap(), "bar-git");

        let mut p = prompter("   \t \n");
        assert_eq!(p.ask("Package Name", "bar-git").unwrap(), "bar-git");
    }

    #[test]
    fn test_answer_is_trimmed() {
        let mut p = prompter("  mytool  \n");
        assert_eq!(p.ask("Binary name to be installed", "baz").unwrap(), "mytool");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("answer");
        assert_eq!(p.ask("Q", "").unwrap(), "answer");
    }

    #[test]
    fn test_question_shows_default() {
        let mut p = prompter("\n\n");
        p.ask("Package Name", "bar-git").unwrap();
        p.ask("Dependent Packages(split by space)", "").unwrap();
        let (_, out) = p.into_parts();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Package Name: (bar-git) Dependent Packages(split by space): "
        );
    }

    #[test]
    fn test_sequential_answers() {
        let mut p = prompter("first\n\nthird\n");
        assert_eq!(p.ask("a", "x").unwrap(), "first");
        assert_eq!(p.ask("b", "y").unwrap(), "y");
        assert_eq!(p.ask("c", "z").unwrap(), "third");
    }

    #[test]
    fn test_end_of_input_is_interrupted() {
        let mut p = prompter("");
        let err = p.ask("Package Name", "bar-git").unwrap_err();
        assert!(matches!(err, Error::Input(ref msg) if msg == "interrupted"));
    }

    #[test]
    fn test_read_error_is_input_error() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("device gone"))
            }
        }

        let mut p = Prompter::new(BufReader::new(Broken), Vec::new());
        let err = p.ask("Q", "").unwrap_err();
        assert!(matches!(err, Error::Input(ref msg) if msg.contains("device gone")));
    }

    #[test]
    fn test_ask_list() {
        let mut p = prompter("  foo   bar\tbaz \n\n");
        assert_eq!(p.ask_list("deps").unwrap(), vec!["foo", "bar", "baz"]);
        assert!(p.ask_list("deps").unwrap().is_empty());
    }

    #[test]
    fn test_open_missing_tty() {
        let err = TtyPrompter::open_tty(Path::new("/nonexistent/tty")).unwrap_err();
        assert!(matches!(err, Error::TerminalUnavailable { .. }));
    }
}
