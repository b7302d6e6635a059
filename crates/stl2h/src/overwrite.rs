//! Output-path resolution when the target file already exists.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// File name used when the user asks to rename but enters nothing.
pub const FALLBACK_FILE_NAME: &str = "temp.h";

/// What to do with an output path that already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Overwrite,
    Rename(PathBuf),
}

/// Policy consulted for every existing output path.
pub trait OverwritePrompt {
    fn decide(&mut self, path: &Path) -> io::Result<Decision>;
}

/// Overwrite without asking (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl OverwritePrompt for AlwaysOverwrite {
    fn decide(&mut self, _path: &Path) -> io::Result<Decision> {
        Ok(Decision::Overwrite)
    }
}

/// Asks on a line-oriented terminal.
///
/// `y`/`Y` overwrites, `n`/`N` asks for a new name (empty selects
/// [`FALLBACK_FILE_NAME`]); anything else repeats the question.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer to overwrite prompt",
            ));
        }
        Ok(answer.trim().to_string())
    }
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> OverwritePrompt for TerminalPrompt<R, W> {
    fn decide(&mut self, path: &Path) -> io::Result<Decision> {
        loop {
            let answer = self.ask(&format!(
                "output file \"{}\" already exists, overwrite? [y/n] ",
                path.display()
            ))?;
            match answer.as_str() {
                "y" | "Y" => return Ok(Decision::Overwrite),
                "n" | "N" => {
                    let name = self.ask("enter new output file name: ")?;
                    let name = if name.is_empty() {
                        FALLBACK_FILE_NAME.to_string()
                    } else {
                        name
                    };
                    return Ok(Decision::Rename(PathBuf::from(name)));
                }
                _ => continue,
            }
        }
    }
}

/// Follow the prompt until it accepts an existing path or yields one that
/// does not exist yet.
pub fn resolve_output_path(path: &Path, prompt: &mut dyn OverwritePrompt) -> io::Result<PathBuf> {
    let mut candidate = path.to_path_buf();
    while candidate.exists() {
        match prompt.decide(&candidate)? {
            Decision::Overwrite => return Ok(candidate),
            Decision::Rename(next) => candidate = next,
        }
    }
    Ok(candidate)
}
