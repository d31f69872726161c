//! User input and interaction handling.

use crate::error::{Error, Result};
use dialoguer::console::Term;
use dialoguer::{Confirm, Input};
use std::cell::RefCell;
use std::io::{BufRead, IsTerminal, Write};

/// Interactive capability used by `query` and `init`.
///
/// Implementations other than [`DialoguerPrompter`] allow running the
/// same flows without a terminal.
pub trait Prompter {
    /// Asks for a line of free text. An empty response is allowed.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by `dialoguer`.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        let response = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(response)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let response = Confirm::new().with_prompt(prompt).default(default).interact()?;
        Ok(response)
    }
}

/// Prompter reading one answer per line, used when stdin is not a terminal.
///
/// Questions are echoed to stderr so piped runs still show what was asked.
pub struct LinePrompter<R: BufRead> {
    reader: RefCell<R>,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader: RefCell::new(reader) }
    }

    /// Reads the next line without its terminator; `None` at end of input.
    fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        eprint!("{prompt} ");
        std::io::stderr().flush()?;

        let mut line = String::new();
        if self.reader.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn input(&self, prompt: &str) -> Result<String> {
        self.read_line(prompt)?
            .ok_or_else(|| Error::PromptError(format!("no answer given for '{prompt}'")))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let Some(line) = self.read_line(&format!("{prompt} [y/n]"))? else {
            return Ok(default);
        };
        parse_yes_no(&line, default)
            .ok_or_else(|| Error::PromptError(format!("'{line}' is not a yes/no answer")))
    }
}

/// Interprets a yes/no response; a blank response yields `default`.
pub fn parse_yes_no(response: &str, default: bool) -> Option<bool> {
    match response.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Returns the dialoguer prompter when attached to a terminal and a
/// line-based stdin prompter otherwise.
pub fn terminal_prompter() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() && Term::stderr().is_term() {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(LinePrompter::new(std::io::stdin().lock()))
    }
}

/// Resolves a tri-state flag: an explicit value is used as is, otherwise
/// the user is asked once. Unanswered questions default to "no".
pub fn decide(prompt: &dyn Prompter, explicit: Option<bool>, question: &str) -> Result<bool> {
    match explicit {
        Some(value) => Ok(value),
        None => prompt.confirm(question, false),
    }
}
