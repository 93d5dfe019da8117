use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Source of interactive input lines.
///
/// Implemented by the line editor used at a terminal and by scripted input
/// in tests. See [`crate::io_adapters`].
pub trait Prompt {
    /// Show `prompt` and read one line without its terminator.
    ///
    /// Returns `Ok(None)` when input is exhausted or the user interrupts.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// What the user picked at the menu prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A menu number; it may still match no option.
    Number(u32),
    /// Anything that is not a number, kept as typed (trimmed).
    Invalid(String),
}

/// A parsed menu line: the selection and the words following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine<'a> {
    pub selection: Selection,
    pub args: Vec<&'a str>,
}

impl<'a> MenuLine<'a> {
    /// Split a menu line into a selection and inline arguments.
    ///
    /// `"3 csci200"` selects option 3 with one argument. An unparsable first
    /// word yields [`Selection::Invalid`] holding the whole trimmed line.
    pub fn parse(line: &'a str) -> Self {
        let mut words = line.split_whitespace();
        match words.next().map(str::parse::<u32>) {
            Some(Ok(number)) => Self {
                selection: Selection::Number(number),
                args: words.collect(),
            },
            _ => Self {
                selection: Selection::Invalid(line.trim().to_string()),
                args: Vec::new(),
            },
        }
    }
}

/// Object-safe trait for anything the planner can run for a menu selection.
///
/// Implemented for every menu option via a blanket impl.
pub trait ExecutableCommand {
    fn execute(
        self: Box<Self>,
        input: &mut dyn Prompt,
        output: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()>;
}

/// Factory that creates a command for one menu number.
pub trait CommandFactory {
    /// Menu number this factory answers to.
    fn number(&self) -> u32;

    /// Menu label, e.g. `"Print Course List."`.
    fn label(&self) -> &'static str;

    /// Create the command if `number` is ours.
    ///
    /// Returns `None` when the factory doesn't recognize the `number`.
    fn try_create(&self, number: u32, args: &[&str]) -> Option<Box<dyn ExecutableCommand>>;
}
