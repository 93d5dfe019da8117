use crate::command::{CommandFactory, ExecutableCommand, Prompt};
use crate::error::{LoadError, QueryError};
use crate::planner::Factory;
use crate::session::Session;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options of the planner menu.
///
/// Inline arguments typed after the menu number are parsed with [`argh`]
/// (`FromArgs`); options prompt for anything that was not given inline.
pub(crate) trait MenuOption: Sized + FromArgs {
    /// Number the user types to pick this option.
    fn number() -> u32;

    /// Short name used in usage and error output, e.g. "load".
    fn name() -> &'static str;

    fn label() -> &'static str;

    fn execute(
        self,
        input: &mut dyn Prompt,
        output: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()>;
}

impl<T: MenuOption> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        input: &mut dyn Prompt,
        output: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        if let Err(e) = <T as MenuOption>::execute(*self, input, output, session) {
            tracing::error!(option = T::name(), error = %e, "menu option failed");
            writeln!(output, "Error: {e:#}")?;
        }
        Ok(())
    }
}

/// Inline arguments that `argh` rejected, or a help request.
struct InvalidArgs {
    output: String,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        _input: &mut dyn Prompt,
        output: &mut dyn Write,
        _session: &mut Session,
    ) -> Result<()> {
        writeln!(output, "{}", self.output.trim_end())?;
        Ok(())
    }
}

impl<T: MenuOption + 'static> CommandFactory for Factory<T> {
    fn number(&self) -> u32 {
        T::number()
    }

    fn label(&self) -> &'static str {
        T::label()
    }

    fn try_create(&self, number: u32, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if number != T::number() {
            return None;
        }
        Some(match T::from_args(&[T::name()], args) {
            Ok(cmd) => Box::new(cmd),
            Err(EarlyExit { output, .. }) => Box::new(InvalidArgs { output }),
        })
    }
}

/// Load `path` into the session's catalog and report the outcome.
///
/// Load failures are reported to `output`; only write errors are returned.
pub fn load_catalog(session: &mut Session, path: &Path, output: &mut dyn Write) -> Result<()> {
    match session.catalog.load(path) {
        Ok(report) => {
            for warning in &report.warnings {
                writeln!(output, "Warning: {warning}")?;
            }
            writeln!(
                output,
                "Data loaded successfully! {} courses loaded.",
                report.courses
            )?;
        }
        Err(err @ LoadError::Unreadable { .. }) => {
            writeln!(output, "Error: {err}")?;
            writeln!(output, "Please make sure the file exists and try again.")?;
        }
        Err(err @ LoadError::NoValidCourses { .. }) => {
            for warning in err.warnings() {
                writeln!(output, "Warning: {warning}")?;
            }
            writeln!(output, "Error: {err}")?;
        }
    }
    Ok(())
}

#[derive(FromArgs)]
/// Load the course catalog from a file.
/// Prompts for the file name when none is given; an empty answer uses the default file.
pub struct LoadData {
    #[argh(positional)]
    /// course file to load.
    pub path: Option<String>,
}

impl MenuOption for LoadData {
    fn number() -> u32 {
        1
    }

    fn name() -> &'static str {
        "load"
    }

    fn label() -> &'static str {
        "Load Data Structure."
    }

    fn execute(
        self,
        input: &mut dyn Prompt,
        output: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        let answer = match self.path {
            Some(path) => path,
            None => match input.read_line("Enter the file name: ")? {
                Some(line) => line,
                None => {
                    session.should_exit = true;
                    return Ok(());
                }
            },
        };

        let path = if answer.trim().is_empty() {
            let default = session.config.default_file.clone();
            writeln!(output, "Using default filename: {}", default.display())?;
            default
        } else {
            PathBuf::from(answer.trim())
        };

        load_catalog(session, &path, output)
    }
}

#[derive(FromArgs)]
/// Print every course in the catalog, ordered by course number.
pub struct PrintCourseList {}

impl MenuOption for PrintCourseList {
    fn number() -> u32 {
        2
    }

    fn name() -> &'static str {
        "list"
    }

    fn label() -> &'static str {
        "Print Course List."
    }

    fn execute(
        self,
        _input: &mut dyn Prompt,
        output: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        match session.catalog.list() {
            Ok(courses) => {
                writeln!(output, "Here is a sample schedule:")?;
                writeln!(output)?;
                for course in courses {
                    writeln!(output, "{course}")?;
                }
                writeln!(output)?;
            }
            Err(e) => writeln!(output, "{e}")?,
        }
        Ok(())
    }
}

#[derive(FromArgs)]
/// Print one course with its prerequisites.
pub struct PrintCourse {
    #[argh(positional)]
    /// course number to look up, case-insensitive.
    pub course: Option<String>,
}

impl MenuOption for PrintCourse {
    fn number() -> u32 {
        3
    }

    fn name() -> &'static str {
        "course"
    }

    fn label() -> &'static str {
        "Print Course."
    }

    fn execute(
        self,
        input: &mut dyn Prompt,
        output: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        let raw = match self.course {
            Some(course) => course,
            None => match input.read_line("What course do you want to know about? ")? {
                Some(line) => line,
                None => {
                    session.should_exit = true;
                    return Ok(());
                }
            },
        };

        if raw.trim().is_empty() {
            writeln!(output, "Please enter a valid course number.")?;
            return Ok(());
        }

        match session.catalog.lookup(&raw) {
            Ok(details) => {
                writeln!(output, "{}", details.course)?;
                if details.prerequisites.is_empty() {
                    writeln!(output, "Prerequisites: None")?;
                } else {
                    writeln!(output, "Prerequisites: {}", details.prerequisites.join(", "))?;
                }
            }
            Err(e @ QueryError::NotFound(_)) => {
                writeln!(output, "{e}")?;
                writeln!(output, "Please verify the course number and try again.")?;
            }
            Err(e @ QueryError::EmptyCatalog) => writeln!(output, "{e}")?,
        }
        Ok(())
    }
}

#[derive(FromArgs)]
/// Leave the course planner.
pub struct Exit {}

impl MenuOption for Exit {
    fn number() -> u32 {
        9
    }

    fn name() -> &'static str {
        "exit"
    }

    fn label() -> &'static str {
        "Exit"
    }

    fn execute(
        self,
        _input: &mut dyn Prompt,
        output: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()> {
        writeln!(output, "Thank you for using the course planner!")?;
        session.should_exit = true;
        Ok(())
    }
}
