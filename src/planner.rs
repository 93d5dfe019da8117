use crate::command::{CommandFactory, MenuLine, Prompt, Selection};
use crate::config::Config;
use crate::io_adapters::EditorPrompt;
use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Produces one menu option type for the number it is registered under.
///
/// `CommandFactory` is implemented for every `Factory<T>` whose `T` is a
/// menu option of this crate; see `builtin`.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The interactive course planner.
///
/// The planner owns a [`Session`] and a list of [`CommandFactory`] objects,
/// one per menu option. Each menu line is dispatched to the factory whose
/// number matches. See [`Default`] for the options included out of the box.
///
/// Example
/// ```
/// use course_planner::Planner;
/// use course_planner::io_adapters::ScriptedPrompt;
///
/// let mut planner = Planner::default();
/// let mut input = ScriptedPrompt::new(["2", "9"]);
/// let mut out = Vec::new();
/// planner.run_loop(&mut input, &mut out).unwrap();
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains("No courses loaded."));
/// assert!(planner.session().should_exit);
/// ```
pub struct Planner {
    session: Session,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Planner {
    /// Create a planner with a custom set of menu options.
    pub fn new(config: Config, commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            session: Session::new(config),
            commands,
        }
    }

    /// Create a planner with the default menu and the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self::new(config, default_commands())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Write the menu, one line per option.
    pub fn render_menu(&self, output: &mut dyn Write) -> Result<()> {
        writeln!(output)?;
        for command in &self.commands {
            writeln!(output, "  {}. {}", command.number(), command.label())?;
        }
        writeln!(output)?;
        Ok(())
    }

    /// Dispatch a single menu line.
    ///
    /// Unknown or unparsable selections are reported and otherwise ignored.
    pub fn run(&mut self, line: &str, input: &mut dyn Prompt, output: &mut dyn Write) -> Result<()> {
        let MenuLine { selection, args } = MenuLine::parse(line);
        let number = match selection {
            Selection::Number(number) => number,
            Selection::Invalid(raw) if raw.is_empty() => {
                writeln!(output, "Please choose an option from the menu.")?;
                return Ok(());
            }
            Selection::Invalid(raw) => {
                writeln!(output, "{raw} is not a valid option.")?;
                return Ok(());
            }
        };

        tracing::debug!(number, ?args, "menu selection");
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(number, &args) {
                return cmd.execute(input, output, &mut self.session);
            }
        }
        writeln!(output, "{number} is not a valid option.")?;
        Ok(())
    }

    /// Show the menu and dispatch selections until the exit option is picked
    /// or input runs out.
    pub fn run_loop(&mut self, input: &mut dyn Prompt, output: &mut dyn Write) -> Result<()> {
        writeln!(output, "Welcome to the course planner.")?;

        while !self.session.should_exit {
            self.render_menu(output)?;
            output.flush()?;

            let prompt = self.session.config.prompt.clone();
            let Some(line) = input.read_line(&prompt)? else {
                tracing::debug!("end of input");
                break;
            };

            if let Err(e) = self.run(&line, input, output) {
                tracing::error!(error = %e, "menu selection failed");
                writeln!(output, "Error: {e:#}")?;
            }
        }
        Ok(())
    }

    /// Read-Eval-Print Loop on the terminal.
    pub fn repl(&mut self) -> Result<()> {
        let mut input = EditorPrompt::new()?;
        let mut stdout = std::io::stdout();
        self.run_loop(&mut input, &mut stdout)
    }
}

/// The standard menu: load, list, look up, exit.
fn default_commands() -> Vec<Box<dyn CommandFactory>> {
    use crate::builtin::*;
    vec![
        Box::new(Factory::<LoadData>::default()),
        Box::new(Factory::<PrintCourseList>::default()),
        Box::new(Factory::<PrintCourse>::default()),
        Box::new(Factory::<Exit>::default()),
    ]
}

impl Default for Planner {
    /// Create a planner with the standard menu and configuration from the
    /// process environment.
    fn default() -> Self {
        Self::with_config(Config::from_env())
    }
}
