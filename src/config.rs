use std::env;
use std::path::PathBuf;

/// File loaded when the user answers the file-name prompt with nothing.
pub const DEFAULT_FILE: &str = "ABCU_Advising_Program_Input.csv";

/// Environment variable overriding [`DEFAULT_FILE`].
pub const DEFAULT_FILE_VAR: &str = "COURSE_PLANNER_DEFAULT_FILE";

/// Settings of an interactive planner session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File name substituted for an empty answer to the load prompt.
    pub default_file: PathBuf,
    /// Prompt shown after the menu.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_FILE),
            prompt: "What would you like to do? ".to_string(),
        }
    }
}

impl Config {
    /// Built-in defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env_lookup(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(file) = lookup(DEFAULT_FILE_VAR).filter(|v| !v.trim().is_empty()) {
            self.default_file = PathBuf::from(file);
        }
        self
    }

    pub fn with_default_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.default_file = file.into();
        self
    }
}
