use crate::command::Prompt;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;

/// Terminal input backed by a `rustyline` editor, with history.
pub struct EditorPrompt {
    editor: DefaultEditor,
}

impl EditorPrompt {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for EditorPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                tracing::debug!("input interrupted");
                Ok(None)
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Memory-backed input that replays a fixed list of lines.
///
/// Prompts are recorded so callers can check what was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_replays_lines() {
        let mut input = ScriptedPrompt::new(["1", "courses.csv"]);

        assert_eq!(input.read_line("a? ").unwrap(), Some("1".to_string()));
        assert_eq!(input.read_line("b? ").unwrap(), Some("courses.csv".to_string()));
        assert_eq!(input.read_line("c? ").unwrap(), None);
        assert_eq!(input.prompts(), ["a? ", "b? ", "c? "]);
        assert_eq!(input.remaining(), 0);
    }
}
