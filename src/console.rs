use ::console::Term;
use dialoguer::{Input, Select};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("prompt failed: {0}")]
    PromptError(#[from] dialoguer::Error),
    #[error("input closed before a choice was made")]
    InputClosed,
    #[error("no options to choose from for '{0}'")]
    NoOptions(String),
    #[error("choice {choice} is out of bounds for {len} options")]
    OutOfBounds { choice: usize, len: usize },
}

/// Presentation and input boundary the game engine talks through
pub trait Console {
    /// Show a menu and block until a valid option is picked.
    /// The returned index is always in bounds of `options`.
    fn prompt_choice(
        &mut self,
        heading: &str,
        options: &[String],
    ) -> Result<(usize, String), ConsoleError>;

    fn render_line(&mut self, text: &str) -> Result<(), ConsoleError>;

    fn clear_display(&mut self) -> Result<(), ConsoleError>;

    /// Show `prompt` and wait for the user to press enter
    fn pause(&mut self, prompt: &str) -> Result<(), ConsoleError>;
}

/// Interactive console on the user's terminal
pub struct TerminalConsole {
    term: Term,
}

impl TerminalConsole {
    pub fn stdout() -> Self {
        TerminalConsole {
            term: Term::stdout(),
        }
    }
}

impl Console for TerminalConsole {
    fn prompt_choice(
        &mut self,
        heading: &str,
        options: &[String],
    ) -> Result<(usize, String), ConsoleError> {
        if options.is_empty() {
            return Err(ConsoleError::NoOptions(heading.to_string()));
        }
        let selection = Select::new()
            .with_prompt(heading)
            .items(options)
            .default(0)
            .interact_on(&self.term)?;
        Ok((selection, options[selection].clone()))
    }

    fn render_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.term.write_line(text)?;
        Ok(())
    }

    fn clear_display(&mut self) -> Result<(), ConsoleError> {
        self.term.clear_screen()?;
        Ok(())
    }

    fn pause(&mut self, prompt: &str) -> Result<(), ConsoleError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text_on(&self.term)?;
        Ok(())
    }
}

/// Console that answers menus from a fixed script and records what was shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<usize>,
    lines: Vec<String>,
    pauses: usize,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new(answers: &[usize]) -> Self {
        ScriptedConsole {
            answers: answers.iter().copied().collect(),
            ..ScriptedConsole::default()
        }
    }

    /// Menu headings and rendered lines, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn pauses(&self) -> usize {
        self.pauses
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt_choice(
        &mut self,
        heading: &str,
        options: &[String],
    ) -> Result<(usize, String), ConsoleError> {
        if options.is_empty() {
            return Err(ConsoleError::NoOptions(heading.to_string()));
        }
        self.lines.push(heading.to_string());
        let choice = self.answers.pop_front().ok_or(ConsoleError::InputClosed)?;
        let label = options.get(choice).ok_or(ConsoleError::OutOfBounds {
            choice,
            len: options.len(),
        })?;
        Ok((choice, label.clone()))
    }

    fn render_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.lines.push(text.to_string());
        Ok(())
    }

    fn clear_display(&mut self) -> Result<(), ConsoleError> {
        self.clears += 1;
        Ok(())
    }

    fn pause(&mut self, _prompt: &str) -> Result<(), ConsoleError> {
        self.pauses += 1;
        Ok(())
    }
}
