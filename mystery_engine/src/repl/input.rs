//! Terminal input handling for the text front end.
//!
//! Wraps rustyline so line editing and history stay delegated to the
//! collaborator; the engine only ever sees whole lines.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Blocking line source driving the text transport.
///
/// [`InputManager`] is the interactive implementation; tests script their
/// own, the same way the panel loop takes a scripted `ControlPanel`.
pub trait LineSource {
    /// Block for one full line of input.
    ///
    /// # Errors
    /// - on terminal read failures other than Eof/interrupt, which are
    ///   reported as events
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent>;
}

pub struct InputManager {
    editor: DefaultEditor,
}

impl InputManager {
    /// Create the line editor.
    ///
    /// # Errors
    /// - if rustyline cannot initialize the terminal
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for InputManager {
    fn read_line(&mut self, prompt: &str) -> Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(e) => Err(e.into()),
        }
    }
}
