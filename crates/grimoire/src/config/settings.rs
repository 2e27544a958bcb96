//! Application settings.

use std::path::PathBuf;

use super::{DEFAULT_INDENT, DEFAULT_INPUT_FILENAME, DEFAULT_OUTPUT_FILENAME};

/// Effective settings for a run, after config file and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Spell list to read.
    pub input_path: PathBuf,
    /// Where the annotated spell list is written.
    pub output_path: PathBuf,
    /// Spaces per indentation level in written JSON.
    pub indent: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILENAME),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            indent: DEFAULT_INDENT,
        }
    }
}

impl Settings {
    /// Apply explicit overrides (CLI flags or environment variables).
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        self
    }
}
