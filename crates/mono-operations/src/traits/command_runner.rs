use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    #[must_use]
    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

pub trait CommandRunner: Send + Sync {
    /// Runs a shell command with `dir` as its working directory.
    ///
    /// # Errors
    ///
    /// Returns an error only if the command cannot be started. A command that
    /// runs and fails is reported through [`CommandStatus`].
    fn run(&self, command: &str, dir: &Path) -> Result<CommandStatus>;
}
