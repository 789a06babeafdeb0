//! Process Launcher
//!
//! Implements the Launcher port by spawning a detached process.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::domain::ports::{LaunchError, Launcher};

/// Runs `program [args...] <file>` without waiting for it
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher {
    program: Option<String>,
    args: Vec<String>,
}

impl ProcessLauncher {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        let program = program.into();
        Self {
            program: (!program.trim().is_empty()).then_some(program),
            args,
        }
    }

    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, file: &Path) -> Result<(), LaunchError> {
        let program = self.program.as_deref().ok_or(LaunchError::NotConfigured)?;

        let child = Command::new(program)
            .args(&self.args)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.to_string(),
                source,
            })?;

        info!(program, pid = child.id(), file = %file.display(), "launched");
        Ok(())
    }
}
