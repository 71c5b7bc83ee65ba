//! Process-spawn boundary for launching the assistant.
//!
//! The launcher starts the assistant as a detached child and reports only
//! whether the spawn call itself succeeded. The child is not supervised
//! and its output is not consumed.

use std::process::Command;

/// Program identity of the assistant process.
const ASSISTANT_PROGRAM: &str = "python";
const ASSISTANT_ARGS: [&str; 2] = ["-m", "src.realtime_api_async_python.main"];

#[derive(Debug, Clone)]
pub struct AssistantLauncher {
    program: String,
    args: Vec<String>,
}

impl Default for AssistantLauncher {
    fn default() -> Self {
        Self {
            program: ASSISTANT_PROGRAM.to_string(),
            args: ASSISTANT_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AssistantLauncher {
    /// Use a different program and argument list (alternate installs,
    /// tests).
    pub fn with_program(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Spawn the assistant, appending `--prompts <prompt>` when an initial
    /// prompt is given. Returns whether the spawn call succeeded.
    pub fn launch(&self, initial_prompt: Option<&str>) -> bool {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(prompt) = initial_prompt {
            command.arg("--prompts").arg(prompt);
        }

        match command.spawn() {
            Ok(child) => {
                log::info!("Launched assistant '{}' (pid {})", self.program, child.id());
                true
            }
            Err(e) => {
                log::error!("Failed to launch assistant '{}': {}", self.program, e);
                false
            }
        }
    }
}
