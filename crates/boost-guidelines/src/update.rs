/// Post-install hook that lets Laravel Boost pick up new guidelines.
///
/// Runs `php artisan boost:update` (or the configured command) in the project root,
/// but only when the project actually is a Laravel application.
use std::io::Write;
use std::process::Command;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::output;
use crate::prompt::Prompter;

const HOST_MARKER: &str = "artisan";

/// What happened to the post-install command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Suppressed,
    Unavailable,
    Declined,
    Ran,
    Failed,
}

pub struct UpdateHook<'a> {
    config: &'a Config,
}

impl<'a> UpdateHook<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// The host application is present when the project root has an `artisan` script.
    pub fn is_available(&self) -> bool {
        self.config.project_root.join(HOST_MARKER).is_file()
    }

    pub fn command_line(&self) -> String {
        self.config.update_command.join(" ")
    }

    pub fn maybe_run(
        &self,
        suppressed: bool,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> Result<UpdateOutcome, AppError> {
        if suppressed {
            return Ok(UpdateOutcome::Suppressed);
        }

        let command_line = self.command_line();

        if !self.is_available() {
            output::note(out, &format!("Run `{command_line}` to apply the guidelines."))?;
            return Ok(UpdateOutcome::Unavailable);
        }

        let question = format!("Run `{command_line}` to apply the guidelines now?");
        if !prompter.confirm(&question, true)? {
            return Ok(UpdateOutcome::Declined);
        }

        output::blank(out)?;
        self.run(out)
    }

    fn run(&self, out: &mut dyn Write) -> Result<UpdateOutcome, AppError> {
        let Some((program, args)) = self.config.update_command.split_first() else {
            return Err(AppError::Config("update command must not be empty".to_string()));
        };

        info!(command = %self.command_line(), "running update command");
        // Flush so our output lands before the child's.
        out.flush()?;

        let status = Command::new(program)
            .args(args)
            .current_dir(&self.config.project_root)
            .status();

        let message = match status {
            Ok(status) if status.success() => return Ok(UpdateOutcome::Ran),
            Ok(status) => {
                warn!(%status, "update command failed");
                format!("`{}` exited with {status}", self.command_line())
            }
            Err(e) => {
                warn!(error = %e, "failed to start update command");
                format!("Could not run `{}`: {e}", self.command_line())
            }
        };

        output::warning(out, &message)?;
        Ok(UpdateOutcome::Failed)
    }
}
