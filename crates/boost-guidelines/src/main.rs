mod app;
mod cli;
mod config;
mod discovery;
mod error;
mod installer;
mod listing;
mod model;
mod output;
mod prompt;
mod requirements;
mod selection;
mod source;
mod update;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::Outcome;
use cli::Cli;
use config::Config;
use error::AppError;
use prompt::{InquirePrompter, NonInteractive, PromptError, Prompter};

/// Conventional exit status after Ctrl-C.
const EXIT_INTERRUPTED: u8 = 130;

/// `RUST_LOG` wins when set; `-v` only picks the default level.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the command's output.
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_cli(&cli)?;
    info!(
        project_root = %config.project_root.display(),
        source = %config.source,
        target = %config.target_dir.display(),
        lockfile = %config.lockfile_path.display(),
        "configuration loaded"
    );

    let mut prompter: Box<dyn Prompter> = if cli.no_interaction || !prompt::is_interactive() {
        info!("non-interactive mode, prompts answer with their defaults");
        Box::new(NonInteractive)
    } else {
        Box::new(InquirePrompter)
    };

    let mut stdout = std::io::stdout().lock();
    let status = exit_status(app::run(&cli, &config, prompter.as_mut(), &mut stdout))?;
    Ok(ExitCode::from(status))
}

fn exit_status(result: Result<Outcome, AppError>) -> Result<u8, AppError> {
    match result {
        Ok(Outcome::Success) => Ok(0),
        Ok(Outcome::Failure) => Ok(1),
        Err(AppError::Prompt(PromptError::Cancelled)) => {
            eprintln!("Cancelled.");
            Ok(EXIT_INTERRUPTED)
        }
        Err(e) => Err(e),
    }
}
