//! One invocation of the installer, from discovery to the post-install hook.

use std::io::Write;

use guidelines_common::lockfile::Lockfile;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::Config;
use crate::discovery::list_guidelines;
use crate::error::AppError;
use crate::installer::{install, print_report};
use crate::listing;
use crate::output;
use crate::prompt::Prompter;
use crate::requirements::{RequirementGate, Requirements};
use crate::selection::{choices, enabled_paths, filter_by_categories};
use crate::update::UpdateHook;

const SELECT_PROMPT: &str = "Select guidelines to install:";
const SELECT_HINT: &str = "Press Space to select, Enter to confirm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Nothing to install: no templates at all, or a category filter matched nothing.
    Failure,
}

pub fn run(
    cli: &Cli,
    config: &Config,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<Outcome, AppError> {
    let requirements = match &config.requirements_path {
        Some(path) => Requirements::load(path)?,
        None => Requirements::builtin(),
    };
    let lockfile = Lockfile::load(&config.lockfile_path)
        .inspect_err(|e| debug!(error = %e, "lockfile unavailable, gated guidelines disabled"))
        .ok();
    let gate = RequirementGate::new(&requirements, lockfile.as_ref());

    let guidelines = list_guidelines(&config.source, &config.template_suffix);
    if guidelines.is_empty() {
        output::warning(out, "No guidelines available.")?;
        return Ok(Outcome::Failure);
    }

    if cli.list {
        if cli.json {
            listing::print_json(config, &guidelines, &gate, out)?;
        } else {
            listing::print_text(config, &guidelines, &gate, out)?;
        }
        return Ok(Outcome::Success);
    }

    let categories = cli.category_filters();
    let selected = if !categories.is_empty() {
        let selected = filter_by_categories(&guidelines, &categories, &gate);
        if selected.is_empty() {
            output::warning(
                out,
                &format!(
                    "No guidelines found for selected categories: {}",
                    categories.join(", ")
                ),
            )?;
            return Ok(Outcome::Failure);
        }
        selected
    } else if cli.all {
        enabled_paths(&guidelines, &gate)
    } else {
        let (choices, defaults) = choices(&guidelines, &gate);
        prompter.multiselect(SELECT_PROMPT, &choices, &defaults, SELECT_HINT)?
    };

    if selected.is_empty() {
        output::info(out, "No guidelines selected.")?;
        return Ok(Outcome::Success);
    }

    info!(count = selected.len(), force = cli.force, "installing guidelines");
    let report = install(config, &selected, cli.force, prompter, out)?;
    print_report(config, &report, out)?;

    if !report.installed.is_empty() {
        UpdateHook::new(config).maybe_run(cli.no_update, prompter, out)?;
    }

    Ok(Outcome::Success)
}
