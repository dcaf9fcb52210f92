/// Copies selected guideline templates into the project.
///
/// The batch is not transactional: an I/O error stops it and leaves earlier
/// copies in place. A missing source template only skips that entry.
use std::io::Write;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::model::InstallReport;
use crate::output;
use crate::prompt::Prompter;

pub fn install(
    config: &Config,
    selected: &[String],
    force: bool,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<InstallReport, AppError> {
    let mut report = InstallReport::default();

    for guideline in selected {
        let target = config.target_file(guideline);

        let Some(contents) = config.source.read(&config.template_name(guideline))? else {
            warn!(guideline = %guideline, source = %config.source, "source file not found");
            output::warning(out, &format!("Source file not found: {guideline}"))?;
            report.missing.push(guideline.clone());
            continue;
        };

        if let Some(dir) = target.parent() {
            std::fs::create_dir_all(dir).map_err(|e| AppError::io(dir, e))?;
        }

        if target.exists() && !force {
            let question = format!(
                "File already exists: {}. Overwrite?",
                config.display_path(&target)
            );
            if !prompter.confirm(&question, false)? {
                info!(guideline = %guideline, "kept existing file");
                report.skipped.push(guideline.clone());
                continue;
            }
        }

        std::fs::write(&target, &contents).map_err(|e| AppError::io(&target, e))?;
        info!(guideline = %guideline, path = %target.display(), "installed");
        report.installed.push(guideline.clone());
    }

    Ok(report)
}

pub fn print_report(config: &Config, report: &InstallReport, out: &mut dyn Write) -> std::io::Result<()> {
    output::blank(out)?;

    if !report.installed.is_empty() {
        output::info(out, "Installed guidelines:")?;
        for guideline in &report.installed {
            writeln!(out, "  {} {guideline}", output::Icons::CHECK)?;
        }
    }

    if !report.skipped.is_empty() {
        output::blank(out)?;
        output::info(out, "Skipped (already exists):")?;
        for guideline in &report.skipped {
            writeln!(out, "  {} {guideline}", output::Icons::PENDING)?;
        }
    }

    output::blank(out)?;
    output::info(
        out,
        &format!("Guidelines installed to {}/", config.display_path(&config.target_dir)),
    )
}
