use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::warn;

use crate::config::Config;
use crate::discovery::group_by_category;
use crate::model::{Guideline, InstallState, ListingEntry};
use crate::output::{self, Icons};
use crate::requirements::RequirementGate;

/// Compares the installed copy against its template by SHA-256.
pub fn install_state(template: Option<&[u8]>, target: &Path) -> InstallState {
    if !target.is_file() {
        return InstallState::Missing;
    }
    let installed = std::fs::read(target)
        .inspect_err(|e| warn!(error = %e, path = %target.display(), "failed to read for digest"))
        .ok();
    match (template, installed) {
        (Some(a), Some(b)) if Sha256::digest(a) == Sha256::digest(&b) => InstallState::Current,
        _ => InstallState::Modified,
    }
}

fn state_of(config: &Config, guideline: &str) -> InstallState {
    let template = config
        .source
        .read(&config.template_name(guideline))
        .inspect_err(|e| warn!(error = %e, guideline, "failed to read template"))
        .ok()
        .flatten();
    install_state(template.as_deref(), &config.target_file(guideline))
}

pub fn entries(config: &Config, guidelines: &[Guideline], gate: &RequirementGate<'_>) -> Vec<ListingEntry> {
    guidelines
        .iter()
        .map(|g| {
            let disabled = gate.is_disabled(&g.path);
            let label = gate.requirement_label(&g.path);
            ListingEntry {
                path: g.path.clone(),
                name: g.name.clone(),
                category: g.category.clone(),
                state: state_of(config, &g.path),
                disabled,
                requirement: (!label.is_empty()).then_some(label),
            }
        })
        .collect()
}

pub fn print_text(
    config: &Config,
    guidelines: &[Guideline],
    gate: &RequirementGate<'_>,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    output::blank(out)?;
    output::info(out, "Available Guidelines:")?;
    output::blank(out)?;

    for category in group_by_category(guidelines) {
        writeln!(out, "  {}", category.key)?;

        for guideline in &category.guidelines {
            let state = state_of(config, &guideline.path);
            let (marker, suffix) = match state {
                InstallState::Current => (Icons::CHECK, ""),
                InstallState::Modified => (Icons::MODIFIED, " (modified)"),
                InstallState::Missing => (Icons::PENDING, ""),
            };

            if gate.is_disabled(&guideline.path) {
                writeln!(
                    out,
                    "    {marker} {}{suffix} {}",
                    guideline.name,
                    gate.requirement_label(&guideline.path)
                )?;
            } else {
                writeln!(out, "    {marker} {}{suffix}", guideline.name)?;
            }
        }

        output::blank(out)?;
    }

    Ok(())
}

pub fn print_json(
    config: &Config,
    guidelines: &[Guideline],
    gate: &RequirementGate<'_>,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let entries = entries(config, guidelines, gate);
    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;
    use crate::discovery::list_guidelines;
    use crate::requirements::Requirements;

    fn setup() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        for (rel, content) in [
            ("templates/tailwindcss/4/core.blade.php", "core"),
            ("templates/tailwindcss/4/colors.blade.php", "colors"),
            ("templates/inertia-react/2/forms.blade.php", "forms"),
            (".ai/guidelines/tailwindcss/4/core.blade.php", "core"),
            (".ai/guidelines/tailwindcss/4/colors.blade.php", "my colors"),
        ] {
            let path = dir.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        let cli = Cli::try_parse_from([
            "boost-guidelines",
            "--project-root",
            dir.path().to_str().unwrap(),
            "--source",
            "templates",
            "--target",
            ".ai/guidelines",
        ])
        .unwrap();
        let config = Config::from_cli(&cli).unwrap();
        (dir, config)
    }

    #[test]
    fn states_reflect_target_contents() {
        let (_dir, config) = setup();
        assert_eq!(state_of(&config, "tailwindcss/4/core"), InstallState::Current);
        assert_eq!(state_of(&config, "tailwindcss/4/colors"), InstallState::Modified);
        assert_eq!(state_of(&config, "inertia-react/2/forms"), InstallState::Missing);
        assert_eq!(
            install_state(None, &config.target_file("tailwindcss/4/core")),
            InstallState::Modified
        );
    }

    #[test]
    fn text_listing_groups_and_annotates() {
        let (_dir, config) = setup();
        let guidelines = list_guidelines(&config.source, &config.template_suffix);
        let requirements = Requirements::builtin();
        let gate = RequirementGate::new(&requirements, None);

        let mut out = Vec::new();
        print_text(&config, &guidelines, &gate, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\nAvailable Guidelines:\n\n  \
            inertia-react\n    ○ Inertia React v2 - Forms (requires Inertia v2.0)\n\n  \
            tailwindcss\n    ~ Tailwindcss v4 - Colors (modified)\n    ✓ Tailwindcss v4 - Core\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn json_listing_has_one_entry_per_guideline() {
        let (_dir, config) = setup();
        let guidelines = list_guidelines(&config.source, &config.template_suffix);
        let requirements = Requirements::builtin();
        let gate = RequirementGate::new(&requirements, None);

        let mut out = Vec::new();
        print_json(&config, &guidelines, &gate, &mut out).unwrap();
        let parsed: Vec<ListingEntry> = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].path, "inertia-react/2/forms");
        assert!(parsed[0].disabled);
        assert_eq!(parsed[0].requirement.as_deref(), Some("(requires Inertia v2.0)"));
        assert_eq!(parsed[2].state, InstallState::Current);
        assert_eq!(parsed[2].requirement, None);
    }
}
