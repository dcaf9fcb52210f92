use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::AppError;
use crate::source::TemplateSource;

pub const TEMPLATE_SUFFIX: &str = ".blade.php";

const DEFAULT_TARGET: &str = ".ai/guidelines";
const DEFAULT_LOCKFILE: &str = "composer.lock";
const DEFAULT_UPDATE_COMMAND: &str = "php artisan boost:update";

/// Resolved paths and settings for one run.
///
/// Every path is absolute; relative CLI/env values are taken relative to the
/// project root.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the host Laravel project (defaults to the working directory).
    pub project_root: PathBuf,
    /// Where `*.blade.php` guideline templates come from.
    pub source: TemplateSource,
    /// Directory the selected templates are copied into.
    pub target_dir: PathBuf,
    /// Composer lockfile checked against guideline requirements.
    pub lockfile_path: PathBuf,
    /// Optional JSON requirement table; `None` uses the built-in one.
    pub requirements_path: Option<PathBuf>,
    /// Post-install command, already split into program and arguments.
    pub update_command: Vec<String>,
    pub template_suffix: String,
}

impl Config {
    /// Optional (flag or environment):
    /// - `BOOST_GUIDELINES_PROJECT_ROOT` (default: current directory)
    /// - `BOOST_GUIDELINES_SOURCE` (default: bundled templates)
    /// - `BOOST_GUIDELINES_TARGET` (default: `.ai/guidelines`)
    /// - `BOOST_GUIDELINES_LOCKFILE` (default: `composer.lock`)
    /// - `BOOST_GUIDELINES_REQUIREMENTS`
    /// - `BOOST_GUIDELINES_UPDATE_COMMAND` (default: `php artisan boost:update`)
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let cwd = std::env::current_dir()
            .map_err(|e| AppError::Config(format!("cannot determine working directory: {e}")))?;

        let project_root = match &cli.project_root {
            Some(root) => absolutize(&cwd, root),
            None => cwd,
        };
        if !project_root.is_dir() {
            return Err(AppError::Config(format!(
                "project root is not a directory: {}",
                project_root.display()
            )));
        }

        let resolve = |value: &Option<PathBuf>, default: &str| {
            absolutize(&project_root, value.as_deref().unwrap_or(Path::new(default)))
        };

        let update_command: Vec<String> = cli
            .update_command
            .as_deref()
            .unwrap_or(DEFAULT_UPDATE_COMMAND)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if update_command.is_empty() {
            return Err(AppError::Config("update command must not be empty".to_string()));
        }

        Ok(Self {
            source: match &cli.source {
                Some(dir) => TemplateSource::Directory(absolutize(&project_root, dir)),
                None => TemplateSource::Bundled,
            },
            target_dir: resolve(&cli.target, DEFAULT_TARGET),
            lockfile_path: resolve(&cli.lockfile, DEFAULT_LOCKFILE),
            requirements_path: cli
                .requirements
                .as_deref()
                .map(|p| absolutize(&project_root, p)),
            update_command,
            template_suffix: TEMPLATE_SUFFIX.to_string(),
            project_root,
        })
    }

    /// `/`-separated template path relative to the source root.
    pub fn template_name(&self, guideline: &str) -> String {
        format!("{guideline}{}", self.template_suffix)
    }

    pub fn target_file(&self, guideline: &str) -> PathBuf {
        self.target_dir.join(self.template_name(guideline))
    }

    /// `path` relative to the project root when it lies inside it.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("boost-guidelines").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_resolve_under_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = Config::from_cli(&parse(&[
            "--project-root",
            root,
            "--update-command",
            "php artisan boost:update",
        ]))
        .unwrap();

        assert_eq!(config.target_dir, dir.path().join(".ai/guidelines"));
        assert_eq!(config.lockfile_path, dir.path().join("composer.lock"));
        assert_eq!(config.update_command, ["php", "artisan", "boost:update"]);
        assert_eq!(config.source, TemplateSource::Bundled);
    }

    #[test]
    fn relative_overrides_use_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = Config::from_cli(&parse(&[
            "--project-root",
            root,
            "--source",
            "vendor/guidelines",
            "--target",
            "docs/ai",
            "--lockfile",
            "locks/composer.lock",
            "--requirements",
            "requirements.json",
        ]))
        .unwrap();

        assert_eq!(config.source, TemplateSource::Directory(dir.path().join("vendor/guidelines")));
        assert_eq!(config.target_dir, dir.path().join("docs/ai"));
        assert_eq!(config.lockfile_path, dir.path().join("locks/composer.lock"));
        assert_eq!(config.requirements_path, Some(dir.path().join("requirements.json")));
    }

    #[test]
    fn missing_project_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = Config::from_cli(&parse(&["--project-root", missing.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn blank_update_command_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let err = Config::from_cli(&parse(&["--project-root", root, "--update-command", "  "])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn file_paths_carry_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = Config::from_cli(&parse(&["--project-root", root, "--target", ".ai/guidelines"])).unwrap();

        let target = config.target_file("tailwindcss/4/core");
        assert_eq!(target, dir.path().join(".ai/guidelines/tailwindcss/4/core.blade.php"));
        assert_eq!(
            config.display_path(&target),
            Path::new(".ai/guidelines/tailwindcss/4/core.blade.php").display().to_string()
        );
    }
}
