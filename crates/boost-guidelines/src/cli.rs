//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Install AI guidelines for Laravel Boost
#[derive(Debug, Parser)]
#[command(name = "boost-guidelines", version, about, long_about = None)]
pub struct Cli {
    /// List all available guidelines
    #[arg(long)]
    pub list: bool,

    /// Print the listing as JSON (with --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Install all guidelines whose requirements are met
    #[arg(long)]
    pub all: bool,

    /// Install only Tailwind CSS guidelines
    #[arg(long)]
    pub tailwindcss: bool,

    /// Install only Inertia React guidelines
    #[arg(long = "inertia-react")]
    pub inertia_react: bool,

    /// Install only guidelines of this category (repeatable)
    #[arg(short = 'c', long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Overwrite existing files without confirmation
    #[arg(long)]
    pub force: bool,

    /// Skip running boost:update after installation
    #[arg(long = "no-update")]
    pub no_update: bool,

    /// Answer every prompt with its default
    #[arg(short = 'n', long = "no-interaction")]
    pub no_interaction: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Root of the host Laravel project
    #[arg(long, env = "BOOST_GUIDELINES_PROJECT_ROOT", value_hint = ValueHint::DirPath)]
    pub project_root: Option<PathBuf>,

    /// Template directory to install from instead of the built-in templates
    #[arg(long, env = "BOOST_GUIDELINES_SOURCE", value_hint = ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Install destination [default: <project-root>/.ai/guidelines]
    #[arg(long, env = "BOOST_GUIDELINES_TARGET", value_hint = ValueHint::DirPath)]
    pub target: Option<PathBuf>,

    /// Composer lockfile [default: <project-root>/composer.lock]
    #[arg(long, env = "BOOST_GUIDELINES_LOCKFILE", value_hint = ValueHint::FilePath)]
    pub lockfile: Option<PathBuf>,

    /// JSON file replacing the built-in requirement table
    #[arg(long, env = "BOOST_GUIDELINES_REQUIREMENTS", value_hint = ValueHint::FilePath)]
    pub requirements: Option<PathBuf>,

    /// Command run after installing [default: php artisan boost:update]
    #[arg(long, env = "BOOST_GUIDELINES_UPDATE_COMMAND")]
    pub update_command: Option<String>,
}

impl Cli {
    /// Requested categories, shortcut flags first, without duplicates.
    pub fn category_filters(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();

        let shortcuts = [
            (self.tailwindcss, "tailwindcss"),
            (self.inertia_react, "inertia-react"),
        ];
        let requested = shortcuts
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, name)| name)
            .chain(self.categories.iter().map(String::as_str));

        for name in requested {
            if !categories.iter().any(|c| c == name) {
                categories.push(name.to_string());
            }
        }

        categories
    }
}
