use serde::{Deserialize, Serialize};

/// A single installable guideline template (e.g. `inertia-react/2/forms`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guideline {
    /// Path relative to the source directory, `/`-separated, without the template suffix
    pub path: String,
    /// Display name, e.g. "Inertia React v2 - Forms"
    pub name: String,
    /// First path segment, e.g. "inertia-react"
    pub category: String,
}

/// Guidelines sharing a first path segment.
#[derive(Debug, Clone)]
pub struct Category {
    /// First path segment, e.g. "tailwindcss"
    pub key: String,
    pub guidelines: Vec<Guideline>,
}

/// Whether a guideline already exists in the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallState {
    Missing,
    /// Byte-identical to the bundled template
    Current,
    /// Present but edited since it was installed (or installed from an older template)
    Modified,
}

/// One row of `--list --json` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingEntry {
    pub path: String,
    pub name: String,
    pub category: String,
    pub state: InstallState,
    pub disabled: bool,
    pub requirement: Option<String>,
}

/// Outcome of copying a batch of guidelines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<String>,
    /// Declined overwrite of an existing file
    pub skipped: Vec<String>,
    /// No source template for the requested path
    pub missing: Vec<String>,
}
