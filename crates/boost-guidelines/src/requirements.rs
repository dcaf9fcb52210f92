/// Dependency requirements gating individual guidelines.
///
/// A guideline with requirements is disabled unless every listed package is
/// present in the lockfile at a compatible major version.
use std::collections::BTreeMap;
use std::path::Path;

use guidelines_common::lockfile::{is_package_installed, Lockfile};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Composer package name, e.g. "inertiajs/inertia-laravel"
    pub package: String,
    /// Version constraint, e.g. "^2.0" or "2.0"
    pub constraint: String,
    /// Human name for the annotation, e.g. "Inertia"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Requirement {
    pub fn new(package: &str, constraint: &str) -> Self {
        Self {
            package: package.to_string(),
            constraint: constraint.to_string(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// `(requires Inertia v2.0)` or `(requires vendor-package ^1.0)`
    pub fn annotation(&self) -> String {
        match &self.label {
            Some(label) => {
                let version: String = self
                    .constraint
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                format!("(requires {label} v{version})")
            }
            None => format!(
                "(requires {} {})",
                self.package.replace('/', "-"),
                self.constraint
            ),
        }
    }
}

/// Requirement lists keyed by guideline path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirements(BTreeMap<String, Vec<Requirement>>);

impl Requirements {
    pub fn builtin() -> Self {
        let mut requirements = Self::default();
        requirements.insert(
            "inertia-react/2/forms",
            vec![Requirement::new("inertiajs/inertia-laravel", "^2.0").with_label("Inertia")],
        );
        requirements
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::Config(format!("invalid requirements file {}: {e}", path.display()))
        })
    }

    pub fn insert(&mut self, path: &str, requirements: Vec<Requirement>) {
        self.0.insert(path.to_string(), requirements);
    }

    pub fn for_guideline(&self, path: &str) -> &[Requirement] {
        self.0.get(path).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Evaluates requirements against one lockfile snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RequirementGate<'a> {
    requirements: &'a Requirements,
    lockfile: Option<&'a Lockfile>,
}

impl<'a> RequirementGate<'a> {
    pub fn new(requirements: &'a Requirements, lockfile: Option<&'a Lockfile>) -> Self {
        Self {
            requirements,
            lockfile,
        }
    }

    pub fn is_disabled(&self, path: &str) -> bool {
        self.requirements
            .for_guideline(path)
            .iter()
            .any(|req| !is_package_installed(self.lockfile, &req.package, &req.constraint))
    }

    pub fn requirement_label(&self, path: &str) -> String {
        self.requirements
            .for_guideline(path)
            .iter()
            .map(Requirement::annotation)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
