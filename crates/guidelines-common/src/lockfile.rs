/// Composer lockfile snapshot.
///
/// Only the `name` and `version` of each locked package are read. Production and
/// dev packages are kept apart so callers can report where a match came from,
/// but lookups search both lists in that order.
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::CommonError;
use crate::version::version_satisfies;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lockfile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub packages: Vec<LockedPackage>,
    #[serde(default, rename = "packages-dev", deserialize_with = "null_as_empty")]
    pub packages_dev: Vec<LockedPackage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,
}

impl Lockfile {
    pub fn load(path: &Path) -> Result<Self, CommonError> {
        let content = std::fs::read_to_string(path).map_err(|source| CommonError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let lockfile = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            packages = lockfile.packages.len(),
            packages_dev = lockfile.packages_dev.len(),
            "lockfile loaded"
        );
        Ok(lockfile)
    }

    pub fn parse(content: &str) -> Result<Self, CommonError> {
        Ok(serde_json::from_str(content)?)
    }

    /// First package named exactly `name`, searching `packages` before `packages-dev`.
    pub fn find(&self, name: &str) -> Option<&LockedPackage> {
        self.packages
            .iter()
            .chain(self.packages_dev.iter())
            .find(|package| package.name == name)
    }

    pub fn satisfies(&self, name: &str, required: &str) -> bool {
        self.find(name)
            .is_some_and(|package| version_satisfies(&package.version, required))
    }
}

/// A missing or unreadable lockfile never satisfies a requirement.
pub fn is_package_installed(lockfile: Option<&Lockfile>, name: &str, required: &str) -> bool {
    lockfile.is_some_and(|lock| lock.satisfies(name, required))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<LockedPackage>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<LockedPackage>>::deserialize(deserializer)?.unwrap_or_default())
}
