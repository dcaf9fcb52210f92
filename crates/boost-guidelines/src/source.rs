//! Where guideline templates are read from.
//!
//! Without `--source` the templates compiled into the binary are used, so an
//! installed binary does not depend on the checkout it was built from.
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use include_dir::{include_dir, Dir};

use crate::error::AppError;

static BUNDLED: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/.ai/guidelines");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates embedded at build time
    Bundled,
    /// A template tree on disk
    Directory(PathBuf),
}

impl TemplateSource {
    pub fn bundled_dir() -> &'static Dir<'static> {
        &BUNDLED
    }

    /// Contents of the template at `relative` (`/`-separated, suffix included),
    /// or `None` when there is no such template.
    pub fn read(&self, relative: &str) -> Result<Option<Cow<'static, [u8]>>, AppError> {
        match self {
            Self::Bundled => Ok(BUNDLED.get_file(relative).map(|f| Cow::Borrowed(f.contents()))),
            Self::Directory(root) => {
                let path = root.join(relative);
                if !path.is_file() {
                    return Ok(None);
                }
                let bytes = std::fs::read(&path).map_err(|e| AppError::io(&path, e))?;
                Ok(Some(Cow::Owned(bytes)))
            }
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled templates"),
            Self::Directory(root) => write!(f, "{}", root.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_templates_are_embedded() {
        let core = TemplateSource::Bundled.read("tailwindcss/4/core.blade.php").unwrap();
        assert!(core.is_some_and(|bytes| !bytes.is_empty()));
        assert!(TemplateSource::Bundled.read("ghost/1/none.blade.php").unwrap().is_none());
    }

    #[test]
    fn directory_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("general.blade.php");
        std::fs::write(&file, "rules").unwrap();
        let source = TemplateSource::Directory(dir.path().to_path_buf());

        assert_eq!(source.read("general.blade.php").unwrap().as_deref(), Some(&b"rules"[..]));
        assert!(source.read("missing.blade.php").unwrap().is_none());
    }

    #[test]
    fn display_names_the_origin() {
        assert_eq!(TemplateSource::Bundled.to_string(), "bundled templates");
    }
}
