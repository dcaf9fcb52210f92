/// Template discovery and display-name derivation.
///
/// Guideline paths encode category, optional version segments and the leaf name,
/// e.g. `inertia-react/2/forms.blade.php`. Everything here is recomputed from the
/// source tree on every run.
use std::path::Path;

use include_dir::{Dir, DirEntry};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::model::{Category, Guideline};
use crate::source::TemplateSource;

pub fn list_guidelines(source: &TemplateSource, suffix: &str) -> Vec<Guideline> {
    let mut keys = Vec::new();
    match source {
        TemplateSource::Bundled => collect_embedded(TemplateSource::bundled_dir(), suffix, &mut keys),
        TemplateSource::Directory(root) => collect_directory(root, suffix, &mut keys),
    }

    let mut guidelines: Vec<Guideline> = keys
        .into_iter()
        .map(|path| Guideline {
            name: format_name(&path),
            category: category_of(&path).to_string(),
            path,
        })
        .collect();

    guidelines.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(count = guidelines.len(), %source, "guidelines discovered");
    guidelines
}

fn collect_directory(root: &Path, suffix: &str, keys: &mut Vec<String>) {
    if !root.is_dir() {
        debug!(path = %root.display(), "source directory not found");
        return;
    }

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        keys.extend(relative_key(relative, suffix));
    }
}

// Embedded paths are already relative to the template root.
fn collect_embedded(dir: &Dir<'_>, suffix: &str, keys: &mut Vec<String>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => collect_embedded(sub, suffix, keys),
            DirEntry::File(file) => keys.extend(relative_key(file.path(), suffix)),
        }
    }
}

fn relative_key(relative: &Path, suffix: &str) -> Option<String> {
    let Some(segments) = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
    else {
        warn!(path = %relative.display(), "skipping template with a non UTF-8 path");
        return None;
    };
    let joined = segments.join("/");
    let key = joined.strip_suffix(suffix)?;
    // A bare `.blade.php` file has no name to install under.
    if key.is_empty() || key.ends_with('/') {
        return None;
    }
    Some(key.to_string())
}

/// `inertia-react/2/forms` -> `Inertia React v2 - Forms`
pub fn format_name(path: &str) -> String {
    let mut parts: Vec<&str> = path.split('/').collect();
    let leaf = parts.pop().unwrap_or_default();

    let category = parts
        .iter()
        .map(|part| {
            if is_numeric(part) {
                format!("v{part}")
            } else {
                title_case(part)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let name = title_case(leaf);

    if category.is_empty() {
        name
    } else {
        format!("{category} - {name}")
    }
}

pub fn category_of(path: &str) -> &str {
    path.split('/').next().unwrap_or(path)
}

/// Buckets keep first-appearance order; guidelines keep input order within a bucket.
pub fn group_by_category(guidelines: &[Guideline]) -> Vec<Category> {
    let mut grouped: Vec<Category> = Vec::new();

    for guideline in guidelines {
        let key = category_of(&guideline.path);
        match grouped.iter_mut().find(|c| c.key == key) {
            Some(category) => category.guidelines.push(guideline.clone()),
            None => grouped.push(Category {
                key: key.to_string(),
                guidelines: vec![guideline.clone()],
            }),
        }
    }

    grouped
}

// Digits with at most one interior dot: "2", "10", "2.5".
fn is_numeric(segment: &str) -> bool {
    let mut pieces = segment.splitn(2, '.');
    let whole = pieces.next().unwrap_or_default();
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match pieces.next() {
        Some(fraction) => digits(whole) && digits(fraction),
        None => digits(whole),
    }
}

/// Replaces `-`/`_` with spaces and upper-cases the first letter of every word.
fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut word_start = true;
    for ch in segment.chars() {
        let ch = if ch == '-' || ch == '_' { ' ' } else { ch };
        if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = ch.is_whitespace();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guideline(path: &str) -> Guideline {
        Guideline {
            path: path.to_string(),
            name: format_name(path),
            category: category_of(path).to_string(),
        }
    }

    #[test]
    fn format_path_with_version() {
        assert_eq!(format_name("inertia-react/2/forms"), "Inertia React v2 - Forms");
    }

    #[test]
    fn format_path_without_version() {
        assert_eq!(format_name("tailwindcss/core"), "Tailwindcss - Core");
    }

    #[test]
    fn format_single_segment() {
        assert_eq!(format_name("general"), "General");
    }

    #[test]
    fn format_multiple_versions() {
        assert_eq!(format_name("framework/4/5/feature"), "Framework v4 v5 - Feature");
    }

    #[test]
    fn format_underscores_and_decimal_versions() {
        assert_eq!(format_name("laravel_pint/1.2/code_style"), "Laravel Pint v1.2 - Code Style");
        assert_eq!(format_name("php/8.x/types"), "Php 8.x - Types");
    }

    #[test]
    fn title_case_keeps_inner_capitals() {
        assert_eq!(title_case("shadcnUI-forms"), "ShadcnUI Forms");
    }

    #[test]
    fn group_by_first_segment() {
        let guidelines = vec![
            guideline("inertia-react/2/forms"),
            guideline("inertia-react/2/routing"),
            guideline("tailwindcss/4/core"),
        ];

        let grouped = group_by_category(&guidelines);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].key, "inertia-react");
        assert_eq!(grouped[0].guidelines.len(), 2);
        assert_eq!(grouped[1].key, "tailwindcss");
        assert_eq!(grouped[1].guidelines.len(), 1);

        let total: usize = grouped.iter().map(|c| c.guidelines.len()).sum();
        assert_eq!(total, guidelines.len());
    }

    #[test]
    fn group_preserves_discovery_order() {
        // '-' sorts before '/', so "a-b" precedes "a" in path order.
        let guidelines = vec![guideline("a-b/x"), guideline("a/x"), guideline("a/y")];
        let keys: Vec<_> = group_by_category(&guidelines)
            .into_iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, ["a-b", "a"]);
    }

    #[test]
    fn list_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = TemplateSource::Directory(dir.path().join("nope"));
        assert!(list_guidelines(&missing, ".blade.php").is_empty());
    }

    #[test]
    fn list_strips_prefix_and_suffix_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for rel in [
            "tailwindcss/4/core.blade.php",
            "inertia-react/2/forms.blade.php",
            "general.blade.php",
            "inertia-react/2/notes.md",
        ] {
            let file = root.join(rel);
            std::fs::create_dir_all(file.parent().unwrap()).unwrap();
            std::fs::write(&file, "content").unwrap();
        }

        let found = list_guidelines(&TemplateSource::Directory(root.to_path_buf()), ".blade.php");
        let paths: Vec<_> = found.iter().map(|g| g.path.as_str()).collect();
        assert_eq!(paths, ["general", "inertia-react/2/forms", "tailwindcss/4/core"]);
        assert_eq!(found[1].name, "Inertia React v2 - Forms");
        assert_eq!(found[1].category, "inertia-react");
        assert_eq!(found[0].category, "general");
    }

    #[test]
    fn bundled_source_lists_shipped_templates() {
        let found = list_guidelines(&TemplateSource::Bundled, ".blade.php");
        let paths: Vec<_> = found.iter().map(|g| g.path.as_str()).collect();
        assert!(paths.contains(&"tailwindcss/4/core"));
        assert!(paths.contains(&"inertia-react/2/forms"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("general.blade.php"), "content").unwrap();
        let odd = OsStr::from_bytes(b"bad\xff.blade.php");
        assert_eq!(relative_key(Path::new(odd), ".blade.php"), None);

        // Some filesystems refuse invalid names; the key check above still holds.
        if std::fs::write(root.join(odd), "content").is_ok() {
            let found = list_guidelines(&TemplateSource::Directory(root.to_path_buf()), ".blade.php");
            let paths: Vec<_> = found.iter().map(|g| g.path.as_str()).collect();
            assert_eq!(paths, ["general"]);
        }
    }
}
