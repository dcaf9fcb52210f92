/// Major-version matching used to gate guidelines on installed dependencies.
///
/// Only the leading numeric token of each version string is compared. Minor and
/// patch components are ignored in both the exact and the caret form.
use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Returns `true` when `installed` satisfies the `required` constraint.
///
/// - `^N...`: installed major >= N
/// - `N...`: installed major == N
pub fn version_satisfies(installed: &str, required: &str) -> bool {
    let installed = installed.trim_start_matches('v');

    let required_major = leading_major(required);
    let installed_major = leading_major(installed);

    if required.starts_with('^') {
        return compare_numeric(installed_major, required_major) != Ordering::Less;
    }

    installed_major == required_major
}

/// First run of ASCII digits, or `"0"` when the string has none.
pub fn leading_major(version: &str) -> &str {
    DIGITS.find(version).map(|m| m.as_str()).unwrap_or("0")
}

// Digit strings of arbitrary length; compared without parsing so nothing overflows.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = strip_zeros(a);
    let b = strip_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}
