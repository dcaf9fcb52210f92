use crate::discovery::category_of;
use crate::model::Guideline;
use crate::prompt::Choice;
use crate::requirements::RequirementGate;

/// Every guideline whose requirements hold, in discovery order.
pub fn enabled_paths(guidelines: &[Guideline], gate: &RequirementGate<'_>) -> Vec<String> {
    guidelines
        .iter()
        .filter(|g| !gate.is_disabled(&g.path))
        .map(|g| g.path.clone())
        .collect()
}

/// Enabled guidelines whose first path segment is one of `categories`.
pub fn filter_by_categories(
    guidelines: &[Guideline],
    categories: &[String],
    gate: &RequirementGate<'_>,
) -> Vec<String> {
    let mut filtered = Vec::new();

    for guideline in guidelines {
        let category = category_of(&guideline.path);
        if categories.iter().any(|c| c == category) && !gate.is_disabled(&guideline.path) {
            filtered.push(guideline.path.clone());
        }
    }

    filtered
}

/// Multiselect entries plus the indices pre-checked by default (all enabled ones).
pub fn choices(guidelines: &[Guideline], gate: &RequirementGate<'_>) -> (Vec<Choice>, Vec<usize>) {
    let mut choices = Vec::with_capacity(guidelines.len());
    let mut defaults = Vec::new();

    for (i, guideline) in guidelines.iter().enumerate() {
        let label = if gate.is_disabled(&guideline.path) {
            format!("{} {}", guideline.name, gate.requirement_label(&guideline.path))
        } else {
            defaults.push(i);
            guideline.name.clone()
        };

        choices.push(Choice {
            key: guideline.path.clone(),
            label,
        });
    }

    (choices, defaults)
}
