use super::domain::Interview;

/// Language criterion for the grid. `All` disables language narrowing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageSelection {
    #[default]
    All,
    Only(String),
}

impl LanguageSelection {
    /// Builds a selection from the dropdown value, where `"all"` means no
    /// language restriction.
    pub fn from_code(code: &str) -> Self {
        if code == "all" {
            LanguageSelection::All
        } else {
            LanguageSelection::Only(code.to_string())
        }
    }
}

/// Criteria applied to the interview grid, AND-combined. The default value
/// matches every interview.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridFilter {
    pub term: String,
    pub language: LanguageSelection,
    pub coding_only: bool,
    pub with_reports_only: bool,
}

/// Narrows the interview set to entries matching all criteria. Matching is
/// case-insensitive on text fields and the input order is preserved; nothing
/// is resorted.
pub fn filter<'a>(interviews: &'a [Interview], criteria: &GridFilter) -> Vec<&'a Interview> {
    let term = criteria.term.to_lowercase();
    interviews
        .iter()
        .filter(|interview| matches(interview, &term, criteria))
        .collect()
}

fn matches(interview: &Interview, term: &str, criteria: &GridFilter) -> bool {
    let term_hit = term.is_empty()
        || interview.interview_name.to_lowercase().contains(term)
        || interview.skills.iter().any(|skill| {
            skill.name.to_lowercase().contains(term)
                || skill.description.to_lowercase().contains(term)
        });

    let language_hit = match &criteria.language {
        LanguageSelection::All => true,
        LanguageSelection::Only(code) => &interview.interview_language == code,
    };

    let coding_hit = !criteria.coding_only || interview.is_coding_round_required;
    let reports_hit = !criteria.with_reports_only || interview.report_count > 0;

    term_hit && language_hit && coding_hit && reports_hit
}
