use super::domain::Interview;

/// Resolves an interview language code to its display name. Codes outside the
/// supported set pass through unchanged so new platform languages still render.
pub fn display_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "zh" => "Chinese",
        "ja" => "Japanese",
        "ko" => "Korean",
        "ar" => "Arabic",
        "hi" => "Hindi",
        "nl" => "Dutch",
        "pl" => "Polish",
        "sv" => "Swedish",
        "tr" => "Turkish",
        "vi" => "Vietnamese",
        "th" => "Thai",
        "id" => "Indonesian",
        "ms" => "Malay",
        other => other,
    }
}

/// Unique language codes present in the interview set, first occurrence first.
/// Drives the language dropdown next to the grid search box.
pub fn language_options(interviews: &[Interview]) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for interview in interviews {
        if !codes.iter().any(|code| code == &interview.interview_language) {
            codes.push(interview.interview_language.clone());
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::tests::common::interview;

    #[test]
    fn known_codes_resolve_to_display_names() {
        assert_eq!(display_name("en"), "English");
        assert_eq!(display_name("pt"), "Portuguese");
        assert_eq!(display_name("ms"), "Malay");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(display_name("tlh"), "tlh");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn options_are_unique_and_first_seen_ordered() {
        let interviews = vec![
            interview("a", "Backend Engineer", "en"),
            interview("b", "Data Analyst", "es"),
            interview("c", "Platform Engineer", "en"),
            interview("d", "QA Engineer", "fr"),
        ];

        assert_eq!(language_options(&interviews), vec!["en", "es", "fr"]);
    }

    #[test]
    fn options_empty_for_empty_set() {
        assert!(language_options(&[]).is_empty());
    }
}
