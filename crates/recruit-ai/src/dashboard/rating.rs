use serde::{Deserialize, Serialize};

/// Severity tier attached to evaluation ratings for display emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    Positive,
    Moderate,
    Negative,
    Neutral,
}

impl RatingTier {
    pub const fn label(self) -> &'static str {
        match self {
            RatingTier::Positive => "positive",
            RatingTier::Moderate => "moderate",
            RatingTier::Negative => "negative",
            RatingTier::Neutral => "neutral",
        }
    }
}

// Keyword groups from the grading rubric, checked in rubric order with the
// first match winning. The rubric lists "good" and "strong" under both the
// positive and moderate groups; because the positive group is checked first,
// the moderate copies are unreachable. Kept as published.
const POSITIVE_KEYWORDS: [&str; 4] = ["highly experienced", "excellent", "good", "strong"];
const NEGATIVE_KEYWORDS: [&str; 4] = ["not experienced", "poor", "below", "weak"];
const MODERATE_KEYWORDS: [&str; 4] = ["experienced", "above average", "good", "strong"];

/// Classifies a free-text rating label by case-insensitive keyword matching.
/// Labels matching no group fall back to the neutral tier.
pub fn classify_rating(label: &str) -> RatingTier {
    let normalized = label.to_lowercase();
    if POSITIVE_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
        RatingTier::Positive
    } else if NEGATIVE_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
        RatingTier::Negative
    } else if MODERATE_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
        RatingTier::Moderate
    } else {
        RatingTier::Neutral
    }
}

/// Tier for a numeric proctoring score. Scores never map to the moderate tier.
pub const fn score_tier(score: u8) -> RatingTier {
    if score <= 50 {
        RatingTier::Negative
    } else if score <= 75 {
        RatingTier::Neutral
    } else {
        RatingTier::Positive
    }
}

/// Raised when a proctoring label does not carry a numeric suffix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed proctoring score label: {label:?}")]
pub struct ScoreLabelError {
    pub label: String,
}

/// Parses a proctoring label of the form `"<prefix>: <number>"` and classifies
/// the embedded score. Callers treat the error as a logged condition and fall
/// back to the neutral tier rather than surfacing it.
pub fn classify_proctoring(label: &str) -> Result<RatingTier, ScoreLabelError> {
    let score = label
        .split_once(':')
        .and_then(|(_, suffix)| suffix.trim().parse::<u8>().ok())
        .ok_or_else(|| ScoreLabelError {
            label: label.to_string(),
        })?;

    Ok(score_tier(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proctoring_scores_map_to_three_tiers() {
        assert_eq!(classify_proctoring("Proctoring Score: 42"), Ok(RatingTier::Negative));
        assert_eq!(classify_proctoring("Proctoring Score: 60"), Ok(RatingTier::Neutral));
        assert_eq!(classify_proctoring("Proctoring Score: 90"), Ok(RatingTier::Positive));
    }

    #[test]
    fn score_boundaries_sit_on_50_and_75() {
        assert_eq!(score_tier(50), RatingTier::Negative);
        assert_eq!(score_tier(51), RatingTier::Neutral);
        assert_eq!(score_tier(75), RatingTier::Neutral);
        assert_eq!(score_tier(76), RatingTier::Positive);
    }

    #[test]
    fn malformed_proctoring_labels_are_errors() {
        assert!(classify_proctoring("Proctoring Score").is_err());
        assert!(classify_proctoring("Proctoring Score: high").is_err());
        assert!(classify_proctoring("Proctoring Score: ").is_err());
    }

    #[test]
    fn keyword_labels_classify_case_insensitively() {
        assert_eq!(classify_rating("Highly experienced in Go"), RatingTier::Positive);
        assert_eq!(classify_rating("EXCELLENT collaborator"), RatingTier::Positive);
        assert_eq!(classify_rating("Not experienced"), RatingTier::Negative);
        assert_eq!(classify_rating("Below expectations"), RatingTier::Negative);
        assert_eq!(classify_rating("Average communicator"), RatingTier::Neutral);
    }

    #[test]
    fn moderate_tier_requires_the_secondary_keywords() {
        assert_eq!(classify_rating("Experienced with Kubernetes"), RatingTier::Moderate);
        assert_eq!(classify_rating("Above average problem solving"), RatingTier::Moderate);
    }

    #[test]
    fn negative_group_outranks_the_moderate_substring() {
        // "not experienced" contains "experienced"; group order decides.
        assert_eq!(classify_rating("Not experienced with SQL"), RatingTier::Negative);
    }

    #[test]
    fn duplicated_keywords_resolve_to_positive() {
        // "good" and "strong" sit in two groups; the positive group wins.
        assert_eq!(classify_rating("Good grasp of fundamentals"), RatingTier::Positive);
        assert_eq!(classify_rating("Strong debugging instincts"), RatingTier::Positive);
    }
}
