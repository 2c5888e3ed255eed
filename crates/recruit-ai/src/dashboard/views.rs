use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use super::domain::{CustomQuestionEvaluation, Evaluation, Interview, Report};
use super::filter::{filter, GridFilter};
use super::language;
use super::pager::{clamp_page, paginate, total_pages};
use super::rating::{classify_proctoring, classify_rating, RatingTier};

/// Grid card for one interview.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewCardView {
    pub interview_id: String,
    pub interview_name: String,
    pub language: String,
    pub language_label: String,
    pub coding_round: bool,
    pub proctoring: bool,
    pub status: String,
    pub invite_url: String,
    pub date_created: DateTime<Utc>,
    pub skills: Vec<String>,
    pub report_count: usize,
}

/// One page of the interview grid plus the controls the page needs: the page
/// count for the pager and the language codes for the dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub page: usize,
    pub total_pages: usize,
    pub total_matching: usize,
    pub language_options: Vec<String>,
    pub interviews: Vec<InterviewCardView>,
}

/// Evaluation entry annotated with its badge tier.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationView {
    pub skill: String,
    pub feedback: String,
    pub rating: String,
    pub tier: RatingTier,
    pub tier_label: &'static str,
}

/// Custom-question entry annotated with its badge tier.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionEvaluationView {
    pub question: String,
    pub answer: String,
    pub feedback: String,
    pub rating: String,
    pub tier: RatingTier,
    pub tier_label: &'static str,
}

/// Full report card as presented in the report viewer.
#[derive(Debug, Clone, Serialize)]
pub struct ReportCardView {
    pub report_id: String,
    pub interview_id: String,
    pub interview_name: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub report_date: DateTime<Utc>,
    pub report_url: String,
    pub recording_url: String,
    pub proctoring_label: String,
    pub proctoring_tier: RatingTier,
    pub proctoring_tier_label: &'static str,
    pub synthetic: bool,
    pub technical_skills: Vec<EvaluationView>,
    pub soft_skills: Vec<EvaluationView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding_skills: Option<Vec<EvaluationView>>,
    pub custom_questions: Vec<QuestionEvaluationView>,
}

/// Assembles the grid for one request: narrows the interview set, clamps the
/// requested page into range, and slices the cards. Language options always
/// come from the full set so narrowing never empties the dropdown.
pub fn grid_view(
    interviews: &[Interview],
    criteria: &GridFilter,
    requested_page: usize,
    page_size: usize,
) -> GridView {
    let matching = filter(interviews, criteria);
    let pages = total_pages(matching.len(), page_size);
    let page = clamp_page(requested_page, pages);
    let slice = paginate(&matching, page_size, page);

    GridView {
        page,
        total_pages: slice.total_pages,
        total_matching: matching.len(),
        language_options: language::language_options(interviews),
        interviews: slice.items.iter().map(|interview| interview_card(interview)).collect(),
    }
}

pub fn interview_card(interview: &Interview) -> InterviewCardView {
    InterviewCardView {
        interview_id: interview.interview_id.as_str().to_string(),
        interview_name: interview.interview_name.clone(),
        language: interview.interview_language.clone(),
        language_label: language::display_name(&interview.interview_language).to_string(),
        coding_round: interview.is_coding_round_required,
        proctoring: interview.is_proctoring_required,
        status: interview.status.clone(),
        invite_url: interview.invite_url.clone(),
        date_created: interview.date_created,
        skills: interview.skills.iter().map(|skill| skill.name.clone()).collect(),
        report_count: interview.report_count,
    }
}

pub fn report_cards(reports: &[&Report]) -> Vec<ReportCardView> {
    reports.iter().map(|report| report_card(report)).collect()
}

pub fn report_card(report: &Report) -> ReportCardView {
    let proctoring_label = format!("Proctoring Score: {}", report.proctoring_score);
    let proctoring_tier = badge_tier(&proctoring_label, true);

    ReportCardView {
        report_id: report.report_id.clone(),
        interview_id: report.interview_id.as_str().to_string(),
        interview_name: report.interview_name.clone(),
        candidate_name: report.candidate_name.clone(),
        candidate_email: report.candidate_email_id.clone(),
        report_date: report.report_date,
        report_url: report.report_url.clone(),
        recording_url: report.interview_recording_url.clone(),
        proctoring_label,
        proctoring_tier,
        proctoring_tier_label: proctoring_tier.label(),
        synthetic: report.synthetic,
        technical_skills: evaluation_views(&report.technical_skills_evaluation),
        soft_skills: evaluation_views(&report.soft_skills_evaluation),
        coding_skills: report
            .coding_skills_evaluation
            .as_deref()
            .map(evaluation_views),
        custom_questions: report
            .custom_question_evaluation
            .iter()
            .map(question_view)
            .collect(),
    }
}

/// Tier for any badge label. Proctoring labels embed a numeric score; a label
/// that fails to parse is logged and rendered neutral instead of bubbling up.
pub fn badge_tier(label: &str, proctoring_score: bool) -> RatingTier {
    if proctoring_score {
        match classify_proctoring(label) {
            Ok(tier) => tier,
            Err(error) => {
                warn!(%error, "unreadable proctoring label, falling back to neutral badge");
                RatingTier::Neutral
            }
        }
    } else {
        classify_rating(label)
    }
}

fn evaluation_views(evaluations: &[Evaluation]) -> Vec<EvaluationView> {
    evaluations
        .iter()
        .map(|entry| {
            let tier = badge_tier(&entry.ai_evaluation.rating, false);
            EvaluationView {
                skill: entry.skill.clone(),
                feedback: entry.ai_evaluation.feedback.clone(),
                rating: entry.ai_evaluation.rating.clone(),
                tier,
                tier_label: tier.label(),
            }
        })
        .collect()
}

fn question_view(entry: &CustomQuestionEvaluation) -> QuestionEvaluationView {
    let tier = badge_tier(&entry.ai_evaluation.rating, false);
    QuestionEvaluationView {
        question: entry.question_text.clone(),
        answer: entry.answer_text.clone(),
        feedback: entry.ai_evaluation.feedback.clone(),
        rating: entry.ai_evaluation.rating.clone(),
        tier,
        tier_label: tier.label(),
    }
}
