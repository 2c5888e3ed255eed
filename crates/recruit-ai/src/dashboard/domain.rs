use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for interviews issued by the remote platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterviewId(pub String);

impl InterviewId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InterviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named competency attached to an interview as a requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
}

/// Candidate contact used when sending interview invites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub email: String,
}

/// Payload submitted to the platform to create a new interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInterviewRequest {
    pub interview_name: String,
    pub employer_email_id: String,
    pub skills: Vec<Skill>,
    pub custom_questions: Vec<String>,
    pub interview_language: String,
    pub can_change_interview_language: bool,
    pub only_coding_round: bool,
    pub is_coding_round_required: bool,
    pub selected_coding_language: String,
    pub is_proctoring_required: bool,
}

/// An interview template recruiters share with candidates. The identifier,
/// invite URL, and timestamps are assigned by the platform at creation time;
/// interviews are never deleted through this dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub interview_id: InterviewId,
    pub interview_name: String,
    pub employer_email_id: String,
    pub skills: Vec<Skill>,
    pub custom_questions: Vec<String>,
    pub interview_language: String,
    pub can_change_interview_language: bool,
    pub only_coding_round: bool,
    pub is_coding_round_required: bool,
    pub selected_coding_language: String,
    pub is_proctoring_required: bool,
    pub invite_url: String,
    pub date_created: DateTime<Utc>,
    pub date_modified: Option<DateTime<Utc>>,
    pub status: String,
    /// Derived from the fetched report list; rewritten on every refresh.
    #[serde(default)]
    pub report_count: usize,
}

/// One exchange from the AI interviewer's conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: String,
    pub content: String,
}

/// AI-produced feedback and free-text rating for one skill or question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiEvaluation {
    pub feedback: String,
    pub rating: String,
}

/// Per-skill evaluation entry inside a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub skill: String,
    pub ai_evaluation: AiEvaluation,
}

/// Evaluation of a recruiter-supplied custom question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomQuestionEvaluation {
    pub question_text: String,
    pub answer_text: String,
    pub ai_evaluation: AiEvaluation,
}

/// The evaluation record produced after a candidate completes an interview.
/// Reports are immutable once fetched; the platform is the system of record.
/// Many reports may reference one interview, and a report may reference an
/// interview that is no longer in the fetched set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub report_id: String,
    pub interview_id: InterviewId,
    pub interview_name: String,
    pub candidate_id: String,
    pub candidate_name: String,
    pub candidate_email_id: String,
    pub report_date: DateTime<Utc>,
    pub report_url: String,
    pub interview_recording_url: String,
    pub proctoring_score: u8,
    pub interview_transcript: Vec<TranscriptEntry>,
    pub technical_skills_evaluation: Vec<Evaluation>,
    pub soft_skills_evaluation: Vec<Evaluation>,
    /// Absent when the interview had no coding round.
    pub coding_skills_evaluation: Option<Vec<Evaluation>>,
    pub custom_question_evaluation: Vec<CustomQuestionEvaluation>,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub status: String,
    /// Marks bundled placeholder records shipped for demonstrations.
    #[serde(default)]
    pub synthetic: bool,
}
