use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::dashboard::domain::{
    AiEvaluation, Candidate, CreateInterviewRequest, Evaluation, Interview, InterviewId, Report,
    Skill,
};
use crate::dashboard::platform::{
    InterviewCreated, InterviewPlatform, Invitation, InviteCharge, InviteReceipt, PlatformError,
};
use crate::dashboard::router::dashboard_router;
use crate::dashboard::state::DashboardState;

pub(crate) fn skill(name: &str, description: &str) -> Skill {
    Skill {
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub(crate) fn candidate(name: &str, email: &str) -> Candidate {
    Candidate {
        name: name.to_string(),
        email: email.to_string(),
    }
}

pub(crate) fn interview(id: &str, name: &str, language: &str) -> Interview {
    Interview {
        interview_id: InterviewId(id.to_string()),
        interview_name: name.to_string(),
        employer_email_id: "recruiting@example.com".to_string(),
        skills: vec![
            skill("Rust", "Systems programming and async services"),
            skill("SQL", "Schema design and query tuning"),
        ],
        custom_questions: vec!["Why this role?".to_string()],
        interview_language: language.to_string(),
        can_change_interview_language: false,
        only_coding_round: false,
        is_coding_round_required: false,
        selected_coding_language: "python".to_string(),
        is_proctoring_required: true,
        invite_url: format!("https://interviews.example.com/{id}/join"),
        date_created: at(2026, 6, 1, 9, 0),
        date_modified: None,
        status: "active".to_string(),
        report_count: 0,
    }
}

pub(crate) fn coding_interview(id: &str, name: &str, language: &str) -> Interview {
    let mut built = interview(id, name, language);
    built.is_coding_round_required = true;
    built
}

pub(crate) fn report(id: &str, interview_id: &str, candidate_name: &str) -> Report {
    Report {
        report_id: id.to_string(),
        interview_id: InterviewId(interview_id.to_string()),
        interview_name: "Senior Backend Engineer".to_string(),
        candidate_id: format!("cand-{id}"),
        candidate_name: candidate_name.to_string(),
        candidate_email_id: format!(
            "{}@example.com",
            candidate_name.to_lowercase().replace(' ', ".")
        ),
        report_date: at(2026, 7, 10, 11, 30),
        report_url: format!("https://reports.example.com/{id}"),
        interview_recording_url: format!("https://recordings.example.com/{id}"),
        proctoring_score: 82,
        interview_transcript: Vec::new(),
        technical_skills_evaluation: vec![Evaluation {
            skill: "Rust".to_string(),
            ai_evaluation: AiEvaluation {
                feedback: "Handled ownership questions comfortably.".to_string(),
                rating: "Highly experienced in systems programming".to_string(),
            },
        }],
        soft_skills_evaluation: Vec::new(),
        coding_skills_evaluation: None,
        custom_question_evaluation: Vec::new(),
        date_created: at(2026, 7, 10, 12, 0),
        date_modified: at(2026, 7, 10, 12, 0),
        status: "completed".to_string(),
        synthetic: false,
    }
}

pub(crate) fn synthetic_report(id: &str, interview_id: &str, candidate_name: &str) -> Report {
    let mut built = report(id, interview_id, candidate_name);
    built.synthetic = true;
    built
}

pub(crate) fn creation_request() -> CreateInterviewRequest {
    CreateInterviewRequest {
        interview_name: "Platform Engineer".to_string(),
        employer_email_id: "hiring@example.com".to_string(),
        skills: vec![skill("Rust", "Own the ingest services end to end")],
        custom_questions: vec!["Describe a production incident you led.".to_string()],
        interview_language: "en".to_string(),
        can_change_interview_language: false,
        only_coding_round: false,
        is_coding_round_required: true,
        selected_coding_language: "rust".to_string(),
        is_proctoring_required: true,
    }
}

/// Three interviews and three reports covering the interesting cases: a coding
/// interview with two reports, a Spanish interview with one synthetic report,
/// and an interview nothing references yet.
pub(crate) fn seeded_platform() -> Arc<MemoryPlatform> {
    Arc::new(MemoryPlatform::with_data(
        vec![
            coding_interview("itv-1", "Senior Backend Engineer", "en"),
            interview("itv-2", "Customer Support Specialist", "es"),
            interview("itv-3", "Data Engineer", "en"),
        ],
        vec![
            report("rpt-1", "itv-1", "Asha Raman"),
            report("rpt-2", "itv-1", "Diego Alvarez"),
            synthetic_report("rpt-3", "itv-2", "Mei Lin"),
        ],
    ))
}

pub(crate) fn dashboard(platform: Arc<MemoryPlatform>) -> DashboardState<MemoryPlatform> {
    DashboardState::with_sample_reports(platform, false)
}

pub(crate) fn dashboard_router_with_state<P>(state: DashboardState<P>) -> axum::Router
where
    P: InterviewPlatform + 'static,
{
    dashboard_router(Arc::new(Mutex::new(state)))
}

/// Platform stub backed by in-memory lists. Created interviews become visible
/// to later `list_interviews` calls, and `set_offline` makes every call fail
/// with a transport error until cleared.
#[derive(Default, Clone)]
pub(crate) struct MemoryPlatform {
    interviews: Arc<Mutex<Vec<Interview>>>,
    reports: Arc<Mutex<Vec<Report>>>,
    created: Arc<Mutex<Vec<CreateInterviewRequest>>>,
    invited: Arc<Mutex<Vec<(InterviewId, Vec<Candidate>)>>>,
    offline: Arc<Mutex<bool>>,
}

impl MemoryPlatform {
    pub(crate) fn with_data(interviews: Vec<Interview>, reports: Vec<Report>) -> Self {
        let platform = Self::default();
        *platform.interviews.lock().expect("platform mutex poisoned") = interviews;
        *platform.reports.lock().expect("platform mutex poisoned") = reports;
        platform
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        *self.offline.lock().expect("platform mutex poisoned") = offline;
    }

    pub(crate) fn created(&self) -> Vec<CreateInterviewRequest> {
        self.created.lock().expect("platform mutex poisoned").clone()
    }

    pub(crate) fn invited(&self) -> Vec<(InterviewId, Vec<Candidate>)> {
        self.invited.lock().expect("platform mutex poisoned").clone()
    }

    fn check_online(&self) -> Result<(), PlatformError> {
        if *self.offline.lock().expect("platform mutex poisoned") {
            Err(PlatformError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl InterviewPlatform for MemoryPlatform {
    fn list_interviews(&self) -> Result<Vec<Interview>, PlatformError> {
        self.check_online()?;
        Ok(self.interviews.lock().expect("platform mutex poisoned").clone())
    }

    fn list_reports(&self) -> Result<Vec<Report>, PlatformError> {
        self.check_online()?;
        Ok(self.reports.lock().expect("platform mutex poisoned").clone())
    }

    fn create_interview(
        &self,
        request: &CreateInterviewRequest,
    ) -> Result<InterviewCreated, PlatformError> {
        self.check_online()?;
        let mut created = self.created.lock().expect("platform mutex poisoned");
        created.push(request.clone());

        let id = InterviewId(format!("itv-{:04}", 1000 + created.len()));
        let invite_url = format!("https://interviews.example.com/{id}/join");
        self.interviews
            .lock()
            .expect("platform mutex poisoned")
            .push(materialize(&id, &invite_url, request));

        Ok(InterviewCreated {
            interview_id: id,
            invite_url,
        })
    }

    fn send_invites(
        &self,
        interview_id: &InterviewId,
        candidates: &[Candidate],
    ) -> Result<InviteReceipt, PlatformError> {
        self.check_online()?;
        let mut invited = self.invited.lock().expect("platform mutex poisoned");
        invited.push((interview_id.clone(), candidates.to_vec()));

        Ok(InviteReceipt {
            charge: InviteCharge {
                currency: "USD".to_string(),
                amount_paid: 4.0 * candidates.len() as f64,
                transaction_id: format!("txn-{:04}", invited.len()),
            },
            invitations: candidates
                .iter()
                .enumerate()
                .map(|(index, candidate)| Invitation {
                    candidate_id: format!("cand-{:03}", index + 1),
                    candidate_email: candidate.email.clone(),
                    invite_url: format!("https://interviews.example.com/{interview_id}/join"),
                })
                .collect(),
        })
    }
}

/// Platform that fails every call with a transport error.
pub(crate) struct OfflinePlatform;

impl InterviewPlatform for OfflinePlatform {
    fn list_interviews(&self) -> Result<Vec<Interview>, PlatformError> {
        Err(PlatformError::Transport("connection refused".to_string()))
    }

    fn list_reports(&self) -> Result<Vec<Report>, PlatformError> {
        Err(PlatformError::Transport("connection refused".to_string()))
    }

    fn create_interview(
        &self,
        _request: &CreateInterviewRequest,
    ) -> Result<InterviewCreated, PlatformError> {
        Err(PlatformError::Transport("connection refused".to_string()))
    }

    fn send_invites(
        &self,
        _interview_id: &InterviewId,
        _candidates: &[Candidate],
    ) -> Result<InviteReceipt, PlatformError> {
        Err(PlatformError::Transport("connection refused".to_string()))
    }
}

/// Platform that serves one interview but refuses every write with a
/// false-status style rejection.
pub(crate) struct RejectingPlatform;

impl InterviewPlatform for RejectingPlatform {
    fn list_interviews(&self) -> Result<Vec<Interview>, PlatformError> {
        Ok(vec![interview("itv-1", "Senior Backend Engineer", "en")])
    }

    fn list_reports(&self) -> Result<Vec<Report>, PlatformError> {
        Ok(Vec::new())
    }

    fn create_interview(
        &self,
        _request: &CreateInterviewRequest,
    ) -> Result<InterviewCreated, PlatformError> {
        Err(PlatformError::Rejected("interview quota exhausted".to_string()))
    }

    fn send_invites(
        &self,
        _interview_id: &InterviewId,
        _candidates: &[Candidate],
    ) -> Result<InviteReceipt, PlatformError> {
        Err(PlatformError::Rejected("invite quota exhausted".to_string()))
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn materialize(id: &InterviewId, invite_url: &str, request: &CreateInterviewRequest) -> Interview {
    Interview {
        interview_id: id.clone(),
        interview_name: request.interview_name.clone(),
        employer_email_id: request.employer_email_id.clone(),
        skills: request.skills.clone(),
        custom_questions: request.custom_questions.clone(),
        interview_language: request.interview_language.clone(),
        can_change_interview_language: request.can_change_interview_language,
        only_coding_round: request.only_coding_round,
        is_coding_round_required: request.is_coding_round_required,
        selected_coding_language: request.selected_coding_language.clone(),
        is_proctoring_required: request.is_proctoring_required,
        invite_url: invite_url.to_string(),
        date_created: at(2026, 8, 1, 10, 0),
        date_modified: None,
        status: "active".to_string(),
        report_count: 0,
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}
