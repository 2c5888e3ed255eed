use chrono::{DateTime, TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use recruit_ai::dashboard::domain::{
    AiEvaluation, Candidate, CreateInterviewRequest, CustomQuestionEvaluation, Evaluation,
    Interview, InterviewId, Report, Skill,
};
use recruit_ai::dashboard::platform::{
    ApiEnvelope, InterviewCreated, InterviewPlatform, Invitation, InviteCharge, InviteReceipt,
    PlatformError,
};
use recruit_ai::dashboard::samples::{SAMPLE_BACKEND_INTERVIEW, SAMPLE_SUPPORT_INTERVIEW};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Self-contained stand-in for the remote interview platform so the service
/// runs without credentials. Responses travel through the same status envelope
/// the real API uses, including false-status rejections.
pub(crate) struct DemoPlatform {
    interviews: Mutex<Vec<Interview>>,
    reports: Mutex<Vec<Report>>,
    invites: Mutex<Vec<(InterviewId, Vec<Candidate>)>>,
}

impl DemoPlatform {
    pub(crate) fn seeded() -> Self {
        Self {
            interviews: Mutex::new(seed_interviews()),
            reports: Mutex::new(vec![seed_report()]),
            invites: Mutex::new(Vec::new()),
        }
    }
}

impl InterviewPlatform for DemoPlatform {
    fn list_interviews(&self) -> Result<Vec<Interview>, PlatformError> {
        let listed = self
            .interviews
            .lock()
            .expect("interview mutex poisoned")
            .clone();
        open_envelope(envelope(listed))
    }

    fn list_reports(&self) -> Result<Vec<Report>, PlatformError> {
        let listed = self.reports.lock().expect("report mutex poisoned").clone();
        open_envelope(envelope(listed))
    }

    fn create_interview(
        &self,
        request: &CreateInterviewRequest,
    ) -> Result<InterviewCreated, PlatformError> {
        let mut interviews = self.interviews.lock().expect("interview mutex poisoned");
        if interviews
            .iter()
            .any(|listed| listed.interview_name.eq_ignore_ascii_case(&request.interview_name))
        {
            return open_envelope(rejection(format!(
                "an interview named {:?} already exists",
                request.interview_name
            )));
        }

        let id = InterviewId(format!("itv-{:04}", interviews.len() + 1));
        let invite_url = format!("https://interviews.example.com/{id}/join");
        interviews.push(materialize(&id, &invite_url, request));

        open_envelope(envelope(InterviewCreated {
            interview_id: id,
            invite_url,
        }))
    }

    fn send_invites(
        &self,
        interview_id: &InterviewId,
        candidates: &[Candidate],
    ) -> Result<InviteReceipt, PlatformError> {
        let known = self
            .interviews
            .lock()
            .expect("interview mutex poisoned")
            .iter()
            .any(|listed| listed.interview_id == *interview_id);
        if !known {
            return open_envelope(rejection(format!(
                "no interview with id {interview_id} exists on the platform"
            )));
        }

        let mut invites = self.invites.lock().expect("invite mutex poisoned");
        invites.push((interview_id.clone(), candidates.to_vec()));

        let receipt = InviteReceipt {
            charge: InviteCharge {
                currency: "USD".to_string(),
                amount_paid: 4.0 * candidates.len() as f64,
                transaction_id: format!("txn-{:04}", invites.len()),
            },
            invitations: candidates
                .iter()
                .enumerate()
                .map(|(index, candidate)| Invitation {
                    candidate_id: format!("cand-{:04}", index + 1),
                    candidate_email: candidate.email.clone(),
                    invite_url: format!("https://interviews.example.com/{interview_id}/join"),
                })
                .collect(),
        };
        open_envelope(envelope(receipt))
    }
}

fn envelope<T>(data: T) -> ApiEnvelope<Option<T>> {
    ApiEnvelope {
        status: true,
        message: "success".to_string(),
        data: Some(data),
    }
}

fn rejection<T>(message: String) -> ApiEnvelope<Option<T>> {
    ApiEnvelope {
        status: false,
        message,
        data: None,
    }
}

/// Unwraps a platform envelope. A success envelope without a payload is a
/// platform bug surfaced as a rejection rather than a panic.
fn open_envelope<T>(envelope: ApiEnvelope<Option<T>>) -> Result<T, PlatformError> {
    envelope.into_data()?.ok_or_else(|| {
        PlatformError::Rejected("platform returned an empty success payload".to_string())
    })
}

pub(crate) fn parse_positive(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    if parsed == 0 {
        return Err("value must be at least 1".to_string());
    }
    Ok(parsed)
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
        date_created: Utc::now(),
        date_modified: None,
        status: "active".to_string(),
        report_count: 0,
    }
}

fn seed_interviews() -> Vec<Interview> {
    vec![
        seed_interview(
            SAMPLE_BACKEND_INTERVIEW,
            "Senior Backend Engineer",
            "en",
            true,
            &[
                ("Rust", "Async services and careful error handling"),
                ("Distributed Systems", "Consensus, retries, and backpressure"),
            ],
        ),
        seed_interview(
            SAMPLE_SUPPORT_INTERVIEW,
            "Customer Support Specialist",
            "es",
            false,
            &[
                ("Empathy", "De-escalating frustrated customers"),
                ("Product Knowledge", "Feature walkthroughs without notes"),
            ],
        ),
        seed_interview(
            "itv-0003",
            "Data Engineer",
            "en",
            false,
            &[("SQL", "Warehouse modelling and query tuning")],
        ),
    ]
}

fn seed_interview(
    id: &str,
    name: &str,
    language: &str,
    coding: bool,
    skills: &[(&str, &str)],
) -> Interview {
    Interview {
        interview_id: InterviewId(id.to_string()),
        interview_name: name.to_string(),
        employer_email_id: "recruiting@example.com".to_string(),
        skills: skills
            .iter()
            .map(|(skill, description)| Skill {
                name: skill.to_string(),
                description: description.to_string(),
            })
            .collect(),
        custom_questions: vec!["What drew you to this role?".to_string()],
        interview_language: language.to_string(),
        can_change_interview_language: false,
        only_coding_round: false,
        is_coding_round_required: coding,
        selected_coding_language: if coding { "rust" } else { "python" }.to_string(),
        is_proctoring_required: true,
        invite_url: format!("https://interviews.example.com/{id}/join"),
        date_created: at(2026, 5, 4, 9, 30),
        date_modified: None,
        status: "active".to_string(),
        report_count: 0,
    }
}

fn seed_report() -> Report {
    Report {
        report_id: "rpt-2001".to_string(),
        interview_id: InterviewId(SAMPLE_BACKEND_INTERVIEW.to_string()),
        interview_name: "Senior Backend Engineer".to_string(),
        candidate_id: "cand-2001".to_string(),
        candidate_name: "Asha Raman".to_string(),
        candidate_email_id: "asha.raman@example.com".to_string(),
        report_date: at(2026, 6, 12, 15, 45),
        report_url: "https://reports.example.com/rpt-2001".to_string(),
        interview_recording_url: "https://recordings.example.com/rpt-2001".to_string(),
        proctoring_score: 88,
        interview_transcript: Vec::new(),
        technical_skills_evaluation: vec![
            Evaluation {
                skill: "Rust".to_string(),
                ai_evaluation: AiEvaluation {
                    feedback: "Explained ownership and lifetimes with production examples."
                        .to_string(),
                    rating: "Highly experienced in systems programming".to_string(),
                },
            },
            Evaluation {
                skill: "Distributed Systems".to_string(),
                ai_evaluation: AiEvaluation {
                    feedback: "Reasoned about retries and idempotency, thinner on consensus."
                        .to_string(),
                    rating: "Experienced with distributed design".to_string(),
                },
            },
        ],
        soft_skills_evaluation: vec![Evaluation {
            skill: "Communication".to_string(),
            ai_evaluation: AiEvaluation {
                feedback: "Structured answers, checked assumptions before diving in.".to_string(),
                rating: "Strong communicator".to_string(),
            },
        }],
        coding_skills_evaluation: Some(vec![Evaluation {
            skill: "Algorithms".to_string(),
            ai_evaluation: AiEvaluation {
                feedback: "Solved both exercises, second needed a hint on complexity.".to_string(),
                rating: "Above average problem solving".to_string(),
            },
        }]),
        custom_question_evaluation: vec![CustomQuestionEvaluation {
            question_text: "What drew you to this role?".to_string(),
            answer_text: "I want to own a latency-sensitive service end to end.".to_string(),
            ai_evaluation: AiEvaluation {
                feedback: "Concrete motivation tied to the team's actual work.".to_string(),
                rating: "Good alignment with the role".to_string(),
            },
        }],
        date_created: at(2026, 6, 12, 16, 0),
        date_modified: at(2026, 6, 12, 16, 0),
        status: "completed".to_string(),
        synthetic: false,
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid seed timestamp")
}
