use chrono::{DateTime, TimeZone, Utc};

use super::domain::{
    AiEvaluation, CustomQuestionEvaluation, Evaluation, InterviewId, Report, TranscriptEntry,
};

/// Interview ids the bundled reports attach to. Demo seeds reuse these so the
/// sample reports land on real grid cards; anywhere else the reports simply
/// aggregate as orphans.
pub const SAMPLE_BACKEND_INTERVIEW: &str = "itv-0001";
pub const SAMPLE_SUPPORT_INTERVIEW: &str = "itv-0002";

/// Placeholder reports merged into the live report list at refresh time so the
/// dashboard renders meaningfully before any candidate has finished an
/// interview. Every record carries the synthetic marker.
pub fn sample_reports() -> Vec<Report> {
    vec![backend_strong_candidate(), backend_weak_candidate(), support_candidate()]
}

fn backend_strong_candidate() -> Report {
    Report {
        report_id: "rpt-sample-001".to_string(),
        interview_id: InterviewId(SAMPLE_BACKEND_INTERVIEW.to_string()),
        interview_name: "Senior Backend Engineer".to_string(),
        candidate_id: "cand-sample-001".to_string(),
        candidate_name: "Asha Raman".to_string(),
        candidate_email_id: "asha.raman@example.com".to_string(),
        report_date: at(2026, 7, 18, 14, 30),
        report_url: "https://reports.example.com/rpt-sample-001".to_string(),
        interview_recording_url: "https://recordings.example.com/rpt-sample-001".to_string(),
        proctoring_score: 91,
        interview_transcript: vec![
            exchange("ai_interviewer", "Walk me through a service you scaled recently."),
            exchange(
                "candidate",
                "We sharded the ingest pipeline by tenant and moved hot paths onto a bounded queue.",
            ),
            exchange("ai_interviewer", "What failure mode worried you most during rollout?"),
        ],
        technical_skills_evaluation: vec![
            evaluation(
                "Rust",
                "Navigated ownership and async code without prompting.",
                "Highly experienced in systems programming",
            ),
            evaluation(
                "SQL",
                "Wrote window functions fluently and reasoned about indexes.",
                "Experienced with analytical workloads",
            ),
        ],
        soft_skills_evaluation: vec![evaluation(
            "Communication",
            "Structured answers, surfaced tradeoffs unprompted.",
            "Strong and concise communicator",
        )],
        coding_skills_evaluation: Some(vec![evaluation(
            "Algorithms",
            "Clean two-pointer solution with correct complexity analysis.",
            "Excellent problem decomposition",
        )]),
        custom_question_evaluation: vec![CustomQuestionEvaluation {
            question_text: "How do you roll back a bad schema migration?".to_string(),
            answer_text: "Ship expand/contract migrations so the old code keeps working."
                .to_string(),
            ai_evaluation: AiEvaluation {
                feedback: "Named the exact pattern and its operational caveats.".to_string(),
                rating: "Strong operational judgment".to_string(),
            },
        }],
        date_created: at(2026, 7, 18, 15, 5),
        date_modified: at(2026, 7, 18, 15, 5),
        status: "completed".to_string(),
        synthetic: true,
    }
}

fn backend_weak_candidate() -> Report {
    Report {
        report_id: "rpt-sample-002".to_string(),
        interview_id: InterviewId(SAMPLE_BACKEND_INTERVIEW.to_string()),
        interview_name: "Senior Backend Engineer".to_string(),
        candidate_id: "cand-sample-002".to_string(),
        candidate_name: "Diego Alvarez".to_string(),
        candidate_email_id: "diego.alvarez@example.com".to_string(),
        report_date: at(2026, 7, 21, 9, 0),
        report_url: "https://reports.example.com/rpt-sample-002".to_string(),
        interview_recording_url: "https://recordings.example.com/rpt-sample-002".to_string(),
        proctoring_score: 68,
        interview_transcript: vec![
            exchange("ai_interviewer", "How would you debug a slow endpoint?"),
            exchange("candidate", "I would add logging and look at the database first."),
        ],
        technical_skills_evaluation: vec![
            evaluation(
                "Rust",
                "Struggled with borrow checker questions beyond the basics.",
                "Not experienced with advanced ownership",
            ),
            evaluation(
                "SQL",
                "Solid joins and aggregation, less depth on query planning.",
                "Above average query design",
            ),
        ],
        soft_skills_evaluation: vec![evaluation(
            "Communication",
            "Answers were correct but needed prompting for detail.",
            "Average communicator",
        )],
        coding_skills_evaluation: Some(vec![evaluation(
            "Algorithms",
            "Reached a working solution after hints on the invariant.",
            "Below the bar for the senior level",
        )]),
        custom_question_evaluation: vec![CustomQuestionEvaluation {
            question_text: "How do you roll back a bad schema migration?".to_string(),
            answer_text: "Restore the database from the last backup.".to_string(),
            ai_evaluation: AiEvaluation {
                feedback: "Fallback-only answer; did not consider forward fixes.".to_string(),
                rating: "Below expectations for operational maturity".to_string(),
            },
        }],
        date_created: at(2026, 7, 21, 9, 40),
        date_modified: at(2026, 7, 21, 9, 40),
        status: "completed".to_string(),
        synthetic: true,
    }
}

fn support_candidate() -> Report {
    Report {
        report_id: "rpt-sample-003".to_string(),
        interview_id: InterviewId(SAMPLE_SUPPORT_INTERVIEW.to_string()),
        interview_name: "Customer Support Specialist".to_string(),
        candidate_id: "cand-sample-003".to_string(),
        candidate_name: "Mei Lin".to_string(),
        candidate_email_id: "mei.lin@example.com".to_string(),
        report_date: at(2026, 7, 25, 16, 15),
        report_url: "https://reports.example.com/rpt-sample-003".to_string(),
        interview_recording_url: "https://recordings.example.com/rpt-sample-003".to_string(),
        proctoring_score: 42,
        interview_transcript: vec![
            exchange("ai_interviewer", "A customer is angry about a double charge. What do you do?"),
            exchange("candidate", "Apologize, confirm the charge, and open a refund right away."),
        ],
        technical_skills_evaluation: vec![evaluation(
            "Ticketing systems",
            "Knew escalation paths and SLA tiers from previous roles.",
            "Experienced with tiered support queues",
        )],
        soft_skills_evaluation: vec![evaluation(
            "Empathy",
            "Acknowledged the customer before proposing a fix every time.",
            "Good instincts under pressure",
        )],
        coding_skills_evaluation: None,
        custom_question_evaluation: vec![CustomQuestionEvaluation {
            question_text: "Describe a time you turned around an unhappy customer.".to_string(),
            answer_text: "I kept a refunded customer by walking them through the billing fix."
                .to_string(),
            ai_evaluation: AiEvaluation {
                feedback: "Concrete story with a measurable outcome.".to_string(),
                rating: "Strong customer recovery example".to_string(),
            },
        }],
        date_created: at(2026, 7, 25, 16, 50),
        date_modified: at(2026, 7, 25, 16, 50),
        status: "completed".to_string(),
        synthetic: true,
    }
}

fn evaluation(skill: &str, feedback: &str, rating: &str) -> Evaluation {
    Evaluation {
        skill: skill.to_string(),
        ai_evaluation: AiEvaluation {
            feedback: feedback.to_string(),
            rating: rating.to_string(),
        },
    }
}

fn exchange(role: &str, content: &str) -> TranscriptEntry {
    TranscriptEntry {
        role: role.to_string(),
        content: content.to_string(),
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}
