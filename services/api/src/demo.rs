use crate::infra::DemoPlatform;
use clap::Args;
use recruit_ai::dashboard::domain::{Candidate, InterviewId};
use recruit_ai::dashboard::filter::{GridFilter, LanguageSelection};
use recruit_ai::dashboard::form::{DraftCommand, InterviewDraft};
use recruit_ai::dashboard::pager::DEFAULT_PAGE_SIZE;
use recruit_ai::dashboard::roster::CandidateRoster;
use recruit_ai::dashboard::state::{DashboardAction, DashboardState, MutationOutcome};
use recruit_ai::dashboard::views::{
    grid_view, report_cards, EvaluationView, GridView, ReportCardView,
};
use recruit_ai::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct GridArgs {
    /// Narrow the grid to interviews matching this term (name or skill)
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Narrow to a single interview language code, e.g. en or es
    #[arg(long)]
    pub(crate) language: Option<String>,
    /// Show only interviews with a coding round
    #[arg(long)]
    pub(crate) coding: bool,
    /// Show only interviews that already have reports
    #[arg(long)]
    pub(crate) has_reports: bool,
    /// Grid page to render (pages start at 1)
    #[arg(long, value_parser = crate::infra::parse_positive)]
    pub(crate) page: Option<usize>,
    /// Interviews per page
    #[arg(long, value_parser = crate::infra::parse_positive)]
    pub(crate) page_size: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Only show reports for this interview id
    #[arg(long)]
    pub(crate) interview_id: Option<String>,
    /// Drop bundled sample reports from the listing
    #[arg(long)]
    pub(crate) exclude_synthetic: bool,
    /// Emit the report cards as pretty-printed JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Narrow the opening grid render to this term
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Interviews per page for grid renders
    #[arg(long, value_parser = crate::infra::parse_positive)]
    pub(crate) page_size: Option<usize>,
    /// CSV roster of candidates to invite (name and email columns)
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
    /// Skip the invite portion of the demo
    #[arg(long)]
    pub(crate) skip_invites: bool,
}

pub(crate) fn run_grid(args: GridArgs) -> Result<(), AppError> {
    let GridArgs {
        search,
        language,
        coding,
        has_reports,
        page,
        page_size,
    } = args;

    let mut state = demo_dashboard(page_size);
    state.refresh()?;

    let criteria = GridFilter {
        term: search.unwrap_or_default(),
        language: language
            .as_deref()
            .map(LanguageSelection::from_code)
            .unwrap_or_default(),
        coding_only: coding,
        with_reports_only: has_reports,
    };
    let view = grid_view(
        state.interviews(),
        &criteria,
        page.unwrap_or(1),
        state.page_size(),
    );
    render_grid(&view);
    Ok(())
}

pub(crate) fn run_reports(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        interview_id,
        exclude_synthetic,
        json,
    } = args;

    let mut state = demo_dashboard(None);
    state.refresh()?;

    let reports = match &interview_id {
        Some(id) => state.reports_for(&InterviewId(id.clone()), exclude_synthetic),
        None => state.reports(exclude_synthetic),
    };
    let cards = report_cards(&reports);

    if json {
        match serde_json::to_string_pretty(&cards) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
        return Ok(());
    }

    if cards.is_empty() {
        println!("No reports match the requested filters");
        return Ok(());
    }
    render_report_cards(&cards);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        search,
        page_size,
        roster_csv,
        skip_invites,
    } = args;

    println!("Recruiter dashboard demo");
    let mut state = demo_dashboard(page_size);
    state.refresh()?;

    let criteria = GridFilter {
        term: search.unwrap_or_default(),
        ..GridFilter::default()
    };
    let view = grid_view(state.interviews(), &criteria, 1, state.page_size());
    render_grid(&view);

    println!("\nCreating a new interview from a draft");
    let mut draft = InterviewDraft::new();
    for command in demo_draft_commands() {
        if let Err(err) = draft.apply(command) {
            println!("  Draft command failed: {err}");
            return Ok(());
        }
    }
    let request = match draft.build() {
        Ok(request) => request,
        Err(err) => {
            println!("  Draft incomplete: {err}");
            return Ok(());
        }
    };
    println!(
        "- Submitting {:?} with {} skills",
        request.interview_name,
        request.skills.len()
    );

    let created = match state.mutate(DashboardAction::CreateInterview(request)) {
        Ok(MutationOutcome::InterviewCreated(created)) => created,
        Ok(other) => {
            println!("  Unexpected mutation outcome: {other:?}");
            return Ok(());
        }
        Err(err) => {
            println!("  Creation rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Platform assigned {} -> share {}",
        created.interview_id, created.invite_url
    );

    state.refresh()?;
    println!("- Grid now tracks {} interviews", state.interviews().len());

    if !skip_invites {
        println!("\nInviting candidates");
        let candidates = match roster_csv {
            Some(path) => match CandidateRoster::from_path(&path) {
                Ok(candidates) => candidates,
                Err(err) => {
                    println!("  Roster unusable: {err}");
                    return Ok(());
                }
            },
            None => demo_candidates(),
        };
        println!(
            "- Sending {} invites for {}",
            candidates.len(),
            created.interview_id
        );

        match state.mutate(DashboardAction::SendInvites {
            interview_id: created.interview_id.clone(),
            candidates,
        }) {
            Ok(MutationOutcome::InvitesSent(receipt)) => {
                println!(
                    "- Charged {} {:.2} (transaction {})",
                    receipt.charge.currency, receipt.charge.amount_paid,
                    receipt.charge.transaction_id
                );
                for invitation in &receipt.invitations {
                    println!(
                        "  - {} -> {}",
                        invitation.candidate_email, invitation.invite_url
                    );
                }
            }
            Ok(other) => println!("  Unexpected mutation outcome: {other:?}"),
            Err(err) => println!("  Invite batch rejected: {err}"),
        }
    }

    println!("\nReport cards (sample data included)");
    let reports = state.reports(false);
    let cards = report_cards(&reports);
    render_report_cards(&cards);

    if let Some(card) = cards.first() {
        match serde_json::to_string_pretty(card) {
            Ok(payload) => println!("\nFirst report payload:\n{payload}"),
            Err(err) => println!("\nFirst report payload unavailable: {err}"),
        }
    }

    Ok(())
}

fn demo_dashboard(page_size: Option<usize>) -> DashboardState<DemoPlatform> {
    DashboardState::with_sample_reports(Arc::new(DemoPlatform::seeded()), true)
        .with_page_size(page_size.unwrap_or(DEFAULT_PAGE_SIZE))
}

fn demo_draft_commands() -> Vec<DraftCommand> {
    vec![
        DraftCommand::Name("Platform Engineer".to_string()),
        DraftCommand::EmployerEmail("hiring@example.com".to_string()),
        DraftCommand::SkillName(0, "Rust".to_string()),
        DraftCommand::SkillDescription(0, "Own the ingest pipeline end to end".to_string()),
        DraftCommand::AddSkill,
        DraftCommand::SkillName(1, "Kubernetes".to_string()),
        DraftCommand::SkillDescription(1, "Operate the clusters the services run on".to_string()),
        DraftCommand::Question(0, "Walk through an incident you handled.".to_string()),
        DraftCommand::CodingRoundRequired(true),
        DraftCommand::CodingLanguage("rust".to_string()),
    ]
}

fn demo_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@example.com".to_string(),
        },
        Candidate {
            name: "Jonas Weber".to_string(),
            email: "jonas.weber@example.com".to_string(),
        },
    ]
}

fn render_grid(view: &GridView) {
    println!("\nInterview grid");
    if view.interviews.is_empty() {
        println!("No interviews match the current criteria");
        return;
    }

    println!(
        "Page {} of {} ({} matching interviews)",
        view.page, view.total_pages, view.total_matching
    );
    println!("Languages available: {}", view.language_options.join(", "));

    for card in &view.interviews {
        println!("\n{} [{}]", card.interview_name, card.interview_id);
        println!(
            "  Language: {} | Coding round: {} | Proctoring: {}",
            card.language_label,
            if card.coding_round { "yes" } else { "no" },
            if card.proctoring { "yes" } else { "no" }
        );
        if !card.skills.is_empty() {
            println!("  Skills: {}", card.skills.join(", "));
        }
        println!(
            "  Reports: {} | Invite link: {}",
            card.report_count, card.invite_url
        );
    }
}

fn render_report_cards(cards: &[ReportCardView]) {
    for card in cards {
        println!(
            "\n{} - {} [{}]",
            card.candidate_name, card.interview_name, card.report_id
        );
        let marker = if card.synthetic { " (sample data)" } else { "" };
        println!(
            "  {} [{}]{}",
            card.proctoring_label, card.proctoring_tier_label, marker
        );
        println!(
            "  Interviewed {} | Recording: {}",
            card.report_date.format("%Y-%m-%d %H:%M"),
            card.recording_url
        );

        render_evaluations("Technical skills", &card.technical_skills);
        render_evaluations("Soft skills", &card.soft_skills);
        if let Some(coding) = &card.coding_skills {
            render_evaluations("Coding exercises", coding);
        }

        if !card.custom_questions.is_empty() {
            println!("  Custom questions:");
            for entry in &card.custom_questions {
                println!("    - {} [{}]", entry.question, entry.tier_label);
                println!("      Answer: {}", entry.answer);
            }
        }
    }
}

fn render_evaluations(title: &str, entries: &[EvaluationView]) {
    if entries.is_empty() {
        return;
    }

    println!("  {title}:");
    for entry in entries {
        println!(
            "    - {} [{}]: {}",
            entry.skill, entry.tier_label, entry.feedback
        );
    }
}
