use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::{Candidate, CreateInterviewRequest, InterviewId};
use super::filter::{GridFilter, LanguageSelection};
use super::form;
use super::platform::InterviewPlatform;
use super::state::{DashboardAction, DashboardError, DashboardState, MutationOutcome};
use super::views::{grid_view, report_cards};

/// Handle shared between the HTTP layer and whoever owns the dashboard state.
pub type SharedDashboard<P> = Arc<Mutex<DashboardState<P>>>;

/// Query parameters accepted by the interview grid endpoint. Every parameter
/// is optional; omitted criteria leave the grid unnarrowed.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GridQuery {
    pub(crate) search: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) coding: Option<bool>,
    pub(crate) has_reports: Option<bool>,
    pub(crate) page: Option<usize>,
    pub(crate) page_size: Option<usize>,
}

impl GridQuery {
    fn criteria(&self) -> GridFilter {
        GridFilter {
            term: self.search.clone().unwrap_or_default(),
            language: self
                .language
                .as_deref()
                .map(LanguageSelection::from_code)
                .unwrap_or_default(),
            coding_only: self.coding.unwrap_or(false),
            with_reports_only: self.has_reports.unwrap_or(false),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportsQuery {
    pub(crate) interview_id: Option<String>,
    pub(crate) include_synthetic: Option<bool>,
}

/// Request body for inviting candidates to an interview.
#[derive(Debug, Deserialize)]
pub(crate) struct InviteSubmission {
    pub(crate) candidates: Vec<Candidate>,
}

/// Router builder exposing the recruiter dashboard over HTTP.
pub fn dashboard_router<P>(state: SharedDashboard<P>) -> Router
where
    P: InterviewPlatform + 'static,
{
    Router::new()
        .route(
            "/api/v1/interviews",
            get(grid_handler::<P>).post(create_handler::<P>),
        )
        .route(
            "/api/v1/interviews/:interview_id/invites",
            post(invite_handler::<P>),
        )
        .route("/api/v1/reports", get(reports_handler::<P>))
        .with_state(state)
}

pub(crate) async fn grid_handler<P>(
    State(state): State<SharedDashboard<P>>,
    Query(query): Query<GridQuery>,
) -> Response
where
    P: InterviewPlatform + 'static,
{
    let mut dashboard = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return state_unavailable(),
    };

    if let Err(error) = dashboard.refresh() {
        return refresh_failure(error);
    }

    let page_size = query.page_size.unwrap_or_else(|| dashboard.page_size());
    let view = grid_view(
        dashboard.interviews(),
        &query.criteria(),
        query.page.unwrap_or(1),
        page_size,
    );
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn create_handler<P>(
    State(state): State<SharedDashboard<P>>,
    axum::Json(request): axum::Json<CreateInterviewRequest>,
) -> Response
where
    P: InterviewPlatform + 'static,
{
    if let Err(error) = form::validate_request(&request) {
        let payload = json!({
            "error": error.to_string(),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let mut dashboard = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return state_unavailable(),
    };

    match dashboard.mutate(DashboardAction::CreateInterview(request)) {
        Ok(MutationOutcome::InterviewCreated(created)) => {
            // The response carries the new identifiers either way; a failed
            // refresh only delays the grid catching up.
            if let Err(error) = dashboard.refresh() {
                warn!(%error, "interview created but the dashboard refresh failed");
            }
            (StatusCode::CREATED, axum::Json(created)).into_response()
        }
        Ok(MutationOutcome::InvitesSent(_)) => unexpected_outcome(),
        Err(error) => mutation_failure(error),
    }
}

pub(crate) async fn invite_handler<P>(
    State(state): State<SharedDashboard<P>>,
    Path(interview_id): Path<String>,
    axum::Json(submission): axum::Json<InviteSubmission>,
) -> Response
where
    P: InterviewPlatform + 'static,
{
    let mut dashboard = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return state_unavailable(),
    };

    // The interview id is checked against the loaded snapshot, so make sure
    // one exists before rejecting the batch as unknown.
    if let Err(error) = dashboard.refresh() {
        return refresh_failure(error);
    }

    let action = DashboardAction::SendInvites {
        interview_id: InterviewId(interview_id),
        candidates: submission.candidates,
    };
    match dashboard.mutate(action) {
        Ok(MutationOutcome::InvitesSent(receipt)) => {
            (StatusCode::OK, axum::Json(receipt)).into_response()
        }
        Ok(MutationOutcome::InterviewCreated(_)) => unexpected_outcome(),
        Err(error) => mutation_failure(error),
    }
}

pub(crate) async fn reports_handler<P>(
    State(state): State<SharedDashboard<P>>,
    Query(query): Query<ReportsQuery>,
) -> Response
where
    P: InterviewPlatform + 'static,
{
    let mut dashboard = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return state_unavailable(),
    };

    if let Err(error) = dashboard.refresh() {
        return refresh_failure(error);
    }

    let exclude_synthetic = !query.include_synthetic.unwrap_or(true);
    let reports = match &query.interview_id {
        Some(id) => dashboard.reports_for(&InterviewId(id.clone()), exclude_synthetic),
        None => dashboard.reports(exclude_synthetic),
    };
    (StatusCode::OK, axum::Json(report_cards(&reports))).into_response()
}

fn refresh_failure(error: DashboardError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
}

fn mutation_failure(error: DashboardError) -> Response {
    let status = match &error {
        DashboardError::UnknownInterview(_) => StatusCode::NOT_FOUND,
        DashboardError::NoCandidates => StatusCode::UNPROCESSABLE_ENTITY,
        DashboardError::Fetch(_) | DashboardError::Create(_) | DashboardError::Invite(_) => {
            StatusCode::BAD_GATEWAY
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

fn unexpected_outcome() -> Response {
    let payload = json!({
        "error": "mutation outcome did not match the requested action",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

fn state_unavailable() -> Response {
    let payload = json!({
        "error": "dashboard state unavailable",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
