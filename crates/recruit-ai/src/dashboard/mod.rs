//! Recruiter dashboard over the remote AI interview platform.
//!
//! All data lives in [`DashboardState`]: `refresh` pulls interviews and
//! reports through the [`InterviewPlatform`] boundary and `mutate` applies
//! recruiter actions. The remaining modules are helpers over that snapshot:
//! grid narrowing and paging, rating badges, and serializable view assembly.

pub mod domain;
pub mod filter;
pub mod form;
pub mod language;
pub mod pager;
pub mod platform;
pub mod rating;
pub mod rollup;
pub mod roster;
pub mod router;
pub mod samples;
pub mod state;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{Candidate, CreateInterviewRequest, Interview, InterviewId, Report, Skill};
pub use filter::{filter, GridFilter, LanguageSelection};
pub use form::{validate_request, DraftCommand, DraftError, InterviewDraft};
pub use pager::{clamp_page, paginate, total_pages, GridPage, Pager, DEFAULT_PAGE_SIZE};
pub use platform::{
    ApiEnvelope, InterviewCreated, InterviewPlatform, Invitation, InviteCharge, InviteReceipt,
    PlatformError,
};
pub use rating::{classify_proctoring, classify_rating, score_tier, RatingTier};
pub use rollup::{aggregate, ReportRollup};
pub use roster::{CandidateRoster, RosterError};
pub use router::{dashboard_router, SharedDashboard};
pub use state::{DashboardAction, DashboardError, DashboardState, MutationOutcome};
pub use views::{
    grid_view, interview_card, report_card, report_cards, GridView, InterviewCardView,
    ReportCardView,
};
