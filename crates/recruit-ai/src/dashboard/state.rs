use std::collections::HashMap;
use std::sync::Arc;

use super::domain::{Candidate, CreateInterviewRequest, Interview, InterviewId, Report};
use super::language;
use super::pager::DEFAULT_PAGE_SIZE;
use super::platform::{InterviewCreated, InterviewPlatform, InviteReceipt, PlatformError};
use super::rollup::{aggregate, ReportRollup};
use super::samples;

/// Mutation requested by the recruiter, one variant per platform write.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    CreateInterview(CreateInterviewRequest),
    SendInvites {
        interview_id: InterviewId,
        candidates: Vec<Candidate>,
    },
}

/// Receipt for a successful mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    InterviewCreated(InterviewCreated),
    InvitesSent(InviteReceipt),
}

/// Error raised by dashboard state operations. All variants are recoverable:
/// the dashboard keeps its previously loaded data and the caller surfaces the
/// message.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("failed to load dashboard data: {0}")]
    Fetch(#[source] PlatformError),
    #[error("interview creation failed: {0}")]
    Create(#[source] PlatformError),
    #[error("sending invites failed: {0}")]
    Invite(#[source] PlatformError),
    #[error("no interview with id {0}")]
    UnknownInterview(InterviewId),
    #[error("invite batch has no candidates")]
    NoCandidates,
}

/// Explicit application state for the dashboard: the fetched interview and
/// report lists plus the platform handle that produced them. `refresh` and
/// `mutate` are the only operations that touch the platform; everything else
/// reads the in-memory snapshot.
pub struct DashboardState<P> {
    platform: Arc<P>,
    merge_samples: bool,
    page_size: usize,
    interviews: Vec<Interview>,
    reports: Vec<Report>,
}

impl<P> DashboardState<P>
where
    P: InterviewPlatform,
{
    /// Empty state that merges the bundled sample reports on refresh.
    pub fn new(platform: Arc<P>) -> Self {
        Self::with_sample_reports(platform, true)
    }

    pub fn with_sample_reports(platform: Arc<P>, merge_samples: bool) -> Self {
        Self {
            platform,
            merge_samples,
            page_size: DEFAULT_PAGE_SIZE,
            interviews: Vec::new(),
            reports: Vec::new(),
        }
    }

    /// Overrides the grid page size; zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Re-fetches both lists from the platform and recomputes every
    /// interview's derived report count. Counts include synthetic reports so
    /// the grid badge matches the visible report list. On failure the
    /// previously loaded data stays in place.
    pub fn refresh(&mut self) -> Result<(), DashboardError> {
        let interviews = self
            .platform
            .list_interviews()
            .map_err(DashboardError::Fetch)?;
        let mut reports = self.platform.list_reports().map_err(DashboardError::Fetch)?;

        if self.merge_samples {
            reports.extend(samples::sample_reports());
        }

        let counts: HashMap<InterviewId, usize> = aggregate(&interviews, &reports, false)
            .into_iter()
            .map(|(id, group)| (id, group.count()))
            .collect();

        self.interviews = interviews;
        self.reports = reports;
        for interview in &mut self.interviews {
            interview.report_count = counts
                .get(&interview.interview_id)
                .copied()
                .unwrap_or(0);
        }

        Ok(())
    }

    /// Applies one recruiter action. A successful mutation does not implicitly
    /// refresh; callers re-fetch when they want the new interview or counts to
    /// appear.
    pub fn mutate(&mut self, action: DashboardAction) -> Result<MutationOutcome, DashboardError> {
        match action {
            DashboardAction::CreateInterview(request) => {
                let created = self
                    .platform
                    .create_interview(&request)
                    .map_err(DashboardError::Create)?;
                Ok(MutationOutcome::InterviewCreated(created))
            }
            DashboardAction::SendInvites {
                interview_id,
                candidates,
            } => {
                if candidates.is_empty() {
                    return Err(DashboardError::NoCandidates);
                }
                if self.interview(&interview_id).is_none() {
                    return Err(DashboardError::UnknownInterview(interview_id));
                }

                let receipt = self
                    .platform
                    .send_invites(&interview_id, &candidates)
                    .map_err(DashboardError::Invite)?;
                Ok(MutationOutcome::InvitesSent(receipt))
            }
        }
    }

    pub fn interviews(&self) -> &[Interview] {
        &self.interviews
    }

    pub fn interview(&self, id: &InterviewId) -> Option<&Interview> {
        self.interviews
            .iter()
            .find(|interview| &interview.interview_id == id)
    }

    /// The merged report list in fetch order, optionally without synthetic
    /// placeholders.
    pub fn reports(&self, exclude_synthetic: bool) -> Vec<&Report> {
        self.reports
            .iter()
            .filter(|report| !(exclude_synthetic && report.synthetic))
            .collect()
    }

    pub fn rollup(&self, exclude_synthetic: bool) -> HashMap<InterviewId, ReportRollup<'_>> {
        aggregate(&self.interviews, &self.reports, exclude_synthetic)
    }

    pub fn reports_for(&self, id: &InterviewId, exclude_synthetic: bool) -> Vec<&Report> {
        self.reports
            .iter()
            .filter(|report| &report.interview_id == id)
            .filter(|report| !(exclude_synthetic && report.synthetic))
            .collect()
    }

    pub fn language_options(&self) -> Vec<String> {
        language::language_options(&self.interviews)
    }
}
