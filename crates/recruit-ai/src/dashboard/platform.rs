use serde::{Deserialize, Serialize};

use super::domain::{Candidate, CreateInterviewRequest, Interview, InterviewId, Report};

/// Status envelope wrapping every platform response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload, turning a false-status envelope into a rejection
    /// carrying the platform's message.
    pub fn into_data(self) -> Result<T, PlatformError> {
        if self.status {
            Ok(self.data)
        } else {
            Err(PlatformError::Rejected(self.message))
        }
    }
}

/// Identifiers assigned by the platform when an interview is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewCreated {
    pub interview_id: InterviewId,
    pub invite_url: String,
}

/// Billing line attached to a successful invite batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteCharge {
    pub currency: String,
    pub amount_paid: f64,
    pub transaction_id: String,
}

/// Per-candidate invite issued by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub candidate_id: String,
    pub candidate_email: String,
    pub invite_url: String,
}

/// Outcome of a send-invites call: what was charged and which invites exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteReceipt {
    pub charge: InviteCharge,
    pub invitations: Vec<Invitation>,
}

/// Remote interview platform abstraction so the dashboard can be exercised
/// without network access. Implementations translate transport failures and
/// false-status envelopes into [`PlatformError`].
pub trait InterviewPlatform: Send + Sync {
    fn list_interviews(&self) -> Result<Vec<Interview>, PlatformError>;
    fn list_reports(&self) -> Result<Vec<Report>, PlatformError>;
    fn create_interview(
        &self,
        request: &CreateInterviewRequest,
    ) -> Result<InterviewCreated, PlatformError>;
    fn send_invites(
        &self,
        interview_id: &InterviewId,
        candidates: &[Candidate],
    ) -> Result<InviteReceipt, PlatformError>;
}

/// Error enumeration for platform calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("platform transport failure: {0}")]
    Transport(String),
    #[error("platform rejected the request: {0}")]
    Rejected(String),
}
