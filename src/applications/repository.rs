use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    ApplicantProfile, ApplicationId, ApplicationStatus, LoanRequest, OfferId,
};

/// Repository record for one application: the applicant, what they asked
/// for, and where the workflow currently stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub profile: ApplicantProfile,
    pub request: LoanRequest,
    pub selected_offer: Option<OfferId>,
    /// Whether the applicant's final pick matched the top recommendation.
    pub picked_recommended: bool,
    pub score: f64,
    pub status: ApplicationStatus,
    pub manager_comment: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.id.clone(),
            status: self.status.label(),
            score: self.score,
            manager_comment: self.manager_comment.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub status: &'static str,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_comment: Option<String>,
}
