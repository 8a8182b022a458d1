use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    ApplicantProfile, ApplicationId, ApplicationStatus, LoanOffer, LoanRequest, OfferId,
};
use super::engine::{
    CustomOffer, EngineError, RecommendationEngine, ScoredOffer, ScoringConfig,
};
use super::repository::{ApplicationRecord, ApplicationRepository, RepositoryError};
use crate::rng::UniformSource;

/// Service composing the offer catalog, the recommendation engine, and a
/// storage backend into the application lifecycle: suggest, pick, review.
pub struct LoanApplicationService<R> {
    catalog: Vec<LoanOffer>,
    repository: Arc<R>,
    engine: RecommendationEngine,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<R> LoanApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(catalog: Vec<LoanOffer>, repository: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            catalog,
            repository,
            engine: RecommendationEngine::new(config),
        }
    }

    pub fn catalog(&self) -> &[LoanOffer] {
        &self.catalog
    }

    /// Submit a new application: rank the catalog, tentatively select the top
    /// offer, and store the record as suggested. Returns the stored record
    /// together with the full ranking so callers can present alternatives.
    pub fn submit(
        &self,
        profile: ApplicantProfile,
        request: LoanRequest,
    ) -> Result<(ApplicationRecord, Vec<ScoredOffer>), ApplicationServiceError> {
        let ranking = self.engine.rank(
            &self.catalog,
            request.amount,
            request.tenure_months,
            request.flexible,
        )?;

        let top = ranking.first();
        let score = match top {
            Some(scored) => self.engine.affordability(
                &profile,
                &scored.offer,
                request.amount,
                request.tenure_months,
            )?,
            // An empty catalog is not an error; the application simply starts
            // unscored.
            None => 0.0,
        };

        let record = ApplicationRecord {
            id: next_application_id(),
            profile,
            request,
            selected_offer: top.map(|scored| scored.offer.id),
            picked_recommended: false,
            score,
            status: ApplicationStatus::Suggested,
            manager_comment: None,
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            application = %stored.id.0,
            applicant = %stored.profile.email,
            amount = stored.request.amount,
            status = stored.status.label(),
            "application submitted"
        );

        Ok((stored, ranking))
    }

    /// Synthesize custom variants of a catalog offer for a stored request.
    pub fn custom_offers(
        &self,
        application_id: &ApplicationId,
        base_offer_id: OfferId,
        draws: &mut dyn UniformSource,
    ) -> Result<Vec<CustomOffer>, ApplicationServiceError> {
        let record = self.fetch_record(application_id)?;
        let base = self.offer(base_offer_id)?;

        Ok(self.engine.custom_offers(
            base,
            record.request.amount,
            record.request.tenure_months,
            draws,
        ))
    }

    /// Record the applicant's pick and queue the application for review.
    /// Whether the pick matched the recommendation is derived from a fresh
    /// non-flexible ranking, not from the stored suggestion.
    pub fn select(
        &self,
        application_id: &ApplicationId,
        offer_id: OfferId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let mut record = self.fetch_record(application_id)?;
        self.offer(offer_id)?;

        let ranking = self.engine.rank(
            &self.catalog,
            record.request.amount,
            record.request.tenure_months,
            false,
        )?;
        let top_id = ranking.first().map(|scored| scored.offer.id);

        record.selected_offer = Some(offer_id);
        record.picked_recommended = top_id == Some(offer_id);
        record.status = ApplicationStatus::Pending;
        self.repository.update(record.clone())?;

        info!(
            application = %record.id.0,
            applicant = %record.profile.email,
            offer = offer_id.0,
            picked_recommended = record.picked_recommended,
            status = record.status.label(),
            "offer selected"
        );

        Ok(record)
    }

    /// Run the simulated manager decision on a pending application and
    /// persist the verdict.
    pub fn review(
        &self,
        application_id: &ApplicationId,
        draws: &mut dyn UniformSource,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let mut record = self.fetch_record(application_id)?;

        let outcome = self.engine.decide(record.score, draws);
        record.status = if outcome.approved {
            ApplicationStatus::Approved
        } else {
            ApplicationStatus::Rejected
        };
        record.manager_comment = Some(outcome.rationale);
        self.repository.update(record.clone())?;

        info!(
            application = %record.id.0,
            applicant = %record.profile.email,
            status = record.status.label(),
            "manager decision recorded"
        );

        Ok(record)
    }

    /// Fetch an application and current status.
    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        Ok(self.fetch_record(application_id)?)
    }

    fn fetch_record(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, RepositoryError> {
        self.repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)
    }

    fn offer(&self, offer_id: OfferId) -> Result<&LoanOffer, ApplicationServiceError> {
        self.catalog
            .iter()
            .find(|offer| offer.id == offer_id)
            .ok_or(ApplicationServiceError::UnknownOffer(offer_id))
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("offer {0:?} is not in the catalog")]
    UnknownOffer(OfferId),
}
