mod config;
mod offers;
mod ranking;
mod underwriting;

pub use config::ScoringConfig;
pub use offers::CustomOffer;
pub use underwriting::DecisionOutcome;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantProfile, LoanOffer};
use crate::rng::UniformSource;

/// Stateless engine applying the scoring configuration to catalog offers and
/// applicant requests. All operations are pure given their inputs and random
/// draws.
pub struct RecommendationEngine {
    config: ScoringConfig,
}

impl RecommendationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Rank the catalog by fit against the requested amount and tenure,
    /// descending by score. Ties keep catalog order; an empty catalog yields
    /// an empty ranking.
    pub fn rank(
        &self,
        catalog: &[LoanOffer],
        requested_amount: f64,
        requested_tenure: u32,
        flexible: bool,
    ) -> Result<Vec<ScoredOffer>, EngineError> {
        ranking::rank_offers(catalog, requested_amount, requested_tenure, flexible, &self.config)
    }

    /// Synthesize `custom_variants` independent variants of `base` jittered
    /// around the requested amount and tenure.
    pub fn custom_offers(
        &self,
        base: &LoanOffer,
        requested_amount: f64,
        requested_tenure: u32,
        draws: &mut dyn UniformSource,
    ) -> Vec<CustomOffer> {
        offers::synthesize(base, requested_amount, requested_tenure, &self.config, draws)
    }

    /// Blend offer eligibility with the applicant's income sufficiency into a
    /// normalized affordability score.
    pub fn affordability(
        &self,
        profile: &ApplicantProfile,
        offer: &LoanOffer,
        requested_amount: f64,
        requested_tenure: u32,
    ) -> Result<f64, EngineError> {
        underwriting::affordability(profile, offer, requested_amount, requested_tenure, &self.config)
    }

    /// Simulate a manager's approval decision from an affordability score.
    pub fn decide(&self, score: f64, draws: &mut dyn UniformSource) -> DecisionOutcome {
        underwriting::simulate_decision(score, draws)
    }
}

/// Ranking result pairing an offer with its fit score. Transient output; not
/// persisted by this module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOffer {
    pub offer: LoanOffer,
    pub score: f64,
}

/// Precondition violations surfaced to the caller instead of producing
/// `inf`/`NaN` arithmetic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("offer '{0}' has a zero minimum amount or tenure; relative penalties are undefined")]
    InvalidCatalogEntry(String),
    #[error("requested amount {0} yields no positive monthly payment")]
    InvalidRequest(f64),
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
