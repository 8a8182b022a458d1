//! Loan application intake, recommendation, and simulated review.
//!
//! The engine submodule holds the pure scoring operations; the service wires
//! them to a storage trait so the whole suggest → pick → review lifecycle can
//! run against any backend.

pub mod domain;
pub mod engine;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantProfile, ApplicationId, ApplicationStatus, LoanOffer, LoanRequest, OfferId,
};
pub use engine::{
    CustomOffer, DecisionOutcome, EngineError, RecommendationEngine, ScoredOffer, ScoringConfig,
};
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatusView, RepositoryError,
};
pub use service::{ApplicationServiceError, LoanApplicationService};
