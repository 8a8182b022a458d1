use serde::{Deserialize, Serialize};

use super::super::domain::{ApplicantProfile, LoanOffer};
use super::config::ScoringConfig;
use super::{round_to, EngineError};
use crate::rng::UniformSource;

/// Approval probability curve: a monotonic mapping from affordability score
/// to approval odds, floored and capped so outcomes are never deterministic.
/// The curve is a stand-in for real underwriting and is fixed, not tunable.
const BASE_APPROVAL_PROBABILITY: f64 = 0.3;
const APPROVAL_PROBABILITY_SLOPE: f64 = 0.6;
const MIN_APPROVAL_PROBABILITY: f64 = 0.05;
const MAX_APPROVAL_PROBABILITY: f64 = 0.95;

const APPROVED_COMMENT: &str = "Approved by system-sim manager";
const REJECTED_COMMENT: &str = "Rejected by system-sim manager (low credit match)";

/// Simulated manager verdict for an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub approved: bool,
    pub rationale: String,
}

/// Blend of offer eligibility and income sufficiency, rounded to 4 decimals.
///
/// The monthly payment is a simplified, non-amortizing approximation (simple
/// interest on the full principal, not an annuity). The surrounding
/// application depends on these exact numbers, so the formula is kept as is.
pub(crate) fn affordability(
    profile: &ApplicantProfile,
    offer: &LoanOffer,
    requested_amount: f64,
    requested_tenure: u32,
    config: &ScoringConfig,
) -> Result<f64, EngineError> {
    if requested_amount <= 0.0 {
        return Err(EngineError::InvalidRequest(requested_amount));
    }

    let monthly_rate = offer.interest_rate / 100.0 / 12.0;
    let months = f64::from(requested_tenure.max(1));
    let monthly_payment = requested_amount / months + requested_amount * monthly_rate;

    let income_factor =
        (profile.monthly_income / (monthly_payment * config.income_buffer)).min(1.0);

    let score = offer.eligibility_score * config.eligibility_weight
        + income_factor * config.income_weight;

    Ok(round_to(score, 4))
}

pub(crate) fn simulate_decision(score: f64, draws: &mut dyn UniformSource) -> DecisionOutcome {
    let clamped = score.clamp(0.0, 1.0);
    let probability = (BASE_APPROVAL_PROBABILITY + APPROVAL_PROBABILITY_SLOPE * clamped)
        .clamp(MIN_APPROVAL_PROBABILITY, MAX_APPROVAL_PROBABILITY);

    let approved = draws.draw_unit() < probability;
    let rationale = if approved {
        APPROVED_COMMENT.to_string()
    } else {
        REJECTED_COMMENT.to_string()
    };

    DecisionOutcome { approved, rationale }
}
