use serde::{Deserialize, Serialize};

/// Scoring weights and synthesis knobs applied by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the amount penalty when ranking offers.
    pub amount_weight: f64,
    /// Weight of the tenure penalty when ranking offers.
    pub tenure_weight: f64,
    /// Flat increment granted to flexible requests (applied at half value).
    pub flexibility_bonus: f64,
    /// Weight of the offer's eligibility score in the affordability blend.
    pub eligibility_weight: f64,
    /// Weight of the applicant's income factor in the affordability blend.
    pub income_weight: f64,
    /// Income must cover this many monthly payments for a full income factor.
    pub income_buffer: f64,
    /// Number of synthetic variants produced per custom-offer request.
    pub custom_variants: usize,
    /// Lower bound on the interest rate of a synthesized offer, percent APR.
    pub rate_floor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            amount_weight: 0.6,
            tenure_weight: 0.4,
            flexibility_bonus: 0.15,
            eligibility_weight: 0.6,
            income_weight: 0.4,
            income_buffer: 3.0,
            custom_variants: 3,
            rate_floor: 5.0,
        }
    }
}
