use serde::{Deserialize, Serialize};

use super::super::domain::LoanOffer;
use super::config::ScoringConfig;
use super::round_to;
use crate::rng::UniformSource;

/// Relative jitter spans around the requested amount and tenure, and around
/// the base offer's rate.
const AMOUNT_JITTER: f64 = 0.25;
const TENURE_JITTER: f64 = 0.30;
const RATE_JITTER_DOWN: f64 = 0.08;
const RATE_JITTER_UP: f64 = 0.12;

/// Synthetic variant of a catalog offer. Transient output; not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomOffer {
    pub label: String,
    pub amount: f64,
    pub tenure: u32,
    pub interest_rate: f64,
}

pub(crate) fn synthesize(
    base: &LoanOffer,
    requested_amount: f64,
    requested_tenure: u32,
    config: &ScoringConfig,
    draws: &mut dyn UniformSource,
) -> Vec<CustomOffer> {
    (0..config.custom_variants)
        .map(|index| {
            // The three axes are drawn independently, in a fixed order so a
            // seeded source reproduces the same variants.
            let amount = (requested_amount * (1.0 + draws.draw(-AMOUNT_JITTER, AMOUNT_JITTER)))
                .clamp(base.min_amount, base.max_amount);

            let tenure = (f64::from(requested_tenure)
                * (1.0 + draws.draw(-TENURE_JITTER, TENURE_JITTER)))
            .round()
            .clamp(f64::from(base.min_tenure), f64::from(base.max_tenure))
                as u32;

            let interest_rate = (base.interest_rate
                * (1.0 + draws.draw(-RATE_JITTER_DOWN, RATE_JITTER_UP)))
            .max(config.rate_floor);

            CustomOffer {
                label: format!("{} (custom {})", base.loan_type, index + 1),
                amount: round_to(amount, 2),
                tenure,
                interest_rate: round_to(interest_rate, 2),
            }
        })
        .collect()
}
