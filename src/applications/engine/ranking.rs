use super::super::domain::LoanOffer;
use super::config::ScoringConfig;
use super::{round_to, EngineError, ScoredOffer};

pub(crate) fn rank_offers(
    catalog: &[LoanOffer],
    requested_amount: f64,
    requested_tenure: u32,
    flexible: bool,
    config: &ScoringConfig,
) -> Result<Vec<ScoredOffer>, EngineError> {
    let mut scored = Vec::with_capacity(catalog.len());

    for offer in catalog {
        if offer.min_amount <= 0.0 || offer.min_tenure == 0 {
            return Err(EngineError::InvalidCatalogEntry(offer.loan_type.clone()));
        }

        let amount_penalty = relative_distance(
            requested_amount,
            offer.min_amount,
            offer.max_amount,
        );
        let tenure_penalty = relative_distance(
            f64::from(requested_tenure),
            f64::from(offer.min_tenure),
            f64::from(offer.max_tenure),
        );

        let mut score = offer.eligibility_score
            - (amount_penalty * config.amount_weight + tenure_penalty * config.tenure_weight);
        if flexible {
            // Flat bonus for accepting looser matching; the penalties
            // themselves are untouched.
            score += config.flexibility_bonus * 0.5;
        }

        scored.push(ScoredOffer {
            offer: offer.clone(),
            score: round_to(score, 4),
        });
    }

    // slice::sort_by is stable, so equal scores keep catalog order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(scored)
}

/// Zero inside `[min, max]`, otherwise the shortfall or overshoot relative to
/// the violated bound.
fn relative_distance(requested: f64, min: f64, max: f64) -> f64 {
    if requested < min {
        (min - requested) / min
    } else if requested > max {
        (requested - max) / max
    } else {
        0.0
    }
}
