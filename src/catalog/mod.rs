//! Offer catalog bootstrap from CSV seed data.
//!
//! The loader mirrors the seed dataset's conventions: incomplete rows are
//! dropped, tenure bounds and eligibility default when absent, and a repeated
//! loan type replaces the earlier entry (an in-place update, keeping its id).
//! Offers are validated here so the engine can assume well-formed bounds.

mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::applications::domain::{LoanOffer, OfferId};
use parser::OfferRecord;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read offer catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid offer catalog data: {0}")]
    Csv(#[from] csv::Error),
    #[error("offer '{loan_type}': {reason}")]
    InvalidOffer { loan_type: String, reason: String },
}

pub fn load_catalog<R: Read>(reader: R) -> Result<Vec<LoanOffer>, CatalogError> {
    let records = parser::parse_records(reader)?;
    let mut offers: Vec<LoanOffer> = Vec::new();

    for record in records {
        validate(&record)?;

        match offers
            .iter_mut()
            .find(|offer| offer.loan_type == record.loan_type)
        {
            Some(existing) => {
                let id = existing.id;
                *existing = into_offer(record, id);
            }
            None => {
                let id = OfferId(offers.len() as u32 + 1);
                offers.push(into_offer(record, id));
            }
        }
    }

    tracing::debug!(offers = offers.len(), "offer catalog loaded");
    Ok(offers)
}

pub fn load_catalog_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LoanOffer>, CatalogError> {
    let file = File::open(path)?;
    load_catalog(file)
}

fn into_offer(record: OfferRecord, id: OfferId) -> LoanOffer {
    LoanOffer {
        id,
        loan_type: record.loan_type,
        min_amount: record.min_amount,
        max_amount: record.max_amount,
        min_tenure: record.min_tenure,
        max_tenure: record.max_tenure,
        interest_rate: record.interest_rate,
        eligibility_score: record.eligibility_score,
    }
}

/// The ranking penalties divide by the lower bounds, so zero or inverted
/// bounds are rejected at load time rather than surfacing as `inf` scores.
fn validate(record: &OfferRecord) -> Result<(), CatalogError> {
    let fail = |reason: String| CatalogError::InvalidOffer {
        loan_type: record.loan_type.clone(),
        reason,
    };

    if record.min_amount <= 0.0 {
        return Err(fail(format!(
            "min_amount must be positive, got {}",
            record.min_amount
        )));
    }
    if record.max_amount < record.min_amount {
        return Err(fail(format!(
            "amount bounds are inverted: {} > {}",
            record.min_amount, record.max_amount
        )));
    }
    if record.min_tenure == 0 {
        return Err(fail("min_tenure must be at least one month".to_string()));
    }
    if record.max_tenure < record.min_tenure {
        return Err(fail(format!(
            "tenure bounds are inverted: {} > {}",
            record.min_tenure, record.max_tenure
        )));
    }
    if !(0.0..=1.0).contains(&record.eligibility_score) {
        return Err(fail(format!(
            "eligibility_score must be within [0, 1], got {}",
            record.eligibility_score
        )));
    }
    if record.interest_rate < 0.0 {
        return Err(fail(format!(
            "interest_rate must be non-negative, got {}",
            record.interest_rate
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer_csv(body: &str) -> String {
        format!(
            "loan_type,min_amount,max_amount,min_tenure,max_tenure,interest_rate,eligibility_score\n{body}"
        )
    }

    #[test]
    fn loads_offers_with_sequential_ids() {
        let csv = offer_csv(
            "Personal Loan,5000,500000,6,60,14.5,0.6\nHome Loan,100000,5000000,12,240,8.9,0.7\n",
        );

        let catalog = load_catalog(csv.as_bytes()).expect("catalog loads");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, OfferId(1));
        assert_eq!(catalog[0].loan_type, "Personal Loan");
        assert_eq!(catalog[1].id, OfferId(2));
        assert_eq!(catalog[1].max_tenure, 240);
    }

    #[test]
    fn skips_rows_missing_required_columns() {
        let csv = offer_csv(
            ",5000,500000,6,60,14.5,0.6\nGold Loan,,200000,6,36,11.0,0.65\nCar Loan,50000,1500000,12,84,10.5,0.55\n",
        );

        let catalog = load_catalog(csv.as_bytes()).expect("catalog loads");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].loan_type, "Car Loan");
        assert_eq!(catalog[0].id, OfferId(1));
    }

    #[test]
    fn applies_tenure_and_eligibility_defaults() {
        let csv = "loan_type,min_amount,max_amount,interest_rate\nPersonal Loan,5000,500000,14.5\n";

        let catalog = load_catalog(csv.as_bytes()).expect("catalog loads");

        assert_eq!(catalog[0].min_tenure, 6);
        assert_eq!(catalog[0].max_tenure, 60);
        assert_eq!(catalog[0].eligibility_score, 0.5);
    }

    #[test]
    fn later_duplicate_replaces_earlier_entry() {
        let csv = offer_csv(
            "Personal Loan,5000,500000,6,60,14.5,0.6\nHome Loan,100000,5000000,12,240,8.9,0.7\nPersonal Loan,10000,400000,6,48,13.0,0.65\n",
        );

        let catalog = load_catalog(csv.as_bytes()).expect("catalog loads");

        assert_eq!(catalog.len(), 2);
        let personal = &catalog[0];
        assert_eq!(personal.id, OfferId(1));
        assert_eq!(personal.min_amount, 10000.0);
        assert_eq!(personal.interest_rate, 13.0);
    }

    #[test]
    fn rejects_zero_minimum_amount() {
        let csv = offer_csv("Payday Loan,0,2000,1,3,30.0,0.2\n");

        let err = load_catalog(csv.as_bytes()).expect_err("zero bound rejected");

        match err {
            CatalogError::InvalidOffer { loan_type, .. } => {
                assert_eq!(loan_type, "Payday Loan");
            }
            other => panic!("expected invalid offer, got {other:?}"),
        }
    }

    #[test]
    fn rejects_inverted_tenure_bounds() {
        let csv = offer_csv("Bridge Loan,10000,50000,24,12,9.0,0.5\n");

        assert!(matches!(
            load_catalog(csv.as_bytes()),
            Err(CatalogError::InvalidOffer { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        let csv = offer_csv("Personal Loan,lots,500000,6,60,14.5,0.6\n");

        assert!(matches!(
            load_catalog(csv.as_bytes()),
            Err(CatalogError::InvalidOffer { .. })
        ));
    }

    #[test]
    fn empty_input_yields_empty_catalog() {
        let csv = offer_csv("");

        let catalog = load_catalog(csv.as_bytes()).expect("catalog loads");

        assert!(catalog.is_empty());
    }
}
