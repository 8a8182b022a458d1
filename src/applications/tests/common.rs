use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::applications::domain::{
    ApplicantProfile, ApplicationId, LoanOffer, LoanRequest, OfferId,
};
use crate::applications::engine::{RecommendationEngine, ScoringConfig};
use crate::applications::repository::{
    ApplicationRecord, ApplicationRepository, RepositoryError,
};
use crate::applications::service::LoanApplicationService;
use crate::rng::UniformSource;

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::with_defaults()
}

/// The seed dataset's personal loan, used as the reference offer across
/// scenarios.
pub(super) fn personal_loan() -> LoanOffer {
    LoanOffer {
        id: OfferId(1),
        loan_type: "Personal Loan".to_string(),
        min_amount: 5000.0,
        max_amount: 500000.0,
        min_tenure: 6,
        max_tenure: 60,
        interest_rate: 14.5,
        eligibility_score: 0.6,
    }
}

pub(super) fn home_loan() -> LoanOffer {
    LoanOffer {
        id: OfferId(2),
        loan_type: "Home Loan".to_string(),
        min_amount: 100000.0,
        max_amount: 5000000.0,
        min_tenure: 12,
        max_tenure: 240,
        interest_rate: 8.9,
        eligibility_score: 0.7,
    }
}

pub(super) fn car_loan() -> LoanOffer {
    LoanOffer {
        id: OfferId(3),
        loan_type: "Car Loan".to_string(),
        min_amount: 50000.0,
        max_amount: 1500000.0,
        min_tenure: 12,
        max_tenure: 84,
        interest_rate: 10.5,
        eligibility_score: 0.55,
    }
}

pub(super) fn catalog() -> Vec<LoanOffer> {
    vec![personal_loan(), home_loan(), car_loan()]
}

pub(super) fn applicant(monthly_income: f64) -> ApplicantProfile {
    ApplicantProfile {
        name: "Asha Verma".to_string(),
        email: "asha@example.com".to_string(),
        monthly_income,
    }
}

pub(super) fn request(amount: f64, tenure_months: u32) -> LoanRequest {
    LoanRequest {
        amount,
        tenure_months,
        flexible: false,
    }
}

pub(super) fn build_service() -> (
    LoanApplicationService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    build_service_with_catalog(catalog())
}

pub(super) fn build_service_with_catalog(
    catalog: Vec<LoanOffer>,
) -> (
    LoanApplicationService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service =
        LoanApplicationService::new(catalog, repository.clone(), ScoringConfig::default());
    (service, repository)
}

/// Draw source replaying scripted positions within each requested range:
/// a stored fraction `t` yields `lo + t * (hi - lo)`.
pub(super) struct ScriptedDraws {
    fractions: Vec<f64>,
    next: usize,
}

impl ScriptedDraws {
    pub(super) fn new(fractions: Vec<f64>) -> Self {
        Self { fractions, next: 0 }
    }
}

impl UniformSource for ScriptedDraws {
    fn draw(&mut self, lo: f64, hi: f64) -> f64 {
        let fraction = self.fractions[self.next];
        self.next += 1;
        lo + fraction * (hi - lo)
    }
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<ApplicationId, ApplicationRecord>>,
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}
