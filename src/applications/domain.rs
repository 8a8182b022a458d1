use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferId(pub u32);

/// Identifier wrapper for submitted loan applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// A loan product from the catalog. Immutable reference data; the engine
/// never mutates it.
///
/// Catalog invariants (`min ≤ max` on both axes, positive lower bounds,
/// `eligibility_score ∈ [0, 1]`) are enforced by the loader in
/// [`crate::catalog`], not re-checked on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub id: OfferId,
    pub loan_type: String,
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_tenure: u32,
    pub max_tenure: u32,
    /// Percent APR.
    pub interest_rate: f64,
    pub eligibility_score: f64,
}

/// Applicant snapshot consumed during scoring; only `monthly_income` feeds
/// the arithmetic, the identity fields feed activity logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub email: String,
    pub monthly_income: f64,
}

/// What the applicant asked for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub amount: f64,
    pub tenure_months: u32,
    /// Opt-in to looser matching; grants a flat score bonus during ranking.
    pub flexible: bool,
}

/// High level status tracked throughout the loan application workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Suggested,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Suggested => "suggested",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}
