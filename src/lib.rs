//! Loan recommendation and simulated approval engine for a demo lending
//! service.
//!
//! The crate ranks a catalog of loan offers against a requested amount and
//! tenure, synthesizes custom variants of a chosen offer, blends offer
//! eligibility with applicant income into an affordability score, and runs a
//! stochastic stand-in for a manager's underwriting decision. The
//! [`applications`] module wraps those operations in a small application
//! lifecycle backed by a storage trait; [`catalog`] bootstraps the offer
//! catalog from CSV seed data.

pub mod applications;
pub mod catalog;
pub mod rng;
