//! # Triage Core
//!
//! Pure domain logic for the patient-vitals triage pipeline:
//! - loosely-typed patient record model tolerating malformed fields
//! - boundary-exact risk scoring over blood pressure, temperature and age
//! - the required-field contract behind the data-quality cohort
//! - cohort classification into high-risk, fever and data-quality lists
//!
//! **No I/O concerns**: fetching records and submitting cohort reports
//! belong in `triage-api`.

pub mod cohort;
pub mod config;
pub mod error;
pub mod record;
pub mod risk;
pub mod validation;

pub use cohort::{classify, CohortReport};
pub use config::RiskThresholds;
pub use error::{RiskError, RiskResult};
pub use record::{PatientRecord, ValidationOutcome};
pub use risk::RiskEvaluator;
pub use validation::{meets_required_contract, validate};
