//! Cohort classification.
//!
//! Combines the three sub-scores and the required-field flag to place each
//! patient into zero or more cohorts. A sub-score that fails with
//! `InvalidData` is logged and contributes zero, so one malformed field
//! never excludes a patient from cohorts driven by its other fields.

use crate::error::RiskResult;
use crate::record::ValidationOutcome;
use crate::risk::RiskEvaluator;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The outbound cohort payload: three lists of patient ids.
///
/// Field names match the reporting endpoint's wire contract exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortReport {
    pub high_risk_patients: Vec<String>,
    pub fever_patients: Vec<String>,
    pub data_quality_issues: Vec<String>,
}

/// Classifies every identified record into its cohorts.
///
/// Records without a non-empty `patient_id` are skipped entirely. Membership
/// rules, with thresholds taken from the evaluator's configuration:
/// - high-risk: sum of the three sub-scores at or above `high_risk_sum`;
/// - fever: temperature sub-score at or above `fever_score`;
/// - data-quality: the record failed the required-field contract.
pub fn classify(evaluator: &RiskEvaluator, outcomes: &[ValidationOutcome]) -> CohortReport {
    let thresholds = evaluator.thresholds();
    let mut report = CohortReport::default();

    for outcome in outcomes {
        let Some(id) = outcome.record.id() else {
            continue;
        };

        if !outcome.valid {
            report.data_quality_issues.push(id.to_string());
        }

        let bp = score_or_zero(evaluator.blood_pressure_score(&outcome.record), id, "blood_pressure");
        let temperature = score_or_zero(evaluator.temperature_score(&outcome.record), id, "temperature");
        let age = score_or_zero(evaluator.age_score(&outcome.record), id, "age");

        if bp + temperature + age >= thresholds.high_risk_sum {
            report.high_risk_patients.push(id.to_string());
        }
        if temperature >= thresholds.fever_score {
            report.fever_patients.push(id.to_string());
        }
    }

    report
}

fn score_or_zero(result: RiskResult<u8>, id: &str, dimension: &str) -> u8 {
    match result {
        Ok(score) => score,
        Err(err) => {
            warn!(patient_id = id, dimension, %err, "substituting zero for unscorable field");
            0
        }
    }
}
