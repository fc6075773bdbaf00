//! Required-field contract.
//!
//! A fetched record is "complete" when it carries an age, a blood pressure
//! in `systolic/diastolic` shape, and a numeric temperature. This check is
//! deliberately different from the per-call checks inside the risk
//! evaluator: it decides the data-quality cohort, not whether a field can be
//! scored. A record can pass here and still fail an individual scoring call
//! (a numeric temperature of zero, say), and a record that fails here may
//! still score on its well-formed fields.

use crate::record::{PatientRecord, ValidationOutcome};
use serde_json::Value;

/// Checks a record against the required-field contract. Never fails.
///
/// - `age` must be a JSON number, or a string of ASCII digits only;
/// - `blood_pressure` must be a string matching `digits/digits` exactly;
/// - `temperature` must be a JSON number — a numeric string is scorable but
///   still counts as a data-quality issue.
pub fn meets_required_contract(record: &PatientRecord) -> bool {
    let age_ok = match &record.age {
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    };

    let bp_ok = record
        .blood_pressure
        .as_ref()
        .and_then(Value::as_str)
        .is_some_and(has_blood_pressure_shape);

    let temp_ok = matches!(record.temperature, Some(Value::Number(_)));

    age_ok && bp_ok && temp_ok
}

/// Pairs a record with its contract flag.
pub fn validate(record: PatientRecord) -> ValidationOutcome {
    let valid = meets_required_contract(&record);
    ValidationOutcome { record, valid }
}

fn has_blood_pressure_shape(raw: &str) -> bool {
    match raw.split_once('/') {
        Some((systolic, diastolic)) => is_digits(systolic) && is_digits(diastolic),
        None => false,
    }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
