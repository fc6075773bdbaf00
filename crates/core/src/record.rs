//! Patient record model.
//!
//! Records arrive from a remote source that is only loosely typed: the
//! vital-sign fields may be JSON numbers, numeric strings, or garbage. The
//! model keeps those fields as raw [`serde_json::Value`]s and defers
//! coercion to the scoring and validation code, so a malformed field never
//! prevents the rest of the record from being used. Records are immutable
//! value objects for the lifetime of a run.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One patient's latest observation, as received from the remote source.
///
/// Only `patient_id`, `age`, `blood_pressure` and `temperature` are ever
/// inspected; the remaining fields are carried through unchanged for
/// downstream display and are never validated or scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
}

impl PatientRecord {
    /// The patient identifier, if present and non-empty.
    ///
    /// Records without an identifier are excluded from every cohort and from
    /// the displayed/submitted collection.
    pub fn id(&self) -> Option<&str> {
        self.patient_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A record paired with its required-field contract flag.
///
/// Created once per record immediately after fetch and consumed by the
/// cohort classifier; never mutated.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub record: PatientRecord,
    pub valid: bool,
}

/// Coerce a loosely-typed field to a positive non-zero number.
///
/// Accepts JSON numbers and numeric strings. Zero is rejected by domain
/// policy: no valid patient has an age or temperature of exactly zero, so a
/// zero reads as a missing measurement.
pub(crate) fn coerce_positive(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n > 0.0).then_some(n)
}

#[cfg(test)]
mod record_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_filters_empty_identifiers() {
        let record = PatientRecord {
            patient_id: Some(String::new()),
            ..Default::default()
        };
        assert!(record.id().is_none());

        let record = PatientRecord {
            patient_id: Some("p7".into()),
            ..Default::default()
        };
        assert_eq!(record.id(), Some("p7"));
    }

    #[test]
    fn deserializes_loose_fields() {
        let record: PatientRecord = serde_json::from_value(json!({
            "patient_id": "p1",
            "age": "45",
            "blood_pressure": "120/80",
            "temperature": 98.6,
            "diagnosis": "stable"
        }))
        .unwrap();
        assert_eq!(record.id(), Some("p1"));
        assert_eq!(record.age, Some(json!("45")));
        assert_eq!(record.temperature, Some(json!(98.6)));
        assert_eq!(record.diagnosis.as_deref(), Some("stable"));
    }

    #[test]
    fn coerce_positive_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_positive(&json!(45)), Some(45.0));
        assert_eq!(coerce_positive(&json!(" 98.6 ")), Some(98.6));
        assert_eq!(coerce_positive(&json!("45")), Some(45.0));
    }

    #[test]
    fn coerce_positive_rejects_zero_and_garbage() {
        assert_eq!(coerce_positive(&json!(0)), None);
        assert_eq!(coerce_positive(&json!("0")), None);
        assert_eq!(coerce_positive(&json!(-3)), None);
        assert_eq!(coerce_positive(&json!("forty")), None);
        assert_eq!(coerce_positive(&json!("")), None);
        assert_eq!(coerce_positive(&json!(null)), None);
        assert_eq!(coerce_positive(&json!({"value": 5})), None);
    }
}
