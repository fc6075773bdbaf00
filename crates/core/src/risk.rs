//! Risk scoring engine.
//!
//! Three independent, pure scoring functions over a single patient record:
//! blood pressure, temperature and age. Each is total over its valid domain
//! and returns [`RiskError::InvalidData`] outside it; none of them mutates
//! the record, so re-running a score on the same record always yields the
//! same result.

use crate::config::RiskThresholds;
use crate::error::{RiskError, RiskResult};
use crate::record::{coerce_positive, PatientRecord};
use serde_json::Value;

pub const NORMAL_SCORE: u8 = 0;
pub const BP_ELEVATED_SCORE: u8 = 1;
pub const BP_STAGE_1_SCORE: u8 = 2;
pub const BP_STAGE_2_SCORE: u8 = 3;
pub const TEMP_LOW_FEVER_SCORE: u8 = 1;
pub const TEMP_HIGH_FEVER_SCORE: u8 = 2;
pub const AGE_MIDDLE_SCORE: u8 = 1;
pub const AGE_SENIOR_SCORE: u8 = 2;

/// Computes the three vital-sign sub-scores for a patient record.
#[derive(Clone, Debug)]
pub struct RiskEvaluator {
    thresholds: RiskThresholds,
}

impl RiskEvaluator {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Blood pressure sub-score.
    ///
    /// The field must be a string of exactly two `/`-separated positive
    /// integers. Systolic and diastolic are classified independently and the
    /// higher stage wins: bounds are checked from stage 2 downwards, and a
    /// stage matches if either measurement exceeds its bound for that stage.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidData`] if the field is missing, not a
    /// string, not exactly two tokens, or either token is not a positive
    /// integer (zero included).
    pub fn blood_pressure_score(&self, record: &PatientRecord) -> RiskResult<u8> {
        let raw = record
            .blood_pressure
            .as_ref()
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("blood_pressure is missing or not a string"))?;

        let tokens: Vec<&str> = raw.split('/').collect();
        let (systolic, diastolic) = match tokens.as_slice() {
            [systolic, diastolic] => (parse_measurement(systolic)?, parse_measurement(diastolic)?),
            _ => return Err(invalid("blood_pressure must be systolic/diastolic")),
        };

        let t = &self.thresholds;
        if systolic > t.systolic_stage1_upper || diastolic > t.diastolic_stage1_upper {
            return Ok(BP_STAGE_2_SCORE);
        }
        if systolic > t.systolic_elevated_upper || diastolic > t.diastolic_normal_upper {
            return Ok(BP_STAGE_1_SCORE);
        }
        if systolic > t.systolic_normal_upper {
            return Ok(BP_ELEVATED_SCORE);
        }
        Ok(NORMAL_SCORE)
    }

    /// Temperature sub-score.
    ///
    /// Accepts a JSON number or a numeric string.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidData`] if the field is missing, empty, or
    /// does not coerce to a positive non-zero number.
    pub fn temperature_score(&self, record: &PatientRecord) -> RiskResult<u8> {
        let temperature = record
            .temperature
            .as_ref()
            .and_then(coerce_positive)
            .ok_or_else(|| invalid("temperature is missing or not a positive number"))?;

        let t = &self.thresholds;
        if temperature > t.temp_low_fever_upper {
            return Ok(TEMP_HIGH_FEVER_SCORE);
        }
        if temperature > t.temp_normal_upper {
            return Ok(TEMP_LOW_FEVER_SCORE);
        }
        Ok(NORMAL_SCORE)
    }

    /// Age sub-score.
    ///
    /// Accepts a JSON number or a numeric string.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidData`] if the field is missing, empty, or
    /// does not coerce to a positive non-zero number.
    pub fn age_score(&self, record: &PatientRecord) -> RiskResult<u8> {
        let age = record
            .age
            .as_ref()
            .and_then(coerce_positive)
            .ok_or_else(|| invalid("age is missing or not a positive number"))?;

        let t = &self.thresholds;
        if age >= t.senior_lower {
            return Ok(AGE_SENIOR_SCORE);
        }
        if age >= t.middle_age_lower {
            return Ok(AGE_MIDDLE_SCORE);
        }
        Ok(NORMAL_SCORE)
    }
}

fn parse_measurement(token: &str) -> RiskResult<u32> {
    token
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| invalid("blood_pressure component is not a positive integer"))
}

fn invalid(reason: &str) -> RiskError {
    RiskError::InvalidData(reason.to_string())
}

#[cfg(test)]
mod risk_tests {
    use super::*;
    use serde_json::json;

    fn evaluator() -> RiskEvaluator {
        RiskEvaluator::new(RiskThresholds::default())
    }

    fn bp_record(bp: &str) -> PatientRecord {
        PatientRecord {
            blood_pressure: Some(json!(bp)),
            ..Default::default()
        }
    }

    fn temp_record(temperature: Value) -> PatientRecord {
        PatientRecord {
            temperature: Some(temperature),
            ..Default::default()
        }
    }

    fn age_record(age: Value) -> PatientRecord {
        PatientRecord {
            age: Some(age),
            ..Default::default()
        }
    }

    #[test]
    fn systolic_boundaries_are_exact() {
        let eval = evaluator();
        assert_eq!(eval.blood_pressure_score(&bp_record("119/70")).unwrap(), 0);
        assert_eq!(eval.blood_pressure_score(&bp_record("120/70")).unwrap(), 1);
        assert_eq!(eval.blood_pressure_score(&bp_record("129/70")).unwrap(), 1);
        assert_eq!(eval.blood_pressure_score(&bp_record("130/70")).unwrap(), 2);
        assert_eq!(eval.blood_pressure_score(&bp_record("139/70")).unwrap(), 2);
        assert_eq!(eval.blood_pressure_score(&bp_record("140/70")).unwrap(), 3);
    }

    #[test]
    fn diastolic_boundaries_are_exact() {
        let eval = evaluator();
        assert_eq!(eval.blood_pressure_score(&bp_record("119/79")).unwrap(), 0);
        assert_eq!(eval.blood_pressure_score(&bp_record("119/80")).unwrap(), 2);
        assert_eq!(eval.blood_pressure_score(&bp_record("119/89")).unwrap(), 2);
        assert_eq!(eval.blood_pressure_score(&bp_record("119/90")).unwrap(), 3);
    }

    #[test]
    fn higher_stage_dominates_across_measurements() {
        let eval = evaluator();
        // systolic stage 2, diastolic stage 1
        assert_eq!(eval.blood_pressure_score(&bp_record("141/85")).unwrap(), 3);
        // systolic elevated, diastolic stage 1
        assert_eq!(eval.blood_pressure_score(&bp_record("125/85")).unwrap(), 2);
        // systolic stage 1, diastolic stage 2
        assert_eq!(eval.blood_pressure_score(&bp_record("135/91")).unwrap(), 3);
    }

    #[test]
    fn malformed_blood_pressure_is_invalid() {
        let eval = evaluator();
        for bp in ["150/", "/90", "INVALID", "", "120/80/90", "0/80", "120/0"] {
            assert!(
                matches!(
                    eval.blood_pressure_score(&bp_record(bp)),
                    Err(RiskError::InvalidData(_))
                ),
                "expected InvalidData for {bp:?}"
            );
        }
    }

    #[test]
    fn missing_or_nonstring_blood_pressure_is_invalid() {
        let eval = evaluator();
        assert!(eval
            .blood_pressure_score(&PatientRecord::default())
            .is_err());
        let record = PatientRecord {
            blood_pressure: Some(json!(120)),
            ..Default::default()
        };
        assert!(eval.blood_pressure_score(&record).is_err());
    }

    #[test]
    fn temperature_boundaries_are_exact() {
        let eval = evaluator();
        assert_eq!(eval.temperature_score(&temp_record(json!(99.5))).unwrap(), 0);
        assert_eq!(eval.temperature_score(&temp_record(json!(99.6))).unwrap(), 1);
        assert_eq!(
            eval.temperature_score(&temp_record(json!(100.9))).unwrap(),
            1
        );
        assert_eq!(
            eval.temperature_score(&temp_record(json!(101.0))).unwrap(),
            2
        );
    }

    #[test]
    fn temperature_accepts_numeric_strings() {
        let eval = evaluator();
        assert_eq!(
            eval.temperature_score(&temp_record(json!("101.2"))).unwrap(),
            2
        );
    }

    #[test]
    fn bad_temperature_is_invalid() {
        let eval = evaluator();
        for temperature in [json!(0), json!("0"), json!("warm"), json!(""), json!(null)] {
            assert!(
                eval.temperature_score(&temp_record(temperature.clone())).is_err(),
                "expected InvalidData for {temperature:?}"
            );
        }
        assert!(eval.temperature_score(&PatientRecord::default()).is_err());
    }

    #[test]
    fn age_boundaries_are_exact() {
        let eval = evaluator();
        assert_eq!(eval.age_score(&age_record(json!(39))).unwrap(), 0);
        assert_eq!(eval.age_score(&age_record(json!(40))).unwrap(), 1);
        assert_eq!(eval.age_score(&age_record(json!(65))).unwrap(), 1);
        assert_eq!(eval.age_score(&age_record(json!(66))).unwrap(), 2);
        assert_eq!(eval.age_score(&age_record(json!("66"))).unwrap(), 2);
    }

    #[test]
    fn bad_age_is_invalid() {
        let eval = evaluator();
        for age in [json!(0), json!("0"), json!("old"), json!(""), json!(null)] {
            assert!(
                eval.age_score(&age_record(age.clone())).is_err(),
                "expected InvalidData for {age:?}"
            );
        }
        assert!(eval.age_score(&PatientRecord::default()).is_err());
    }

    #[test]
    fn scoring_is_idempotent() {
        let eval = evaluator();
        let record = PatientRecord {
            patient_id: Some("p1".into()),
            blood_pressure: Some(json!("141/85")),
            temperature: Some(json!(101)),
            age: Some(json!(70)),
            ..Default::default()
        };
        for _ in 0..3 {
            assert_eq!(eval.blood_pressure_score(&record).unwrap(), 3);
            assert_eq!(eval.temperature_score(&record).unwrap(), 2);
            assert_eq!(eval.age_score(&record).unwrap(), 2);
        }
    }
}
