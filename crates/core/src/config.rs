//! Scoring thresholds.
//!
//! All clinical boundaries used by the risk evaluator and the cohort
//! classifier live here. The struct is resolved once at process startup and
//! passed into the services that need it, so there is no hidden process-wide
//! mutable state and tests can run against explicit values.

/// Clinical boundaries for risk scoring and cohort classification.
///
/// All `*_upper` bounds are inclusive upper edges of their band: a systolic
/// reading of exactly `systolic_normal_upper` is still normal, one unit above
/// it is elevated. The `*_lower` age bounds are inclusive lower edges.
#[derive(Clone, Debug)]
pub struct RiskThresholds {
    /// Systolic at or below this is normal.
    pub systolic_normal_upper: u32,
    /// Systolic at or below this (and above normal) is elevated.
    pub systolic_elevated_upper: u32,
    /// Systolic at or below this (and above elevated) is stage 1; above is stage 2.
    pub systolic_stage1_upper: u32,
    /// Diastolic at or below this is normal. Diastolic has no elevated tier.
    pub diastolic_normal_upper: u32,
    /// Diastolic at or below this (and above normal) is stage 1; above is stage 2.
    pub diastolic_stage1_upper: u32,
    /// Temperature at or below this is normal.
    pub temp_normal_upper: f64,
    /// Temperature at or below this (and above normal) is low fever; above is high fever.
    pub temp_low_fever_upper: f64,
    /// Age at or above this scores middle-age risk.
    pub middle_age_lower: f64,
    /// Age at or above this scores senior risk.
    pub senior_lower: f64,
    /// Minimum sub-score sum for the high-risk cohort.
    pub high_risk_sum: u8,
    /// Minimum temperature sub-score for the fever cohort.
    pub fever_score: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            systolic_normal_upper: 119,
            systolic_elevated_upper: 129,
            systolic_stage1_upper: 139,
            diastolic_normal_upper: 79,
            diastolic_stage1_upper: 89,
            temp_normal_upper: 99.5,
            temp_low_fever_upper: 100.9,
            middle_age_lower: 40.0,
            senior_lower: 66.0,
            high_risk_sum: 4,
            fever_score: 1,
        }
    }
}
