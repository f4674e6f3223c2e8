use serde::{Deserialize, Serialize};

pub const DEFAULT_MINIMUM_CREDIT_SCORE: f64 = 500.0;
pub const DEFAULT_MINIMUM_INTERNAL_RISK_SCORE: f64 = 450.0;
pub const DEFAULT_MINIMUM_AGE: u32 = 18;

/// Knockout thresholds. A check fails when the measured value is strictly below its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub minimum_credit_score: f64,
    pub minimum_internal_risk_score: f64,
    pub minimum_age: u32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            minimum_credit_score: DEFAULT_MINIMUM_CREDIT_SCORE,
            minimum_internal_risk_score: DEFAULT_MINIMUM_INTERNAL_RISK_SCORE,
            minimum_age: DEFAULT_MINIMUM_AGE,
        }
    }
}
