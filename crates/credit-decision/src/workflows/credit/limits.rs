use std::ops::Range;

use tracing::warn;

use super::domain::CreditLimit;

/// Credit score bands, lower bound inclusive.
pub const CREDIT_SCORE_BANDS: [Range<i64>; 4] = [500..600, 600..700, 700..800, 800..900];

/// Internal risk score bands, lower bound inclusive.
pub const INTERNAL_RISK_BANDS: [Range<i64>; 3] = [450..500, 500..600, 600..700];

/// Limit per (credit score band, internal risk band).
pub const LIMIT_TABLE: [[u32; 3]; 4] = [
    [2000, 2500, 3000],
    [2500, 3500, 4500],
    [3000, 5000, 7000],
    [3500, 7000, 10000],
];

/// Look up the credit limit for an accepted application. Scores are truncated to integers
/// before matching; a pair outside every band yields `CreditLimit::NoLimit`.
pub fn bucket_limit(credit_score: f64, internal_risk_score: f64) -> CreditLimit {
    let credit_band = band_index(&CREDIT_SCORE_BANDS, credit_score);
    let risk_band = band_index(&INTERNAL_RISK_BANDS, internal_risk_score);

    match (credit_band, risk_band) {
        (Some(row), Some(column)) => CreditLimit::Amount(LIMIT_TABLE[row][column]),
        _ => {
            warn!(
                credit_score,
                internal_risk_score, "scores fall outside the credit limit table"
            );
            CreditLimit::NoLimit
        }
    }
}

fn band_index(bands: &[Range<i64>], score: f64) -> Option<usize> {
    if !score.is_finite() {
        return None;
    }

    let truncated = score.trunc() as i64;
    bands.iter().position(|band| band.contains(&truncated))
}
