use chrono::NaiveDate;

use super::super::domain::{CheckOutcome, ConsumerIdentity, DateOfBirth, RiskModelEntry};
use super::super::error::CreditCheckError;
use super::super::normalizer::{parse_numeric, NormalizedTradeline, TradelineField};

const DAYS_PER_YEAR: f64 = 365.25;

/// Sum the reported 30-day delinquencies across all tradelines. Tradelines without the field
/// contribute nothing.
pub fn evaluate_delinquency(tradelines: &[NormalizedTradeline]) -> CheckOutcome {
    let total: f64 = tradelines
        .iter()
        .filter_map(|tradeline| tradeline.value(TradelineField::Delinquencies30Days))
        .sum();

    CheckOutcome::new(total > 0.0, total)
}

/// Whole years between the date of birth and `as_of`, truncated toward zero. A date of birth
/// after `as_of` gives a negative age and fails the check like any underage applicant.
pub fn evaluate_age(
    identity: &ConsumerIdentity,
    as_of: NaiveDate,
    minimum_age: u32,
) -> Result<CheckOutcome, CreditCheckError> {
    let date_of_birth = identity
        .date_of_birth
        .ok_or(CreditCheckError::MissingField {
            field: "consumerIdentity.date_of_birth",
        })?;
    let born_on = calendar_date(date_of_birth)?;

    let days = as_of.signed_duration_since(born_on).num_days();
    let age = (days as f64 / DAYS_PER_YEAR).trunc();

    Ok(CheckOutcome::new(age < f64::from(minimum_age), age))
}

/// Score the first risk model entry only; later entries are ignored.
pub fn evaluate_credit_score(
    risk_model: &[RiskModelEntry],
    threshold: f64,
) -> Result<CheckOutcome, CreditCheckError> {
    let entry = risk_model.first().ok_or(CreditCheckError::MissingField {
        field: "riskModel[0]",
    })?;
    let raw = entry
        .credit_score
        .as_deref()
        .ok_or(CreditCheckError::MissingField {
            field: "riskModel[0].credit_score",
        })?;
    let score = parse_numeric(raw)
        .ok_or_else(|| CreditCheckError::conversion("riskModel[0].credit_score", raw, None))?;

    Ok(CheckOutcome::new(score < threshold, score))
}

pub fn evaluate_internal_risk(internal_risk_score: f64, threshold: f64) -> CheckOutcome {
    // NaN compares false, so it must be knocked out explicitly.
    let failed = internal_risk_score.is_nan() || internal_risk_score < threshold;
    CheckOutcome::new(failed, internal_risk_score)
}

fn calendar_date(date_of_birth: DateOfBirth) -> Result<NaiveDate, CreditCheckError> {
    let DateOfBirth { year, month, day } = date_of_birth;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CreditCheckError::conversion(
            "consumerIdentity.date_of_birth",
            &format!("{year:04}-{month:02}-{day:02}"),
            None,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::credit::normalizer::{normalize_tradelines, DEFAULT_NUMERIC_FIELDS};
    use crate::workflows::credit::domain::Tradeline;

    fn identity(year: i32, month: u32, day: u32) -> ConsumerIdentity {
        ConsumerIdentity {
            name: Vec::new(),
            date_of_birth: Some(DateOfBirth { year, month, day }),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn delinquent_tradelines(counts: &[Option<&str>]) -> Vec<NormalizedTradeline> {
        let tradelines = counts
            .iter()
            .map(|count| Tradeline {
                delinquencies_30_days: count.map(str::to_string),
                ..Tradeline::default()
            })
            .collect::<Vec<_>>();
        normalize_tradelines(&tradelines, &DEFAULT_NUMERIC_FIELDS).expect("normalizes")
    }

    #[test]
    fn delinquency_sums_only_reported_counts() {
        let outcome = evaluate_delinquency(&delinquent_tradelines(&[
            Some("00"),
            Some("01"),
            None,
            Some("02"),
        ]));

        assert!(outcome.failed);
        assert_eq!(outcome.measured_value, 3.0);
    }

    #[test]
    fn delinquency_passes_when_nothing_is_reported() {
        let outcome = evaluate_delinquency(&delinquent_tradelines(&[None, None]));
        assert!(!outcome.failed);
        assert_eq!(outcome.measured_value, 0.0);

        let outcome = evaluate_delinquency(&[]);
        assert!(!outcome.failed);
    }

    #[test]
    fn age_truncates_toward_zero() {
        let outcome = evaluate_age(&identity(1964, 11, 23), date(2024, 6, 1), 18).expect("age");
        assert_eq!(outcome.measured_value, 59.0);
        assert!(!outcome.failed);
    }

    #[test]
    fn age_boundary_at_eighteenth_birthday() {
        let applicant = identity(2006, 6, 1);

        let on_birthday = evaluate_age(&applicant, date(2024, 6, 1), 18).expect("age");
        assert_eq!(on_birthday.measured_value, 18.0);
        assert!(!on_birthday.failed);

        let day_before = evaluate_age(&applicant, date(2024, 5, 31), 18).expect("age");
        assert_eq!(day_before.measured_value, 17.0);
        assert!(day_before.failed);
    }

    #[test]
    fn future_date_of_birth_yields_negative_age() {
        let outcome = evaluate_age(&identity(2030, 1, 1), date(2024, 6, 1), 18).expect("age");
        assert_eq!(outcome.measured_value, -5.0);
        assert!(outcome.failed);
    }

    #[test]
    fn age_requires_date_of_birth() {
        let error = evaluate_age(&ConsumerIdentity::default(), date(2024, 6, 1), 18)
            .expect_err("missing dob");
        assert_eq!(
            error,
            CreditCheckError::MissingField {
                field: "consumerIdentity.date_of_birth"
            }
        );
    }

    #[test]
    fn age_rejects_impossible_dates() {
        let error =
            evaluate_age(&identity(1990, 2, 30), date(2024, 6, 1), 18).expect_err("bad date");
        assert!(matches!(error, CreditCheckError::ValueConversion { .. }));
    }

    #[test]
    fn credit_score_uses_first_entry_without_descaling() {
        let risk_model = vec![
            RiskModelEntry {
                credit_score: Some("0787".to_string()),
            },
            RiskModelEntry {
                credit_score: Some("0100".to_string()),
            },
        ];

        let outcome = evaluate_credit_score(&risk_model, 500.0).expect("score");
        assert_eq!(outcome.measured_value, 787.0);
        assert!(!outcome.failed);
    }

    #[test]
    fn credit_score_below_threshold_fails() {
        let risk_model = vec![RiskModelEntry {
            credit_score: Some("0499".to_string()),
        }];
        assert!(evaluate_credit_score(&risk_model, 500.0).expect("score").failed);
        assert!(!evaluate_credit_score(&risk_model, 499.0).expect("score").failed);
    }

    #[test]
    fn credit_score_requires_risk_model_entry() {
        assert_eq!(
            evaluate_credit_score(&[], 500.0).expect_err("empty model"),
            CreditCheckError::MissingField {
                field: "riskModel[0]"
            }
        );
        assert_eq!(
            evaluate_credit_score(&[RiskModelEntry::default()], 500.0).expect_err("no score"),
            CreditCheckError::MissingField {
                field: "riskModel[0].credit_score"
            }
        );
    }

    #[test]
    fn internal_risk_threshold_is_inclusive() {
        assert!(!evaluate_internal_risk(450.0, 450.0).failed);
        assert!(evaluate_internal_risk(449.9, 450.0).failed);
        assert!(evaluate_internal_risk(f64::NAN, 450.0).failed);
    }
}
