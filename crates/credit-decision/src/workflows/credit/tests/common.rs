use chrono::NaiveDate;

use crate::workflows::credit::domain::{
    Application, BureauReport, ConsumerIdentity, DateOfBirth, PersonName, RiskModelEntry,
    Tradeline,
};
use crate::workflows::credit::engine::{CreditDecisionEngine, FixedClock};
use crate::workflows::credit::evaluation::DecisionConfig;

pub(super) fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

pub(super) fn engine() -> CreditDecisionEngine<FixedClock> {
    CreditDecisionEngine::with_clock(DecisionConfig::default(), FixedClock(evaluation_date()))
}

pub(super) fn tradeline(
    account_type: &str,
    amount1: &str,
    delinquencies_30_days: Option<&str>,
    open_or_closed: &str,
) -> Tradeline {
    Tradeline {
        account_type: Some(account_type.to_string()),
        amount1: Some(amount1.to_string()),
        amount1_qualifier: Some("L".to_string()),
        balance_date: Some("09132022".to_string()),
        delinquencies_30_days: delinquencies_30_days.map(str::to_string),
        delinquencies_60_days: Some("00".to_string()),
        delinquencies_90_to_180_days: Some("00".to_string()),
        open_or_closed: Some(open_or_closed.to_string()),
        ..Tradeline::default()
    }
}

pub(super) fn report(credit_score: &str, delinquencies: [Option<&str>; 4]) -> BureauReport {
    let accounts = [
        ("07", "00002650", "C"),
        ("07", "00000500", "O"),
        ("26", "00088600", "O"),
        ("19", "00029650", "O"),
    ];
    let tradelines = accounts
        .iter()
        .zip(delinquencies)
        .map(|((account_type, amount1, status), count)| {
            tradeline(account_type, amount1, count, status)
        })
        .collect();

    BureauReport {
        consumer_identity: Some(ConsumerIdentity {
            name: vec![PersonName {
                first_name: "LUKE".to_string(),
                middle_name: "PAUL".to_string(),
                surname: "DUVERGER".to_string(),
            }],
            date_of_birth: Some(DateOfBirth {
                year: 1964,
                month: 11,
                day: 23,
            }),
        }),
        risk_model: vec![RiskModelEntry {
            credit_score: Some(credit_score.to_string()),
        }],
        tradelines,
    }
}

pub(super) fn clean_report(credit_score: &str) -> BureauReport {
    report(credit_score, [Some("00"), Some("00"), Some("00"), Some("00")])
}

pub(super) fn application(
    application_id: u64,
    report: BureauReport,
    internal_risk_score: f64,
) -> Application {
    Application {
        application_id,
        credit_bureau_report: Some(report),
        internal_risk_score,
    }
}
