mod config;
mod policy;
mod rules;

pub use config::{
    DecisionConfig, DEFAULT_MINIMUM_AGE, DEFAULT_MINIMUM_CREDIT_SCORE,
    DEFAULT_MINIMUM_INTERNAL_RISK_SCORE,
};
pub use policy::aggregate;
pub use rules::{evaluate_age, evaluate_credit_score, evaluate_delinquency, evaluate_internal_risk};

use chrono::NaiveDate;
use tracing::debug;

use super::domain::{
    ApplicationId, CheckOutcome, CheckOutcomes, ConsumerIdentity, KnockoutCheck, RiskModelEntry,
};
use super::error::CreditCheckError;
use super::normalizer::NormalizedTradeline;

/// Inputs the four knockout rules read, borrowed from one application.
pub(crate) struct CheckInputs<'a> {
    pub application_id: ApplicationId,
    pub identity: &'a ConsumerIdentity,
    pub risk_model: &'a [RiskModelEntry],
    pub tradelines: &'a [NormalizedTradeline],
    pub internal_risk_score: f64,
}

/// Run every rule in evaluation order. No rule is skipped because an earlier one failed.
pub(crate) fn run_checks(
    inputs: &CheckInputs<'_>,
    config: &DecisionConfig,
    as_of: NaiveDate,
) -> Result<CheckOutcomes, CreditCheckError> {
    let delinquency = evaluate_delinquency(inputs.tradelines);
    trace_check(inputs.application_id, KnockoutCheck::Delinquency, &delinquency);

    let age = evaluate_age(inputs.identity, as_of, config.minimum_age)?;
    trace_check(inputs.application_id, KnockoutCheck::Age, &age);

    let credit_score = evaluate_credit_score(inputs.risk_model, config.minimum_credit_score)?;
    trace_check(inputs.application_id, KnockoutCheck::CreditScore, &credit_score);

    let internal_risk =
        evaluate_internal_risk(inputs.internal_risk_score, config.minimum_internal_risk_score);
    trace_check(
        inputs.application_id,
        KnockoutCheck::InternalRiskScore,
        &internal_risk,
    );

    Ok(CheckOutcomes {
        delinquency,
        age,
        credit_score,
        internal_risk,
    })
}

fn trace_check(application_id: ApplicationId, check: KnockoutCheck, outcome: &CheckOutcome) {
    debug!(
        application_id,
        check = check.label(),
        failed = outcome.failed,
        measured_value = outcome.measured_value,
        "knockout check evaluated"
    );
}
