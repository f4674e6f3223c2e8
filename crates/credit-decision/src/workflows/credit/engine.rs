use chrono::{Local, NaiveDate};
use tracing::info;

use super::domain::{Application, CreditLimit, Decision, KnockoutResult};
use super::error::CreditCheckError;
use super::evaluation::{aggregate, run_checks, CheckInputs, DecisionConfig};
use super::limits::bucket_limit;
use super::normalizer::{normalize_tradelines, DEFAULT_NUMERIC_FIELDS};

/// Source of the evaluation date used by the age check.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date on every evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Stateless orchestrator running the knockout checks and limit assignment for one
/// application at a time. Safe to share across threads.
pub struct CreditDecisionEngine<C = SystemClock> {
    config: DecisionConfig,
    clock: C,
}

impl CreditDecisionEngine<SystemClock> {
    pub fn new(config: DecisionConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> CreditDecisionEngine<C> {
    pub fn with_clock(config: DecisionConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Evaluate one application. Tradelines are normalized before any field lookup, so a
    /// malformed amount is reported ahead of missing identity data. All four checks always
    /// run; the limit is only looked up when every check passes.
    pub fn run_credit_check(
        &self,
        application: &Application,
    ) -> Result<Decision, CreditCheckError> {
        let application_id = application.application_id;
        let report = application
            .credit_bureau_report
            .as_ref()
            .filter(|report| !report.is_empty())
            .ok_or(CreditCheckError::Precondition { application_id })?;

        let tradelines = normalize_tradelines(&report.tradelines, &DEFAULT_NUMERIC_FIELDS)?;
        let identity = report
            .consumer_identity
            .as_ref()
            .ok_or(CreditCheckError::MissingField {
                field: "consumerIdentity",
            })?;

        let inputs = CheckInputs {
            application_id,
            identity,
            risk_model: &report.risk_model,
            tradelines: &tradelines,
            internal_risk_score: application.internal_risk_score,
        };
        let check_outcomes = run_checks(&inputs, &self.config, self.clock.today())?;

        let knockout_result = aggregate(application_id, &check_outcomes);
        let credit_limit = match knockout_result {
            KnockoutResult::Accept => bucket_limit(
                check_outcomes.credit_score.measured_value,
                application.internal_risk_score,
            ),
            KnockoutResult::Reject => CreditLimit::NoLimit,
        };

        info!(
            application_id,
            result = knockout_result.label(),
            credit_limit = %credit_limit,
            "credit decision completed"
        );

        Ok(Decision {
            application_id,
            knockout_result,
            check_outcomes,
            credit_limit,
        })
    }
}
