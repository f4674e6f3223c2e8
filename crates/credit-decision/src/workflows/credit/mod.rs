//! Consumer credit decisioning: knockout checks over a parsed bureau report and bucketed
//! credit limit assignment for accepted applications.
//!
//! Data flows one way: tradelines are normalized, the four knockout rules run in a fixed
//! order, their outcomes are aggregated into ACCEPT or REJECT, and only an accepted
//! application is matched against the limit table.

pub mod batch;
pub mod domain;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod limits;
pub mod normalizer;
pub mod router;

#[cfg(test)]
mod tests;

pub use batch::{evaluate_batch, BatchEntry, BatchReport};
pub use domain::{
    Application, ApplicationId, BureauReport, CheckOutcome, CheckOutcomes, ConsumerIdentity,
    CreditLimit, DateOfBirth, Decision, KnockoutCheck, KnockoutResult, PersonName,
    RiskModelEntry, Tradeline,
};
pub use engine::{Clock, CreditDecisionEngine, FixedClock, SystemClock};
pub use error::CreditCheckError;
pub use evaluation::{
    aggregate, evaluate_age, evaluate_credit_score, evaluate_delinquency, evaluate_internal_risk,
    DecisionConfig,
};
pub use limits::bucket_limit;
pub use normalizer::{
    normalize_tradelines, NormalizedTradeline, TradelineField, DEFAULT_NUMERIC_FIELDS,
};
pub use router::decision_router;
