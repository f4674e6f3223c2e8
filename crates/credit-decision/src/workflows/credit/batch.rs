use serde::Serialize;
use tracing::error;

use super::domain::{Application, ApplicationId, Decision, KnockoutResult};
use super::engine::{Clock, CreditDecisionEngine};
use super::error::CreditCheckError;

/// Result for one application within a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchEntry {
    Decided(Decision),
    Failed {
        application_id: ApplicationId,
        kind: &'static str,
        error: String,
    },
}

impl BatchEntry {
    pub fn application_id(&self) -> ApplicationId {
        match self {
            BatchEntry::Decided(decision) => decision.application_id,
            BatchEntry::Failed { application_id, .. } => *application_id,
        }
    }

    pub fn decision(&self) -> Option<&Decision> {
        match self {
            BatchEntry::Decided(decision) => Some(decision),
            BatchEntry::Failed { .. } => None,
        }
    }
}

/// Per-application results in input order plus tallies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub accepted: usize,
    pub rejected: usize,
    pub failed: usize,
    pub entries: Vec<BatchEntry>,
}

/// Evaluate every application, isolating data errors so one bad record does not stop the
/// rest of the batch.
pub fn evaluate_batch<C: Clock>(
    engine: &CreditDecisionEngine<C>,
    applications: &[Application],
) -> BatchReport {
    let mut report = BatchReport {
        accepted: 0,
        rejected: 0,
        failed: 0,
        entries: Vec::with_capacity(applications.len()),
    };

    for application in applications {
        let entry = match engine.run_credit_check(application) {
            Ok(decision) => {
                match decision.knockout_result {
                    KnockoutResult::Accept => report.accepted += 1,
                    KnockoutResult::Reject => report.rejected += 1,
                }
                BatchEntry::Decided(decision)
            }
            Err(err) => {
                report.failed += 1;
                failed_entry(application.application_id, err)
            }
        };
        report.entries.push(entry);
    }

    report
}

fn failed_entry(application_id: ApplicationId, err: CreditCheckError) -> BatchEntry {
    error!(application_id, kind = err.kind(), error = %err, "application could not be evaluated");
    BatchEntry::Failed {
        application_id,
        kind: err.kind(),
        error: err.to_string(),
    }
}
