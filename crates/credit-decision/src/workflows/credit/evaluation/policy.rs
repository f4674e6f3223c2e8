use tracing::warn;

use super::super::domain::{ApplicationId, CheckOutcomes, KnockoutResult};

/// Collapse the four rule outcomes into a verdict. Failed checks and rejections are logged
/// as diagnostics; logging never changes the returned result.
pub fn aggregate(application_id: ApplicationId, outcomes: &CheckOutcomes) -> KnockoutResult {
    for (check, outcome) in outcomes.iter().filter(|(_, outcome)| outcome.failed) {
        warn!(
            application_id,
            check = check.label(),
            measured_value = outcome.measured_value,
            "knockout check failed"
        );
    }

    if outcomes.any_failed() {
        warn!(application_id, "application rejected by knockout checks");
        KnockoutResult::Reject
    } else {
        KnockoutResult::Accept
    }
}
