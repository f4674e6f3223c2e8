use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Identifier assigned to an application by the caller.
pub type ApplicationId = u64;

/// One name entry as reported by the bureau.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "middleName", default)]
    pub middle_name: String,
    #[serde(default)]
    pub surname: String,
}

/// Calendar date of birth exactly as reported; validated when the age check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Identity section of a bureau report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConsumerIdentity {
    #[serde(default)]
    pub name: Vec<PersonName>,
    #[serde(default)]
    pub date_of_birth: Option<DateOfBirth>,
}

/// A single reported credit account. Numeric values arrive as zero-padded strings and any
/// of them may be missing, which is not the same as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tradeline {
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub amount1: Option<String>,
    #[serde(default)]
    pub amount1_qualifier: Option<String>,
    #[serde(default)]
    pub amount2: Option<String>,
    #[serde(default)]
    pub amount2_qualifier: Option<String>,
    #[serde(default)]
    pub balance_amount: Option<String>,
    #[serde(default)]
    pub balance_date: Option<String>,
    #[serde(rename = "delinquencies30Days", default)]
    pub delinquencies_30_days: Option<String>,
    #[serde(rename = "delinquencies60Days", default)]
    pub delinquencies_60_days: Option<String>,
    #[serde(rename = "delinquencies90to180Days", default)]
    pub delinquencies_90_to_180_days: Option<String>,
    #[serde(default)]
    pub open_or_closed: Option<String>,
}

/// Bureau risk model output. Only the first entry of a report is scored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskModelEntry {
    #[serde(default)]
    pub credit_score: Option<String>,
}

/// Already-deserialized credit bureau report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BureauReport {
    #[serde(rename = "consumerIdentity", default)]
    pub consumer_identity: Option<ConsumerIdentity>,
    #[serde(rename = "riskModel", default)]
    pub risk_model: Vec<RiskModelEntry>,
    #[serde(rename = "tradeline", default)]
    pub tradelines: Vec<Tradeline>,
}

impl BureauReport {
    /// A report with no identity, no risk model, and no tradelines carries nothing to evaluate.
    pub fn is_empty(&self) -> bool {
        self.consumer_identity.is_none() && self.risk_model.is_empty() && self.tradelines.is_empty()
    }
}

/// Credit application submitted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: ApplicationId,
    #[serde(default)]
    pub credit_bureau_report: Option<BureauReport>,
    #[serde(rename = "NB36_risk_score")]
    pub internal_risk_score: f64,
}

/// Result of a single knockout rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub failed: bool,
    pub measured_value: f64,
}

impl CheckOutcome {
    pub fn new(failed: bool, measured_value: f64) -> Self {
        Self {
            failed,
            measured_value,
        }
    }
}

/// The four knockout rules in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnockoutCheck {
    Delinquency,
    Age,
    CreditScore,
    InternalRiskScore,
}

impl KnockoutCheck {
    pub const ORDER: [KnockoutCheck; 4] = [
        KnockoutCheck::Delinquency,
        KnockoutCheck::Age,
        KnockoutCheck::CreditScore,
        KnockoutCheck::InternalRiskScore,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            KnockoutCheck::Delinquency => "delinquency_last_30_days",
            KnockoutCheck::Age => "minimum_age",
            KnockoutCheck::CreditScore => "credit_score",
            KnockoutCheck::InternalRiskScore => "internal_risk_score",
        }
    }
}

/// Outcomes of all four knockout rules for one application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcomes {
    pub delinquency: CheckOutcome,
    pub age: CheckOutcome,
    pub credit_score: CheckOutcome,
    pub internal_risk: CheckOutcome,
}

impl CheckOutcomes {
    pub fn get(&self, check: KnockoutCheck) -> &CheckOutcome {
        match check {
            KnockoutCheck::Delinquency => &self.delinquency,
            KnockoutCheck::Age => &self.age,
            KnockoutCheck::CreditScore => &self.credit_score,
            KnockoutCheck::InternalRiskScore => &self.internal_risk,
        }
    }

    /// Outcomes paired with their check, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (KnockoutCheck, &CheckOutcome)> + '_ {
        KnockoutCheck::ORDER
            .into_iter()
            .map(move |check| (check, self.get(check)))
    }

    pub fn failed_checks(&self) -> Vec<KnockoutCheck> {
        self.iter()
            .filter(|(_, outcome)| outcome.failed)
            .map(|(check, _)| check)
            .collect()
    }

    pub fn any_failed(&self) -> bool {
        self.iter().any(|(_, outcome)| outcome.failed)
    }
}

/// Overall knockout verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KnockoutResult {
    Accept,
    Reject,
}

impl KnockoutResult {
    pub const fn label(self) -> &'static str {
        match self {
            KnockoutResult::Accept => "ACCEPT",
            KnockoutResult::Reject => "REJECT",
        }
    }
}

/// Assigned credit limit. `NoLimit` means no limit was computed or no bucket matched; it is
/// never represented as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditLimit {
    Amount(u32),
    NoLimit,
}

impl CreditLimit {
    pub const NO_LIMIT_LABEL: &'static str = "N/A";

    pub fn is_no_limit(self) -> bool {
        matches!(self, CreditLimit::NoLimit)
    }
}

impl std::fmt::Display for CreditLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditLimit::Amount(amount) => write!(f, "{amount}"),
            CreditLimit::NoLimit => f.write_str(Self::NO_LIMIT_LABEL),
        }
    }
}

impl Serialize for CreditLimit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CreditLimit::Amount(amount) => serializer.serialize_u32(*amount),
            CreditLimit::NoLimit => serializer.serialize_str(Self::NO_LIMIT_LABEL),
        }
    }
}

/// Final decision record for one application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub application_id: ApplicationId,
    pub knockout_result: KnockoutResult,
    pub check_outcomes: CheckOutcomes,
    pub credit_limit: CreditLimit,
}

impl Decision {
    pub fn summary(&self) -> String {
        match self.knockout_result {
            KnockoutResult::Accept => format!(
                "application {} accepted with credit limit {}",
                self.application_id, self.credit_limit
            ),
            KnockoutResult::Reject => {
                let failed = self
                    .check_outcomes
                    .failed_checks()
                    .into_iter()
                    .map(KnockoutCheck::label)
                    .collect::<Vec<_>>();
                format!(
                    "application {} rejected: {}",
                    self.application_id,
                    failed.join(", ")
                )
            }
        }
    }
}
