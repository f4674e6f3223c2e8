use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::Tradeline;
use super::error::CreditCheckError;

/// Numeric-string tradeline fields that can be converted to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TradelineField {
    Amount1,
    Amount2,
    BalanceAmount,
    #[serde(rename = "delinquencies30Days")]
    Delinquencies30Days,
    #[serde(rename = "delinquencies60Days")]
    Delinquencies60Days,
    #[serde(rename = "delinquencies90to180Days")]
    Delinquencies90To180Days,
}

/// Fields converted before the knockout checks run.
pub const DEFAULT_NUMERIC_FIELDS: [TradelineField; 4] = [
    TradelineField::Amount1,
    TradelineField::Amount2,
    TradelineField::BalanceAmount,
    TradelineField::Delinquencies30Days,
];

impl TradelineField {
    pub const fn feed_name(self) -> &'static str {
        match self {
            TradelineField::Amount1 => "amount1",
            TradelineField::Amount2 => "amount2",
            TradelineField::BalanceAmount => "balanceAmount",
            TradelineField::Delinquencies30Days => "delinquencies30Days",
            TradelineField::Delinquencies60Days => "delinquencies60Days",
            TradelineField::Delinquencies90To180Days => "delinquencies90to180Days",
        }
    }

    fn raw(self, tradeline: &Tradeline) -> Option<&str> {
        let value = match self {
            TradelineField::Amount1 => &tradeline.amount1,
            TradelineField::Amount2 => &tradeline.amount2,
            TradelineField::BalanceAmount => &tradeline.balance_amount,
            TradelineField::Delinquencies30Days => &tradeline.delinquencies_30_days,
            TradelineField::Delinquencies60Days => &tradeline.delinquencies_60_days,
            TradelineField::Delinquencies90To180Days => &tradeline.delinquencies_90_to_180_days,
        };
        value.as_deref()
    }
}

/// Tradeline with the requested numeric fields parsed. Fields that were absent on the source
/// record, or not requested, have no entry in `values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTradeline {
    pub account_type: Option<String>,
    pub amount1_qualifier: Option<String>,
    pub amount2_qualifier: Option<String>,
    pub balance_date: Option<String>,
    pub open_or_closed: Option<String>,
    pub values: BTreeMap<TradelineField, f64>,
}

impl NormalizedTradeline {
    pub fn value(&self, field: TradelineField) -> Option<f64> {
        self.values.get(&field).copied()
    }
}

/// Convert the listed numeric-string fields of every tradeline, preserving order.
pub fn normalize_tradelines(
    tradelines: &[Tradeline],
    fields: &[TradelineField],
) -> Result<Vec<NormalizedTradeline>, CreditCheckError> {
    tradelines
        .iter()
        .enumerate()
        .map(|(index, tradeline)| normalize_tradeline(index, tradeline, fields))
        .collect()
}

fn normalize_tradeline(
    index: usize,
    tradeline: &Tradeline,
    fields: &[TradelineField],
) -> Result<NormalizedTradeline, CreditCheckError> {
    let mut values = BTreeMap::new();

    for &field in fields {
        if let Some(raw) = field.raw(tradeline) {
            let parsed = parse_numeric(raw)
                .ok_or_else(|| CreditCheckError::conversion(field.feed_name(), raw, Some(index)))?;
            values.insert(field, parsed);
        }
    }

    Ok(NormalizedTradeline {
        account_type: tradeline.account_type.clone(),
        amount1_qualifier: tradeline.amount1_qualifier.clone(),
        amount2_qualifier: tradeline.amount2_qualifier.clone(),
        balance_date: tradeline.balance_date.clone(),
        open_or_closed: tradeline.open_or_closed.clone(),
        values,
    })
}

/// Parse a zero-padded numeric string such as `"00002650"` or `"0787"`.
pub(crate) fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
