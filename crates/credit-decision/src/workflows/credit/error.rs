use super::domain::ApplicationId;

/// Fatal, per-application data problems. None of these are transient; a batch caller should
/// record the failure and move on to the next application.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreditCheckError {
    #[error("application {application_id} has no credit bureau report")]
    Precondition { application_id: ApplicationId },
    #[error("required field `{field}` is missing")]
    MissingField { field: &'static str },
    #[error("{}", describe_conversion(.field, .value, .tradeline_index))]
    ValueConversion {
        field: &'static str,
        value: String,
        tradeline_index: Option<usize>,
    },
}

impl CreditCheckError {
    pub(crate) fn conversion(
        field: &'static str,
        value: &str,
        tradeline_index: Option<usize>,
    ) -> Self {
        Self::ValueConversion {
            field,
            value: value.to_string(),
            tradeline_index,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CreditCheckError::Precondition { .. } => "precondition",
            CreditCheckError::MissingField { .. } => "missing_field",
            CreditCheckError::ValueConversion { .. } => "value_conversion",
        }
    }
}

fn describe_conversion(field: &str, value: &str, tradeline_index: &Option<usize>) -> String {
    match tradeline_index {
        Some(index) => {
            format!("tradeline {index}: `{field}` value '{value}' could not be converted")
        }
        None => format!("`{field}` value '{value}' could not be converted"),
    }
}
