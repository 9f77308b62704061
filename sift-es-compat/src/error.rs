//! Error types for criteria conversion

use sift::FilterOperator;

/// Conversion errors.
///
/// Every variant is a contract violation by the layer that built the
/// criteria: malformed operator/value pairings, or a filter kind no branch
/// knows. None are recoverable inside the converter — the caller gets either
/// a correct body or one of these, never partial output.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unknown filter type: {0}")]
    UnknownFilterType(String),

    #[error("Operator {0} requires an array value")]
    ExpectedArrayValue(FilterOperator),

    #[error("Operator {0} cannot take an array value")]
    UnexpectedArrayValue(FilterOperator),

    #[error("Operator {0} cannot take a null value")]
    UnexpectedNullValue(FilterOperator),

    #[error("Unsupported condition operator: {0}")]
    UnexpectedOperator(FilterOperator),
}
