//! Boolean filter tree for search criteria.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Comparison operator carried by a condition leaf.
///
/// Closed set: converters dispatch on it exhaustively, so adding an operator
/// is a compile-checked change at every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Eq,
    Neq,
    In,
    NotIn,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
    StartsWith,
    EndsWith,
}

impl FilterOperator {
    /// Get the operator name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Neq => "neq",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not_in",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "starts_with",
            FilterOperator::EndsWith => "ends_with",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf filter: a single field compared against a value.
///
/// The value is a raw [`serde_json::Value`] so conditions can hold scalars,
/// null, or arrays; whether the value shape fits the operator is checked by
/// the consuming converter, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    field: String,
    operator: FilterOperator,
    value: Value,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Logical field name the condition applies to
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Node in the criteria filter tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// All children must match
    And(Vec<Filter>),

    /// At least one child must match
    Or(Vec<Filter>),

    /// Leaf condition on a single field
    Condition(Condition),
}

impl Filter {
    /// Combine children with AND semantics
    pub fn and(children: Vec<Filter>) -> Self {
        Filter::And(children)
    }

    /// Combine children with OR semantics
    pub fn or(children: Vec<Filter>) -> Self {
        Filter::Or(children)
    }

    /// Create a condition leaf
    pub fn condition(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<Value>,
    ) -> Self {
        Filter::Condition(Condition::new(field, operator, value))
    }

    /// field = value (null value means "field is absent")
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::Eq, value)
    }

    /// field != value (null value means "field is present")
    pub fn neq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::Neq, value)
    }

    /// field is one of the given values; the value must be an array
    pub fn is_in(field: impl Into<String>, values: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::In, values)
    }

    /// field is none of the given values; the value must be an array
    pub fn not_in(field: impl Into<String>, values: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::NotIn, values)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::Gt, value)
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::Gte, value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::Lt, value)
    }

    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::Lte, value)
    }

    /// field contains the value as a substring
    pub fn contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::Contains, value)
    }

    pub fn starts_with(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::StartsWith, value)
    }

    pub fn ends_with(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::condition(field, FilterOperator::EndsWith, value)
    }

    /// Get the filter kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Filter::And(_) => "and",
            Filter::Or(_) => "or",
            Filter::Condition(_) => "condition",
        }
    }
}
