//! Criteria to Elasticsearch query-body translation

use crate::error::ConvertError;
use crate::query::types::EsSearchBody;
use crate::Result;
use serde_json::{json, Value};
use sift::{Condition, Criteria, Filter, FilterOperator, Order};
use std::collections::HashMap;
use tracing::debug;

/// Translates [`Criteria`] into an Elasticsearch search body.
///
/// Holds the target index name and a logical-to-physical field name map,
/// both fixed at construction. A converter carries no per-call state, so one
/// instance can be reused and shared across threads freely.
#[derive(Debug, Clone)]
pub struct EsQueryConverter {
    index: String,
    field_map: HashMap<String, String>,
}

impl EsQueryConverter {
    pub fn new(index: impl Into<String>, field_map: HashMap<String, String>) -> Self {
        Self {
            index: index.into(),
            field_map,
        }
    }

    /// Translate criteria into a search body.
    ///
    /// Keys are only emitted for parts the criteria actually carry: no
    /// filters means no `query`, no orders means no `sort`, and unset
    /// offset/limit leave `from`/`size` out. Multiple top-level filters are
    /// combined with AND semantics.
    pub fn convert(&self, criteria: &Criteria) -> Result<EsSearchBody> {
        debug!(
            "converting criteria with {} filters for index {}",
            criteria.filters().len(),
            self.index
        );

        Ok(EsSearchBody {
            index: self.index.clone(),
            from: criteria.offset(),
            size: criteria.limit(),
            query: self.format_root(criteria.filters())?,
            sort: self.format_orders(criteria.orders()),
        })
    }

    /// Translate the top-level filters into the `query` clause.
    ///
    /// A single root filter is used directly; two or more behave as if the
    /// caller had AND-combined them. A root that is not already a `bool`
    /// clause (a lone leaf condition) gets wrapped into `bool.must` so the
    /// emitted query is always boolean-shaped.
    fn format_root(&self, filters: &[Filter]) -> Result<Option<Value>> {
        let clause = match filters {
            [] => return Ok(None),
            [single] => self.format_filter(single)?,
            many => self.format_children("must", many)?,
        };

        if clause.get("bool").is_some() {
            Ok(Some(clause))
        } else {
            Ok(Some(json!({"bool": {"must": [clause]}})))
        }
    }

    fn format_filter(&self, filter: &Filter) -> Result<Value> {
        match filter {
            Filter::And(children) => self.format_children("must", children),
            Filter::Or(children) => self.format_children("should", children),
            Filter::Condition(condition) => self.format_condition(condition),
        }
    }

    fn format_children(&self, occur: &str, children: &[Filter]) -> Result<Value> {
        let clauses = children
            .iter()
            .map(|child| self.format_filter(child))
            .collect::<Result<Vec<_>>>()?;

        Ok(json!({"bool": {occur: clauses}}))
    }

    /// Translate one condition leaf per the operator table.
    ///
    /// The field name goes through the field map; the value never does.
    /// Operator/value arity mismatches fail here rather than being coerced.
    fn format_condition(&self, condition: &Condition) -> Result<Value> {
        let field = self.map_field(condition.field());
        let op = condition.operator();
        let value = condition.value();

        match op {
            FilterOperator::In | FilterOperator::NotIn => {
                if !value.is_array() {
                    return Err(ConvertError::ExpectedArrayValue(op));
                }
            }
            _ if value.is_array() => return Err(ConvertError::UnexpectedArrayValue(op)),
            _ => {}
        }

        let clause = match op {
            FilterOperator::In => json!({"terms": {field: value}}),
            FilterOperator::NotIn => json!({"bool": {"must_not": {"terms": {field: value}}}}),
            FilterOperator::Eq if value.is_null() => {
                json!({"bool": {"must_not": {"exists": {"field": field}}}})
            }
            FilterOperator::Eq => json!({"term": {field: value}}),
            FilterOperator::Neq if value.is_null() => json!({"exists": {"field": field}}),
            FilterOperator::Neq => json!({"bool": {"must_not": {"term": {field: value}}}}),
            FilterOperator::Gt => json!({"range": {field: {"gt": non_null(op, value)?}}}),
            FilterOperator::Gte => json!({"range": {field: {"gte": non_null(op, value)?}}}),
            FilterOperator::Lt => json!({"range": {field: {"lt": non_null(op, value)?}}}),
            FilterOperator::Lte => json!({"range": {field: {"lte": non_null(op, value)?}}}),
            FilterOperator::Contains => {
                let text = pattern_text(non_null(op, value)?);
                json!({"wildcard": {field: format!("*{text}*")}})
            }
            FilterOperator::StartsWith => json!({"prefix": {field: non_null(op, value)?}}),
            FilterOperator::EndsWith => {
                let text = pattern_text(non_null(op, value)?);
                json!({"wildcard": {field: format!("{text}*")}})
            }
        };

        Ok(clause)
    }

    fn format_orders(&self, orders: &[Order]) -> Option<Vec<Value>> {
        if orders.is_empty() {
            return None;
        }

        Some(
            orders
                .iter()
                .map(|order| {
                    let field = self.map_field(order.by());
                    json!({field: {"order": order.direction().as_str()}})
                })
                .collect(),
        )
    }

    /// Map a logical field name to its physical name, identity if unmapped
    fn map_field<'a>(&'a self, name: &'a str) -> &'a str {
        self.field_map.get(name).map(String::as_str).unwrap_or(name)
    }
}

fn non_null<'a>(op: FilterOperator, value: &'a Value) -> Result<&'a Value> {
    if value.is_null() {
        Err(ConvertError::UnexpectedNullValue(op))
    } else {
        Ok(value)
    }
}

/// Text used inside wildcard patterns: strings verbatim, other scalars via
/// their JSON rendering
fn pattern_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
