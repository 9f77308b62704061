//! Elasticsearch search body produced by the converter

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root ES search request body.
///
/// Optional keys are omitted from the serialized JSON when unset — the
/// search API distinguishes an absent `query` (match everything) from a
/// present one, so presence must round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsSearchBody {
    /// Target index name
    pub index: String,

    /// Starting offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,

    /// Maximum number of results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,

    /// Bool query translated from the criteria filters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,

    /// Sort clauses, one single-entry map per order spec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<Value>>,
}

impl EsSearchBody {
    /// Serialize into a plain JSON value for the transport layer
    pub fn into_value(self) -> Value {
        // serializing a struct of plain JSON-able fields cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_keys_are_absent() {
        let body = EsSearchBody {
            index: "logs".to_string(),
            from: None,
            size: None,
            query: None,
            sort: None,
        };
        assert_eq!(body.into_value(), json!({"index": "logs"}));
    }

    #[test]
    fn test_set_keys_are_present() {
        let body = EsSearchBody {
            index: "logs".to_string(),
            from: Some(0),
            size: Some(10),
            query: Some(json!({"bool": {"must": []}})),
            sort: Some(vec![json!({"ts": {"order": "desc"}})]),
        };
        let value = body.into_value();
        assert_eq!(value["from"], 0);
        assert_eq!(value["size"], 10);
        assert!(value["query"]["bool"]["must"].is_array());
        assert_eq!(value["sort"][0]["ts"]["order"], "desc");
    }

    #[test]
    fn test_deserialize_minimal() {
        let body: EsSearchBody = serde_json::from_value(json!({"index": "x"})).unwrap();
        assert_eq!(body.index, "x");
        assert!(body.query.is_none());
    }
}
