//! End-to-end conversion tests: full criteria in, exact search body out.

use serde_json::{json, Value};
use sift::{Criteria, Filter};
use sift_es_compat::EsQueryConverter;
use std::collections::HashMap;

fn field_mappings() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert(
        "childField".to_string(),
        "first_child_table.field".to_string(),
    );
    map.insert(
        "secondChildField".to_string(),
        "second_child_table.field".to_string(),
    );
    map.insert("oldOrder".to_string(), "newOrder".to_string());
    map
}

#[test]
fn converts_full_criteria_to_search_body() {
    let converter = EsQueryConverter::new("index_name", field_mappings());

    let criteria = Criteria::builder()
        .filter(Filter::or(vec![
            Filter::eq("childField", "value"),
            Filter::eq("secondChildField", Value::Null),
        ]))
        .filter(Filter::neq("oldOrder", Value::Null))
        .filter(Filter::is_in("value", vec!["1", "2"]))
        .filter(Filter::not_in("value", vec![1, 2]))
        .filter(Filter::contains("value", "value"))
        .filter(Filter::starts_with("value", "value"))
        .filter(Filter::ends_with("value", "value"))
        .filter(Filter::eq("value", "value"))
        .filter(Filter::neq("value", "value"))
        .filter(Filter::gt("value", 1))
        .filter(Filter::gte("value", 1))
        .filter(Filter::lt("value", 1))
        .filter(Filter::lte("value", 1))
        .order_asc("oldOrder")
        .order_desc("regularField")
        .limit(20)
        .offset(5)
        .build();

    let body = converter.convert(&criteria).unwrap();

    let expected = json!({
        "index": "index_name",
        "from": 5,
        "size": 20,
        "query": {
            "bool": {
                "must": [
                    {"bool": {
                        "should": [
                            {"term": {"first_child_table.field": "value"}},
                            {"bool": {"must_not": {"exists": {"field": "second_child_table.field"}}}}
                        ]
                    }},
                    {"exists": {"field": "newOrder"}},
                    {"terms": {"value": ["1", "2"]}},
                    {"bool": {"must_not": {"terms": {"value": [1, 2]}}}},
                    {"wildcard": {"value": "*value*"}},
                    {"prefix": {"value": "value"}},
                    {"wildcard": {"value": "value*"}},
                    {"term": {"value": "value"}},
                    {"bool": {"must_not": {"term": {"value": "value"}}}},
                    {"range": {"value": {"gt": 1}}},
                    {"range": {"value": {"gte": 1}}},
                    {"range": {"value": {"lt": 1}}},
                    {"range": {"value": {"lte": 1}}}
                ]
            }
        },
        "sort": [
            {"newOrder": {"order": "asc"}},
            {"regularField": {"order": "desc"}}
        ]
    });

    assert_eq!(body.into_value(), expected);
}

#[test]
fn empty_criteria_yields_bare_index_body() {
    let converter = EsQueryConverter::new("index_name", field_mappings());
    let body = converter.convert(&Criteria::builder().build()).unwrap();

    assert_eq!(body.into_value(), json!({"index": "index_name"}));
}

#[test]
fn single_condition_yields_wrapped_bool_query() {
    let converter = EsQueryConverter::new("index_name", HashMap::new());
    let criteria = Criteria::builder()
        .filter(Filter::eq("status", "active"))
        .build();

    let body = converter.convert(&criteria).unwrap();

    assert_eq!(
        body.into_value(),
        json!({
            "index": "index_name",
            "query": {"bool": {"must": [{"term": {"status": "active"}}]}}
        })
    );
}

#[test]
fn converter_is_reusable_across_calls() {
    let converter = EsQueryConverter::new("index_name", field_mappings());

    let with_everything = Criteria::builder()
        .filter(Filter::eq("childField", "value"))
        .order_asc("oldOrder")
        .offset(5)
        .limit(20)
        .build();
    let first = converter.convert(&with_everything).unwrap();
    assert!(first.query.is_some());
    assert!(first.sort.is_some());

    let second = converter.convert(&Criteria::builder().build()).unwrap();
    assert_eq!(second.into_value(), json!({"index": "index_name"}));

    // the first result is reproducible after other calls
    let third = converter.convert(&with_everything).unwrap();
    assert_eq!(first, third);
}
