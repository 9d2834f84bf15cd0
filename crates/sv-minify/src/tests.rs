use crate::*;
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn obj(json: serde_json::Value) -> Object {
    match Value::from(json) {
        Value::Object(object) => object,
        other => panic!("expected object, got {}", other.kind()),
    }
}

fn arr(json: serde_json::Value) -> Array {
    match Value::from(json) {
        Value::Array(array) => array,
        other => panic!("expected array, got {}", other.kind()),
    }
}

// ========== Value minifier ==========

#[test]
fn test_value_absent() {
    assert_eq!(minify_value(None), None);
}

#[test]
fn test_value_null() {
    assert_eq!(minify_value(Some(&Value::Null)), None);
}

#[test]
fn test_value_scalars_pass_through() {
    for value in [Value::from("test-value"), Value::from(true), Value::from(123)] {
        assert_eq!(minify_value(Some(&value)), Some(value.clone()));
    }
}

#[test]
fn test_value_falsy_preserved() {
    assert_eq!(minify_value(Some(&Value::Bool(false))), Some(Value::Bool(false)));
    assert_eq!(minify_value(Some(&Value::Number(0.0))), Some(Value::Number(0.0)));
    assert_eq!(minify_value(Some(&Value::from(""))), Some(Value::from("")));
}

#[test]
fn test_value_empty_containers() {
    assert_eq!(minify_value(Some(&v(json!({})))), None);
    assert_eq!(minify_value(Some(&v(json!([])))), None);
}

#[test]
fn test_value_wraps_surviving_containers() {
    let value = v(json!({"a": [null, 1]}));
    assert_eq!(minify_value(Some(&value)), Some(v(json!({"a": [1]}))));
}

// ========== Object minifier ==========

#[test]
fn test_object_absent() {
    assert_eq!(minify_object(None), None);
}

#[test]
fn test_object_empty() {
    assert_eq!(minify_object(Some(&Object::new())), None);
}

#[test]
fn test_object_of_nils() {
    let mut object = Object::new();
    object.insert_unset("nil-key");
    object.insert("null-key", Value::Null);
    object.insert_unset("null-kind");
    assert_eq!(minify_object(Some(&object)), None);
}

#[test]
fn test_object_non_empty_unchanged() {
    let object = obj(json!({
        "string-key": "",
        "bool-key": true,
        "numeric-key": 123,
        "struct-key": {"string-key": ""},
        "list-key": [""],
    }));
    assert_eq!(minify_object(Some(&object)), Some(object.clone()));
}

#[test]
fn test_object_sparse() {
    let mut nested = obj(json!({"null-key": null, "string-key": ""}));
    nested.insert_unset("nil-key");
    let mut list = arr(json!([null, ""]));
    list.push_unset();

    let mut object = obj(json!({
        "null-key": null,
        "string-key": "",
        "bool-key": true,
        "numeric-key": 123,
    }));
    object.insert_unset("nil-key");
    object.insert("struct-key", nested);
    object.insert("list-key", list);

    let expected = obj(json!({
        "string-key": "",
        "bool-key": true,
        "numeric-key": 123,
        "struct-key": {"string-key": ""},
        "list-key": [""],
    }));
    assert_eq!(minify_object(Some(&object)), Some(expected));
}

#[test]
fn test_object_contagion() {
    assert_eq!(minify_object(Some(&obj(json!({"a": {"b": null}})))), None);
    assert_eq!(minify_object(Some(&obj(json!({"a": {"b": [{}, [null]]}})))), None);
}

#[test]
fn test_object_does_not_mutate_input() {
    let object = obj(json!({"keep": 1, "drop": null, "empty": []}));
    let before = object.clone();
    let output = minify_object(Some(&object));
    assert_eq!(object, before);
    assert_eq!(output, Some(obj(json!({"keep": 1}))));
}

// ========== Array minifier ==========

#[test]
fn test_array_absent() {
    assert_eq!(minify_array(None), None);
}

#[test]
fn test_array_empty() {
    assert_eq!(minify_array(Some(&Array::new())), None);
}

#[test]
fn test_array_single_null() {
    assert_eq!(minify_array(Some(&arr(json!([null])))), None);
}

#[test]
fn test_array_non_empty() {
    let array = Array::new().with("test-value");
    assert_eq!(minify_array(Some(&array)), Some(array.clone()));
}

#[test]
fn test_array_sparse_compacts() {
    let mut array = Array::new().with("test-value");
    array.push_unset();
    array.push("another-value");
    let output = minify_array(Some(&array)).unwrap();
    assert_eq!(output.len(), 2);
    assert_eq!(output, Array::new().with("test-value").with("another-value"));
}

#[test]
fn test_array_null_hole_compacts() {
    let output = minify_array(Some(&arr(json!(["a", null, "b"]))));
    assert_eq!(output, Some(arr(json!(["a", "b"]))));
}

#[test]
fn test_array_keeps_order() {
    let output = minify_array(Some(&arr(json!([3, null, {}, 1, [], 2, {"x": 0}]))));
    assert_eq!(output, Some(arr(json!([3, 1, 2, {"x": 0}]))));
}

// ========== Pipeline ==========

#[test]
fn test_pipeline_document() {
    let input = r#"
    {
        "key": "value",
        "nil": null,
        "empty-list": [],
        "nested-struct": {
            "nested": "value"
        }
    }
    "#;
    let result = Minifier::default().minify_str(input).unwrap();
    assert_eq!(
        result.output.as_deref(),
        Some(r#"{"key":"value","nested-struct":{"nested":"value"}}"#)
    );
    assert_eq!(result.nodes_in, 6);
    assert_eq!(result.nodes_out, 4);
    assert!(result.ratio() < 1.0);
    assert!(result.reduction_pct() > 0.0);
}

#[test]
fn test_pipeline_nothing_to_emit() {
    let result = Minifier::default().minify_str(r#"{"k": null, "l": [[]]}"#).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.minified_len, 0);
    assert_eq!(result.nodes_out, 0);
}

#[test]
fn test_pipeline_scalar_document() {
    let result = Minifier::default().minify_str("0").unwrap();
    assert_eq!(result.output.as_deref(), Some("0"));
    let result = Minifier::default().minify_str("null").unwrap();
    assert_eq!(result.output, None);
}

#[test]
fn test_pipeline_negative_zero() {
    let result = Minifier::default().minify_str("-0.0").unwrap();
    assert_eq!(result.output.as_deref(), Some("-0.0"));
    let result = Minifier::default().minify_str(r#"{"x":-0.0,"y":null}"#).unwrap();
    assert_eq!(result.output.as_deref(), Some(r#"{"x":-0.0}"#));
}

#[test]
fn test_pipeline_parser_limit_precedes_depth_limit() {
    let text = format!("{}1{}", "[".repeat(200), "]".repeat(200));
    let err = Minifier::default().minify_str(&text).unwrap_err();
    assert!(matches!(err, MinifyError::Serialization(_)));
}

#[test]
fn test_pipeline_pretty() {
    let minifier = Minifier::new(MinifyConfig::default().pretty(true));
    let result = minifier.minify_str(r#"{"a":{"b":1,"c":null}}"#).unwrap();
    assert_eq!(
        result.output.as_deref(),
        Some("{\n  \"a\": {\n    \"b\": 1\n  }\n}")
    );
}

#[test]
fn test_pipeline_invalid_json() {
    let err = Minifier::default().minify_str("{not json").unwrap_err();
    assert!(matches!(err, MinifyError::Serialization(_)));
}

#[test]
fn test_pipeline_depth_limit() {
    let minifier = Minifier::new(MinifyConfig::default().with_max_depth(2));
    let err = minifier.minify_str(r#"{"a":{"b":1}}"#).unwrap_err();
    assert!(matches!(err, MinifyError::DepthExceeded { depth: 3, limit: 2 }));
    assert!(minifier.minify_str(r#"{"a":1}"#).is_ok());
}

#[test]
fn test_pipeline_unbounded() {
    let mut value = Value::from("leaf");
    for _ in 0..300 {
        value = Value::from(Object::new().with("a", value));
    }
    assert!(matches!(
        Minifier::default().minify(&value),
        Err(MinifyError::DepthExceeded { depth: 301, .. })
    ));
    let output = Minifier::unbounded().minify(&value).unwrap();
    assert_eq!(output, Some(value));
}

#[test]
fn test_pipeline_empty_input_result() {
    let result = Minifier::default().minify_lines("").unwrap();
    assert!(result.is_empty());
    assert_eq!(result.ratio(), 1.0);
    assert_eq!(result.reduction_pct(), 0.0);
}

// ========== JSON Lines ==========

#[test]
fn test_lines_basic() {
    let input = "{\"a\":1,\"b\":null}\n\n{\"c\":[null,false]}\n";
    let result = Minifier::default().minify_lines(input).unwrap();
    assert_eq!(result.output.as_deref(), Some("{\"a\":1}\n{\"c\":[false]}"));
}

#[test]
fn test_lines_drops_void_lines() {
    let input = "{\"a\":null}\n[1]\n{}\nnull";
    let result = Minifier::default().minify_lines(input).unwrap();
    assert_eq!(result.output.as_deref(), Some("[1]"));
    assert_eq!(result.nodes_out, 2);
}

#[test]
fn test_lines_ignore_pretty() {
    let minifier = Minifier::new(MinifyConfig::default().pretty(true));
    let result = minifier.minify_lines("{\"a\":{\"b\":1}}").unwrap();
    assert_eq!(result.output.as_deref(), Some("{\"a\":{\"b\":1}}"));
}

#[test]
fn test_lines_error_reports_line() {
    let err = Minifier::default()
        .minify_lines("{\"a\":1}\n{broken")
        .unwrap_err();
    match err {
        MinifyError::Line { line, source } => {
            assert_eq!(line, 2);
            assert!(matches!(*source, MinifyError::Serialization(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_lines_depth_error_reports_line() {
    let minifier = Minifier::new(MinifyConfig::default().with_max_depth(1));
    let err = minifier.minify_lines("1\n[1]").unwrap_err();
    assert!(err.to_string().starts_with("Line 2:"));
}
