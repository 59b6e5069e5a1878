//! Integration tests for the serde representation.

#![cfg(feature = "serde")]

use serde_json::json;

use result_union::{NOTHING, Nothing, Result};

#[test]
fn success_serializes_as_tagged_value() {
    let result: Result<Vec<u32>, String> = Result::success(vec![1, 2]);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "success": [1, 2] })
    );
}

#[test]
fn failure_serializes_as_tagged_error() {
    let result: Result<u32, String> = Result::failure("denied".into());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "failure": "denied" })
    );
}

#[test]
fn deserializes_either_variant() {
    let success: Result<u32, String> = serde_json::from_value(json!({ "success": 7 })).unwrap();
    assert_eq!(success, Result::success(7));

    let failure: Result<u32, String> =
        serde_json::from_value(json!({ "failure": "late" })).unwrap();
    assert_eq!(failure, Result::failure("late".to_string()));
}

#[test]
fn rejects_unknown_variant() {
    let parsed = serde_json::from_value::<Result<u32, String>>(json!({ "pending": 1 }));
    assert!(parsed.is_err());
}

#[test]
fn nothing_serializes_as_null() {
    let result: Result<Nothing, String> = Result::success(NOTHING);
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(value, json!({ "success": null }));

    let back: Result<Nothing, String> = serde_json::from_value(value).unwrap();
    assert_eq!(back, Result::success_nothing());
}
