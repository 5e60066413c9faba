//! Tests for the unpacked-tree normalizer.

use std::fs;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Value, json};
use sketch_core::{Error, normalize_dir, normalize_json};
use tempfile::TempDir;

#[tokio::test]
async fn test_normalize_dir_rewrites_json_only() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("pages")).unwrap();
    fs::write(root.join("document.json"), r#"{"pages":[],"currentPageIndex":7}"#).unwrap();
    fs::write(root.join("pages/ABC.Json"), r#"{"name":"Page 1"}"#).unwrap();
    fs::write(root.join("notes.txt"), r#"{"b":1,"a":2}"#).unwrap();

    let report = normalize_dir(root).await.unwrap();

    assert_eq!(report.files, 2);
    assert_eq!(
        fs::read_to_string(root.join("document.json")).unwrap(),
        "{\n\t\"currentPageIndex\": 1,\n\t\"pages\": []\n}\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("pages/ABC.Json")).unwrap(),
        "{\n\t\"name\": \"Page 1\"\n}\n"
    );
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), r#"{"b":1,"a":2}"#);
}

#[tokio::test]
async fn test_normalize_dir_twice_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("pages/page.json");
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(&file, r#"{"z":{"y":[1,{"b":2,"a":"é"}]},"a":true}"#).unwrap();

    normalize_dir(temp.path()).await.unwrap();
    let first = fs::read(&file).unwrap();
    normalize_dir(temp.path()).await.unwrap();

    assert_eq!(fs::read(&file).unwrap(), first);
}

#[tokio::test]
async fn test_invalid_json_names_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.json"), "{").unwrap();

    let err = normalize_dir(temp.path()).await.unwrap_err();

    match err {
        Error::InvalidJson { path, .. } => assert!(path.ends_with("broken.json")),
        other => panic!("unexpected error: {other}"),
    }
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-zA-Z0-9 \t\"\\\\]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z_]{1,6}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(value in arb_json(), descriptor in any::<bool>()) {
        let once = normalize_json(&value.to_string(), descriptor).unwrap();
        let twice = normalize_json(&once, descriptor).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_normalize_preserves_value(value in arb_json()) {
        let normalized = normalize_json(&value.to_string(), false).unwrap();
        let parsed: Value = serde_json::from_str(&normalized).unwrap();
        prop_assert_eq!(parsed, value);
    }
}

#[test]
fn test_descriptor_gains_page_index() {
    let out = normalize_json(&json!({"pages": []}).to_string(), true).unwrap();
    assert!(out.starts_with("{\n\t\"currentPageIndex\": 1,"));
}
