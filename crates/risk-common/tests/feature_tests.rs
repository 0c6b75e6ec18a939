//! Tests for the feature model and GeoJSON parsing.

use serde_json::json;

use risk_common::dataset::DatasetId;
use risk_common::error::RiskError;
use risk_common::feature::{display_value, FeatureCollection};

// ============================================================================
// GeoJSON parsing
// ============================================================================

#[test]
fn test_parse_feature_collection() {
    let body = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [26.19, -29.15]},
                "properties": {"Area": "Fouriesburg", "Thatch_Ris": "H"}
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": null
            }
        ]
    }"#;

    let collection = FeatureCollection::from_geojson(DatasetId::Thatch, body).unwrap();
    assert_eq!(collection.dataset, DatasetId::Thatch);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.features[0].attr("Area"), Some(&json!("Fouriesburg")));
    assert!(collection.features[1].properties.is_empty());
}

#[test]
fn test_parse_empty_feature_collection() {
    let collection =
        FeatureCollection::from_geojson(DatasetId::Flood, r#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap();
    assert!(collection.is_empty());
}

#[test]
fn test_parse_missing_features_key() {
    let collection =
        FeatureCollection::from_geojson(DatasetId::Flood, r#"{"type":"FeatureCollection"}"#).unwrap();
    assert!(collection.is_empty());
}

#[test]
fn test_parse_invalid_body_fails() {
    let result = FeatureCollection::from_geojson(DatasetId::Flood, "not geojson");
    match result {
        Err(RiskError::InvalidGeoJson { dataset, .. }) => assert_eq!(dataset, DatasetId::Flood),
        other => panic!("expected InvalidGeoJson, got {other:?}"),
    }
}

// ============================================================================
// Attribute order and lookup
// ============================================================================

#[test]
fn test_attribute_order_is_preserved() {
    let body = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": null,
                "properties": {"Town": "Clarens", "Area": "East", "PL": 1}
            }
        ]
    }"#;

    let collection = FeatureCollection::from_geojson(DatasetId::Thatch, body).unwrap();
    let keys: Vec<&str> = collection.features[0]
        .properties
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["Town", "Area", "PL"]);
}

#[test]
fn test_attr_text_absent_is_empty() {
    let body = r#"{"type":"FeatureCollection","features":[{"geometry":null,"properties":{}}]}"#;
    let collection = FeatureCollection::from_geojson(DatasetId::Flood, body).unwrap();
    assert_eq!(collection.features[0].attr_text("RISK"), "");
}

// ============================================================================
// Value stringification
// ============================================================================

#[test]
fn test_display_value_scalars() {
    assert_eq!(display_value(&json!(null)), "");
    assert_eq!(display_value(&json!("High")), "High");
    assert_eq!(display_value(&json!(42)), "42");
    assert_eq!(display_value(&json!(1.5)), "1.5");
    assert_eq!(display_value(&json!(true)), "true");
}

#[test]
fn test_display_value_nested_json() {
    assert_eq!(display_value(&json!([1, 2])), "[1,2]");
    assert_eq!(display_value(&json!({"a": 1})), r#"{"a":1}"#);
}
