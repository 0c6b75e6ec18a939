//! Feature model: geographic entities with opaque geometry and named
//! attributes.
//!
//! Geometry is carried as raw JSON and passed through to the map substrate
//! unchanged; the engine never interprets coordinates. Attribute maps keep
//! their source order (serde_json `preserve_order`), which popup rendering
//! relies on.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::dataset::DatasetId;
use crate::error::{RiskError, RiskResult};

/// Ordered attribute-name -> value mapping of one feature.
pub type AttrMap = serde_json::Map<String, Value>;

/// One geographic entity: opaque geometry plus named attributes.
///
/// Features are immutable once received; their identity is their position
/// within the owning collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Value,
    #[serde(default, deserialize_with = "nullable_map")]
    pub properties: AttrMap,
}

// GeoJSON allows "properties": null
fn nullable_map<'de, D>(deserializer: D) -> Result<AttrMap, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<AttrMap>::deserialize(deserializer)?.unwrap_or_default())
}

impl Feature {
    pub fn new(geometry: Value, properties: AttrMap) -> Self {
        Feature {
            geometry,
            properties,
        }
    }

    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Attribute value stringified for tabular display; absent attributes
    /// yield the empty string.
    pub fn attr_text(&self, name: &str) -> String {
        self.attr(name).map(display_value).unwrap_or_default()
    }
}

/// Stringify an attribute value for display: null becomes empty, strings are
/// taken verbatim, anything else renders as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// The full set of features belonging to one dataset.
///
/// Collections are created on fetch completion and replaced wholesale on
/// re-fetch, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    pub dataset: DatasetId,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(dataset: DatasetId, features: Vec<Feature>) -> Self {
        FeatureCollection { dataset, features }
    }

    /// Parse a GeoJSON FeatureCollection document fetched for `dataset`.
    pub fn from_geojson(dataset: DatasetId, body: &str) -> RiskResult<Self> {
        #[derive(Deserialize)]
        struct Document {
            #[serde(default)]
            features: Vec<Feature>,
        }

        let doc: Document =
            serde_json::from_str(body).map_err(|e| RiskError::InvalidGeoJson {
                dataset,
                reason: e.to_string(),
            })?;
        Ok(FeatureCollection {
            dataset,
            features: doc.features,
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
