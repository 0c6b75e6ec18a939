//! Application state: the two datasets loaded from disk at startup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geo::Geometry;
use serde_json::Value;
use tracing::{info, warn};

use risk_common::{DatasetId, DatasetRegistry};

/// One dataset held in memory for the lifetime of the process.
pub struct LoadedDataset {
    /// Raw GeoJSON document, served verbatim on /api/map-data.
    pub document: Value,
    /// Geometries prepared for point risk lookup, each paired with the raw
    /// classification value of the owning feature.
    pub lookup: Vec<LookupFeature>,
}

pub struct LookupFeature {
    pub geometry: Geometry<f64>,
    pub risk: Option<String>,
}

/// Shared application state.
pub struct AppState {
    datasets: HashMap<DatasetId, LoadedDataset>,
}

impl AppState {
    /// Load `flood.geojson` and `thatch.geojson` from `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut datasets = HashMap::new();
        for id in DatasetId::ALL {
            let path = data_dir.join(format!("{id}.geojson"));
            let dataset = load_dataset(id, &path)
                .with_context(|| format!("loading dataset '{id}' from {}", path.display()))?;
            info!(
                dataset = %id,
                features = dataset.lookup.len(),
                path = %path.display(),
                "Loaded dataset"
            );
            datasets.insert(id, dataset);
        }
        Ok(AppState { datasets })
    }

    pub fn dataset(&self, id: DatasetId) -> &LoadedDataset {
        &self.datasets[&id]
    }
}

fn load_dataset(id: DatasetId, path: &Path) -> Result<LoadedDataset> {
    let body = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&body).context("parsing JSON document")?;

    let classification = DatasetRegistry::describe(id).classification_attribute;
    let geojson = body
        .parse::<geojson::GeoJson>()
        .context("parsing GeoJSON")?;

    let mut lookup = Vec::new();
    if let geojson::GeoJson::FeatureCollection(collection) = geojson {
        for feature in &collection.features {
            let Some(geometry) = feature.geometry.as_ref() else {
                continue;
            };
            match Geometry::<f64>::try_from(geometry) {
                Ok(geometry) => {
                    let risk = feature
                        .properties
                        .as_ref()
                        .and_then(|p| p.get(classification))
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    lookup.push(LookupFeature { geometry, risk });
                }
                Err(error) => {
                    warn!(dataset = %id, error = %error, "Skipping feature with unsupported geometry");
                }
            }
        }
    }

    Ok(LoadedDataset { document, lookup })
}
