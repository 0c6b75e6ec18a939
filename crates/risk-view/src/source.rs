//! Async boundary to the dataset endpoints.
//!
//! Each dataset is a read-only endpoint returning its full feature
//! collection; a successful response replaces that dataset's collection
//! wholesale. There is no retry here; a failed fetch is reported to the
//! coordinator and the transport caller decides whether to try again.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};

use risk_common::{DatasetId, FeatureCollection, RiskError, RiskResult};

use crate::coordinator::ViewCoordinator;

/// Trait for sources that can fetch a dataset's feature collection.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch_collection(&self, id: DatasetId) -> RiskResult<FeatureCollection>;
}

/// HTTP dataset source backed by the risk-api map-data endpoints.
pub struct HttpDatasetSource {
    client: Client,
    base_url: String,
}

impl HttpDatasetSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        HttpDatasetSource {
            client,
            base_url: base_url.into(),
        }
    }

    fn dataset_url(&self, id: DatasetId) -> String {
        format!("{}/api/map-data/{}", self.base_url.trim_end_matches('/'), id)
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    #[instrument(skip(self), fields(dataset = %id))]
    async fn fetch_collection(&self, id: DatasetId) -> RiskResult<FeatureCollection> {
        let url = self.dataset_url(id);
        debug!(url = %url, "Fetching dataset");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RiskError::FetchFailure {
                dataset: id,
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(RiskError::FetchFailure {
                dataset: id,
                reason: format!("HTTP {}", response.status()),
            });
        }

        let body = response.text().await.map_err(|e| RiskError::FetchFailure {
            dataset: id,
            reason: e.to_string(),
        })?;

        let collection = FeatureCollection::from_geojson(id, &body)?;
        info!(features = collection.len(), "Fetched dataset");
        Ok(collection)
    }
}

/// Drive one fetch through the coordinator: mark it started, await the
/// source, and dispatch the outcome. A failure is absorbed into the
/// coordinator's recoverable-error slot rather than propagated.
pub async fn run_fetch(
    coordinator: &Mutex<ViewCoordinator>,
    source: &dyn DatasetSource,
    id: DatasetId,
) -> RiskResult<()> {
    coordinator.lock().unwrap().fetch_started(id);
    match source.fetch_collection(id).await {
        Ok(collection) => coordinator.lock().unwrap().collection_arrived(collection),
        Err(error) => {
            coordinator.lock().unwrap().fetch_failed(id, error);
            Ok(())
        }
    }
}
