//! View coordination: keeps map and table synchronized on the active dataset.
//!
//! Fetches for the two datasets resolve independently and in any order. The
//! coordinator caches every arriving collection and refreshes the views only
//! when the arrival (or an active-layer switch) concerns the dataset that is
//! active at that moment, so a late fetch for the inactive dataset never
//! disturbs the rendered view.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use risk_common::{
    DatasetId, DatasetRegistry, FeatureCollection, RiskError, RiskResult,
};

use crate::presenter::{present, MapSurface};
use crate::projector::{project, DisplayRow};
use crate::selector::ActiveLayerSelector;

/// Rendering state of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing rendered yet.
    Idle,
    /// A fetch is in flight and nothing is rendered yet.
    Loading(DatasetId),
    /// The dataset is projected and presented.
    Ready(DatasetId),
}

/// The attribute-table boundary toward the presentation shell.
pub trait TableSink: Send {
    fn show_rows(&mut self, dataset: DatasetId, rows: Vec<DisplayRow>);

    /// An empty collection signals "no data" instead of an empty table shell.
    fn show_no_data(&mut self, dataset: DatasetId);
}

/// Orchestrates projection and presentation for the active dataset.
pub struct ViewCoordinator {
    selector: Arc<ActiveLayerSelector>,
    cache: HashMap<DatasetId, FeatureCollection>,
    state: ViewState,
    map: Box<dyn MapSurface>,
    table: Box<dyn TableSink>,
    last_error: Option<RiskError>,
}

impl ViewCoordinator {
    pub fn new(
        selector: Arc<ActiveLayerSelector>,
        map: Box<dyn MapSurface>,
        table: Box<dyn TableSink>,
    ) -> Self {
        ViewCoordinator {
            selector,
            cache: HashMap::new(),
            state: ViewState::Idle,
            map,
            table,
            last_error: None,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn selector(&self) -> &Arc<ActiveLayerSelector> {
        &self.selector
    }

    /// Whether a collection for `id` is cached and switchable without a fetch.
    pub fn has_collection(&self, id: DatasetId) -> bool {
        self.cache.contains_key(&id)
    }

    /// A fetch was issued for `id`. Never downgrades a rendered view; the
    /// last good dataset stays on screen until replacement data arrives.
    pub fn fetch_started(&mut self, id: DatasetId) {
        if !matches!(self.state, ViewState::Ready(_)) {
            self.state = ViewState::Loading(id);
        }
    }

    /// A fetch resolved. The collection replaces the cached one wholesale;
    /// the views refresh only if its dataset is active right now.
    pub fn collection_arrived(&mut self, collection: FeatureCollection) -> RiskResult<()> {
        let id = collection.dataset;
        self.cache.insert(id, collection);
        if id == self.selector.get_active() {
            self.refresh(id)
        } else {
            debug!(dataset = %id, "Cached collection for inactive dataset");
            Ok(())
        }
    }

    /// A fetch failed. Recoverable: the current view stays in place and the
    /// error is held for the shell to surface out-of-band.
    pub fn fetch_failed(&mut self, id: DatasetId, error: RiskError) {
        warn!(dataset = %id, error = %error, "Dataset fetch failed");
        self.last_error = Some(error);
    }

    /// The active layer switched. With a cached collection the views refresh
    /// synchronously; without one the previous dataset stays rendered until
    /// the fetch for `id` resolves.
    pub fn active_changed(&mut self, id: DatasetId) -> RiskResult<()> {
        if self.cache.contains_key(&id) {
            self.refresh(id)
        } else {
            debug!(dataset = %id, "No cached collection; keeping current view");
            Ok(())
        }
    }

    /// Last fetch failure, if any, clearing it.
    pub fn take_last_error(&mut self) -> Option<RiskError> {
        self.last_error.take()
    }

    fn refresh(&mut self, id: DatasetId) -> RiskResult<()> {
        let descriptor = DatasetRegistry::describe(id);
        let (rows, layer) = {
            let collection = self
                .cache
                .get(&id)
                .expect("refresh called without cached collection");
            (project(collection, descriptor)?, present(collection, descriptor))
        };

        self.map.replace_layer(layer);
        if rows.is_empty() {
            self.table.show_no_data(id);
        } else {
            self.table.show_rows(id, rows);
        }
        self.state = ViewState::Ready(id);
        Ok(())
    }
}

/// Register a shared coordinator as an observer of its selector, so
/// active-layer switches refresh the views after the selector's notification
/// completes.
pub fn attach_to_selector(coordinator: &Arc<Mutex<ViewCoordinator>>) {
    let selector = coordinator.lock().unwrap().selector.clone();
    let weak = Arc::downgrade(coordinator);
    selector.subscribe(move |id| {
        if let Some(coordinator) = weak.upgrade() {
            let mut guard = coordinator.lock().unwrap();
            if let Err(error) = guard.active_changed(id) {
                warn!(dataset = %id, error = %error, "Refresh after switch failed");
            }
        }
    });
}
