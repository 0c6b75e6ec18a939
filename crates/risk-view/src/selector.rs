//! Active-layer selection state.
//!
//! Exactly one dataset is "active" at any time; the selector is the single
//! writer of that state. `set_active` replaces the value and notifies every
//! observer synchronously before returning, so no observer can act on a new
//! value while another still sees the old one.

use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

use risk_common::{DatasetId, DatasetRegistry, RiskResult};

type Observer = Arc<dyn Fn(DatasetId) + Send + Sync>;

/// Holds the active dataset and notifies observers of changes.
pub struct ActiveLayerSelector {
    active: RwLock<DatasetId>,
    observers: Mutex<Vec<Observer>>,
    // Serializes the replace+notify phase of concurrent set_active calls.
    notify_phase: Mutex<()>,
}

impl ActiveLayerSelector {
    pub fn new(initial: DatasetId) -> Self {
        ActiveLayerSelector {
            active: RwLock::new(initial),
            observers: Mutex::new(Vec::new()),
            notify_phase: Mutex::new(()),
        }
    }

    /// Selector initialized to the registry's startup default.
    pub fn with_default() -> Self {
        Self::new(DatasetRegistry::default_dataset())
    }

    /// Current active dataset. Pure read of the latest committed value.
    pub fn get_active(&self) -> DatasetId {
        *self.active.read().unwrap()
    }

    /// Register an observer invoked on every active-layer change.
    ///
    /// Observers must not call `set_active` from within the callback; the
    /// notification phase is not reentrant.
    pub fn subscribe(&self, observer: impl Fn(DatasetId) + Send + Sync + 'static) {
        self.observers.lock().unwrap().push(Arc::new(observer));
    }

    /// Switch the active dataset and synchronously notify all observers.
    ///
    /// Concurrent calls are serialized; the last call to complete wins.
    pub fn set_active(&self, id: DatasetId) {
        let _phase = self.notify_phase.lock().unwrap();
        *self.active.write().unwrap() = id;
        debug!(dataset = %id, "Active layer changed");
        let observers: Vec<Observer> = self.observers.lock().unwrap().clone();
        for observer in &observers {
            observer(id);
        }
    }

    /// Switch the active dataset by name, validating against the registry.
    /// This is the shell-facing setter where unknown names are rejected.
    pub fn set_active_named(&self, name: &str) -> RiskResult<DatasetId> {
        let descriptor = DatasetRegistry::describe_named(name)?;
        self.set_active(descriptor.id);
        Ok(descriptor.id)
    }
}
