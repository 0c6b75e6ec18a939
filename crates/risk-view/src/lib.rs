//! Risk layer rendering and synchronization engine.
//!
//! Keeps the map layer and the attribute table in agreement about which
//! dataset is displayed:
//! - `selector`: single source of truth for the active dataset, with
//!   synchronous observer notification
//! - `projector`: feature collection -> ordered attribute-table rows
//! - `presenter`: feature collection -> styled map layer with popup content
//! - `coordinator`: caches fetched collections and refreshes both views for
//!   the active dataset only
//! - `source`: async boundary to the dataset endpoints

pub mod coordinator;
pub mod presenter;
pub mod projector;
pub mod selector;
pub mod source;

pub use coordinator::{attach_to_selector, TableSink, ViewCoordinator, ViewState};
pub use presenter::{present, MapSurface, RenderedLayer, StyledFeature};
pub use projector::{project, DisplayRow};
pub use selector::ActiveLayerSelector;
pub use source::{run_fetch, DatasetSource, HttpDatasetSource};
