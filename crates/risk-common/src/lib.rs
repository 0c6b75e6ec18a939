//! Common types shared across the risk-map workspace.

pub mod dataset;
pub mod error;
pub mod feature;
pub mod severity;

pub use dataset::{Column, DatasetDescriptor, DatasetId, DatasetRegistry};
pub use error::{RiskError, RiskResult};
pub use feature::{AttrMap, Feature, FeatureCollection};
pub use severity::{classify, style_for, SeverityTier, VisualStyle};
