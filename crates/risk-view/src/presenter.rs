//! Map layer presentation: feature collections -> styled layers.
//!
//! Geometry is passed through to the map substrate unchanged; this module
//! only derives per-feature styling from the risk classification and builds
//! the popup content shown when a feature is selected.

use serde_json::Value;

use risk_common::feature::display_value;
use risk_common::{classify, style_for, DatasetDescriptor, DatasetId, FeatureCollection};
use risk_common::{SeverityTier, VisualStyle};

/// One feature prepared for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledFeature {
    /// Opaque geometry, passed through unchanged.
    pub geometry: Value,
    pub tier: SeverityTier,
    pub style: VisualStyle,
    /// Full attribute set of the feature, stringified in source order, for
    /// transient display on selection.
    pub popup: Vec<(String, String)>,
}

/// A complete styled layer for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLayer {
    pub dataset: DatasetId,
    pub features: Vec<StyledFeature>,
}

/// Build the styled layer for a collection under its dataset schema.
///
/// Deterministic: the same collection always yields the same layer, so
/// re-invocation on unrelated state changes reproduces the same visual
/// result. Collection/descriptor agreement is enforced upstream at the
/// projector boundary.
pub fn present(collection: &FeatureCollection, descriptor: &DatasetDescriptor) -> RenderedLayer {
    let features = collection
        .features
        .iter()
        .map(|feature| {
            let tier = classify(feature.attr(descriptor.classification_attribute));
            StyledFeature {
                geometry: feature.geometry.clone(),
                tier,
                style: style_for(tier),
                popup: feature
                    .properties
                    .iter()
                    .map(|(key, value)| (key.clone(), display_value(value)))
                    .collect(),
            }
        })
        .collect();

    RenderedLayer {
        dataset: collection.dataset,
        features,
    }
}

/// The map substrate boundary.
///
/// `replace_layer` must tear down any previously installed layer atomically
/// with installing the new one; at no point may two dataset layers (or stale
/// interaction handlers) coexist on the surface.
pub trait MapSurface: Send {
    fn replace_layer(&mut self, layer: RenderedLayer);

    fn clear_layer(&mut self);
}
