//! Attribute projection: feature collections -> attribute-table rows.

use risk_common::{DatasetDescriptor, FeatureCollection, RiskError, RiskResult};

/// One tabular row: stringified cells aligned to the descriptor's columns.
///
/// Produced fresh per render; never retained across an active-layer switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    cells: Vec<String>,
}

impl DisplayRow {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// Project a feature collection into display rows under a dataset schema.
///
/// Fails with [`RiskError::DatasetMismatch`] when collection and descriptor
/// disagree, which prevents projecting the wrong columns when a fetch for the
/// other dataset resolves after the active layer has switched. Row order
/// matches feature order exactly; absent attributes project as empty strings.
pub fn project(
    collection: &FeatureCollection,
    descriptor: &DatasetDescriptor,
) -> RiskResult<Vec<DisplayRow>> {
    if collection.dataset != descriptor.id {
        return Err(RiskError::DatasetMismatch {
            collection: collection.dataset,
            descriptor: descriptor.id,
        });
    }

    let rows = collection
        .features
        .iter()
        .map(|feature| DisplayRow {
            cells: descriptor
                .columns
                .iter()
                .map(|column| feature.attr_text(column.id))
                .collect(),
        })
        .collect();
    Ok(rows)
}
