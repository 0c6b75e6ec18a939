//! Dataset identifiers and schema descriptors.
//!
//! The two supported datasets carry different attribute schemas. The registry
//! here is the single source of truth for which columns each dataset shows in
//! the attribute table and which attribute drives risk classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RiskError, RiskResult};

/// Identifier for one of the two supported risk datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetId {
    /// Flood risk parcels (litool source data).
    Flood,
    /// Thatch accumulation risk areas.
    Thatch,
}

impl DatasetId {
    /// All supported datasets, in registry order.
    pub const ALL: [DatasetId; 2] = [DatasetId::Flood, DatasetId::Thatch];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetId::Flood => "flood",
            DatasetId::Thatch => "thatch",
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetId {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flood" => Ok(DatasetId::Flood),
            "thatch" => Ok(DatasetId::Thatch),
            other => Err(RiskError::UnknownDataset(other.to_string())),
        }
    }
}

/// One attribute-table column: the attribute name to look up and the label
/// shown in the table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: &'static str,
    pub label: &'static str,
}

impl Column {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Column { id, label }
    }
}

/// Static schema metadata for one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetDescriptor {
    pub id: DatasetId,
    /// Human-readable title for the attribute-table header.
    pub title: &'static str,
    /// Attribute holding the raw risk classification value.
    pub classification_attribute: &'static str,
    /// Columns shown in the attribute table, in display order.
    pub columns: &'static [Column],
}

const FLOOD_COLUMNS: &[Column] = &[
    Column::new("LITOOL_ID", "LITOOL_ID"),
    Column::new("LATITUDE", "LATITUDE"),
    Column::new("LONGITUDE", "LONGITUDE"),
    Column::new("REASON", "REASON"),
    Column::new("CREATE_DAT", "CREATE_DAT"),
    Column::new("PRCL_KEY", "PRCL_KEY"),
    Column::new("PARCEL_NO", "PARCEL_NO"),
    Column::new("RISK", "RISK"),
    Column::new("PL_UW", "PL_UW"),
    Column::new("CL_UW", "CL_UW"),
    Column::new("Label", "Label"),
    Column::new("Notes", "Notes"),
    Column::new("Status", "Status"),
];

const THATCH_COLUMNS: &[Column] = &[
    Column::new("Area", "Area"),
    Column::new("Town", "Town"),
    Column::new("Thatch_Ris", "Thatch_Ris"),
    Column::new("PL", "PL"),
    Column::new("CL", "CL"),
    Column::new("Shape_Leng", "Shape_Leng"),
    Column::new("Shape_Area", "Shape_Area"),
];

const FLOOD_DESCRIPTOR: DatasetDescriptor = DatasetDescriptor {
    id: DatasetId::Flood,
    title: "Flood Risk Data",
    classification_attribute: "RISK",
    columns: FLOOD_COLUMNS,
};

const THATCH_DESCRIPTOR: DatasetDescriptor = DatasetDescriptor {
    id: DatasetId::Thatch,
    title: "Thatch Risk Data",
    classification_attribute: "Thatch_Ris",
    columns: THATCH_COLUMNS,
};

/// Registry of dataset descriptors, total over the closed [`DatasetId`] set.
pub struct DatasetRegistry;

impl DatasetRegistry {
    /// Get the descriptor for a dataset.
    pub fn describe(id: DatasetId) -> &'static DatasetDescriptor {
        match id {
            DatasetId::Flood => &FLOOD_DESCRIPTOR,
            DatasetId::Thatch => &THATCH_DESCRIPTOR,
        }
    }

    /// Resolve a dataset by name, failing with [`RiskError::UnknownDataset`]
    /// for anything outside the closed set. This is the boundary where
    /// untrusted dataset names (URL segments, request bodies) are validated.
    pub fn describe_named(name: &str) -> RiskResult<&'static DatasetDescriptor> {
        let id = name.parse::<DatasetId>()?;
        Ok(Self::describe(id))
    }

    /// Dataset selected at startup before the user makes a choice.
    pub fn default_dataset() -> DatasetId {
        DatasetId::Thatch
    }
}
