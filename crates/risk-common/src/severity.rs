//! Risk severity classification and map styling.
//!
//! Classification is a pure, total function over whatever raw value sits
//! under a feature's classification attribute. Unrecognized or missing
//! values degrade to [`SeverityTier::None`] so a single malformed attribute
//! never blocks rendering of an otherwise-valid feature.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification outcome driving map color, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SeverityTier {
    None,
    Low,
    Medium,
    High,
}

impl SeverityTier {
    /// Legend label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::High => "High Risk",
            SeverityTier::Medium => "Medium Risk",
            SeverityTier::Low => "Low Risk",
            SeverityTier::None => "No Risk",
        }
    }
}

/// Classify a raw classification-attribute value into a severity tier.
///
/// Matching is case-sensitive over a fixed alias table; everything else,
/// including absent values, null, numbers, and unknown strings, maps to
/// [`SeverityTier::None`].
pub fn classify(raw: Option<&Value>) -> SeverityTier {
    match raw {
        Some(Value::String(s)) => match s.as_str() {
            "High" | "H" => SeverityTier::High,
            "Medium" | "M" => SeverityTier::Medium,
            "Low" | "L" => SeverityTier::Low,
            _ => SeverityTier::None,
        },
        _ => SeverityTier::None,
    }
}

/// Visual style applied to one feature on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualStyle {
    pub fill_color: &'static str,
    pub stroke_color: &'static str,
    pub stroke_width: f32,
    pub stroke_dash: &'static str,
    pub fill_opacity: f32,
    pub stroke_opacity: f32,
}

const fn style(fill_color: &'static str) -> VisualStyle {
    VisualStyle {
        fill_color,
        stroke_color: "#ffffff",
        stroke_width: 2.0,
        stroke_dash: "3",
        fill_opacity: 0.7,
        stroke_opacity: 1.0,
    }
}

/// Map a severity tier to its visual style. Total over the enum and
/// deterministic, so re-renders are stable.
pub fn style_for(tier: SeverityTier) -> VisualStyle {
    match tier {
        SeverityTier::High => style("#ff0000"),
        SeverityTier::Medium => style("#ffa500"),
        SeverityTier::Low => style("#ffff00"),
        SeverityTier::None => style("#00ff00"),
    }
}
