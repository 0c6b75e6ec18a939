//! Point risk lookup over the loaded datasets.

use geo::algorithm::contains::Contains;
use geo::Point;

use risk_common::DatasetId;

use crate::state::LookupFeature;

/// Classify a point against a dataset's features.
///
/// Flood features report their own RISK value; thatch polygons all mark high
/// thatch accumulation, so containment alone decides. A point outside every
/// feature gets the dataset's no-risk message.
pub fn risk_at_point(id: DatasetId, features: &[LookupFeature], point: Point<f64>) -> String {
    match id {
        DatasetId::Flood => features
            .iter()
            .find(|f| f.geometry.contains(&point))
            .map(|f| {
                f.risk
                    .clone()
                    .unwrap_or_else(|| "No risk information".to_string())
            })
            .unwrap_or_else(|| "No risk information".to_string()),
        DatasetId::Thatch => {
            if features.iter().any(|f| f.geometry.contains(&point)) {
                "High Thatch Accumulation".to_string()
            } else {
                "No thatch accumulation risk".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn unit_square(risk: Option<&str>) -> LookupFeature {
        LookupFeature {
            geometry: polygon![
                (x: 0.0, y: 0.0),
                (x: 1.0, y: 0.0),
                (x: 1.0, y: 1.0),
                (x: 0.0, y: 1.0),
            ]
            .into(),
            risk: risk.map(str::to_string),
        }
    }

    #[test]
    fn flood_point_inside_reports_feature_risk() {
        let features = vec![unit_square(Some("High"))];
        let risk = risk_at_point(DatasetId::Flood, &features, Point::new(0.5, 0.5));
        assert_eq!(risk, "High");
    }

    #[test]
    fn flood_point_outside_reports_no_information() {
        let features = vec![unit_square(Some("High"))];
        let risk = risk_at_point(DatasetId::Flood, &features, Point::new(2.0, 2.0));
        assert_eq!(risk, "No risk information");
    }

    #[test]
    fn flood_feature_without_risk_value_reports_no_information() {
        let features = vec![unit_square(None)];
        let risk = risk_at_point(DatasetId::Flood, &features, Point::new(0.5, 0.5));
        assert_eq!(risk, "No risk information");
    }

    #[test]
    fn thatch_containment_decides() {
        let features = vec![unit_square(None)];
        assert_eq!(
            risk_at_point(DatasetId::Thatch, &features, Point::new(0.5, 0.5)),
            "High Thatch Accumulation"
        );
        assert_eq!(
            risk_at_point(DatasetId::Thatch, &features, Point::new(5.0, 5.0)),
            "No thatch accumulation risk"
        );
    }

    #[test]
    fn empty_dataset_reports_no_risk() {
        assert_eq!(
            risk_at_point(DatasetId::Flood, &[], Point::new(0.0, 0.0)),
            "No risk information"
        );
    }
}
