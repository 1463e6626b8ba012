//! Bar Chart Model
//!
//! Typed configuration for the dry/wet waste bar chart. This is the full
//! contract between the validated totals and the canvas renderer.

use crate::inject::WasteTotals;

pub mod layout;

/// Fixed category colors, dry then wet.
pub const DRY_COLOR: &str = "#ff6384";
pub const WET_COLOR: &str = "#36a2eb";

/// Complete configuration for one bar chart render.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BarChartSpec {
    pub categories: [&'static str; 2],
    pub dataset_label: &'static str,
    pub values: [f64; 2],
    pub colors: [&'static str; 2],
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
}

impl BarChartSpec {
    /// Pure and deterministic: equal totals produce equal specs.
    pub fn from_totals(totals: &WasteTotals) -> Self {
        Self {
            categories: ["Dry Waste", "Wet Waste"],
            dataset_label: "Waste Data (kg)",
            values: [totals.dry, totals.wet],
            colors: [DRY_COLOR, WET_COLOR],
            x_axis_title: "Waste Type",
            y_axis_title: "Weight (kg)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(dry: f64, wet: f64) -> WasteTotals {
        WasteTotals {
            dry,
            wet,
            generated_at: None,
        }
    }

    #[test]
    fn spec_carries_labels_and_values() {
        let spec = BarChartSpec::from_totals(&totals(10.0, 20.0));
        assert_eq!(spec.categories, ["Dry Waste", "Wet Waste"]);
        assert_eq!(spec.values, [10.0, 20.0]);
        assert_eq!(spec.dataset_label, "Waste Data (kg)");
        assert_eq!(spec.y_axis_title, "Weight (kg)");
        assert_eq!(spec.x_axis_title, "Waste Type");
    }

    #[test]
    fn zero_totals_still_produce_a_spec() {
        let spec = BarChartSpec::from_totals(&totals(0.0, 0.0));
        assert_eq!(spec.values, [0.0, 0.0]);
    }

    #[test]
    fn from_totals_is_idempotent() {
        let t = totals(12.5, 8.75);
        assert_eq!(BarChartSpec::from_totals(&t), BarChartSpec::from_totals(&t));
    }

    #[test]
    fn colors_are_fixed_per_category() {
        let spec = BarChartSpec::from_totals(&totals(1.0, 2.0));
        assert_eq!(spec.colors, ["#ff6384", "#36a2eb"]);
    }
}
