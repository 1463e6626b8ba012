//! UI Components
//!
//! Leptos components for the dashboard.

pub mod chart;
pub mod metric_card;

pub use chart::WasteChart;
pub use metric_card::MetricCard;
