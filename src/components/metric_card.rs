//! Metric Card Component
//!
//! Summary cards showing a single waste total.

use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Category name to display
    #[prop(into)]
    label: String,
    /// Weight in kilograms, `None` when totals are unavailable
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// Share of the combined total, in percent
    #[prop(into)]
    share: Signal<Option<f64>>,
    /// Swatch color matching the chart bar
    #[prop(optional)]
    color: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            // Header with category name and color swatch
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                {color.map(|c| view! {
                    <span
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", c)
                    />
                })}
            </div>

            // Weight
            <div class="text-3xl font-bold mt-2">
                {move || {
                    value.get()
                        .map(|v| format!("{:.1} kg", v))
                        .unwrap_or_else(|| "—".to_string())
                }}
            </div>

            // Share of total
            <div class="mt-2 text-sm text-gray-500">
                {move || {
                    share.get()
                        .map(|p| format!("{:.0}% of total", p))
                        .unwrap_or_default()
                }}
            </div>
        </div>
    }
}
