//! App Root Component
//!
//! Page shell: header, summary cards, chart section, footer.

use leptos::*;

use crate::chart::{DRY_COLOR, WET_COLOR};
use crate::components::{MetricCard, WasteChart};
use crate::state::DashboardState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let totals = state.totals;

    let dry = Signal::derive(move || totals.get().map(|t| t.dry));
    let wet = Signal::derive(move || totals.get().map(|t| t.wet));
    let combined = Signal::derive(move || totals.get().map(|t| t.combined()));

    let dry_share = Signal::derive(move || totals.get().and_then(|t| share(t.dry, t.combined())));
    let wet_share = Signal::derive(move || totals.get().and_then(|t| share(t.wet, t.combined())));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="container mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold">"WasteWatch"</h1>
                <p class="text-gray-400 mt-1">"Dry vs. wet waste at a glance"</p>
            </header>

            <main class="flex-1 container mx-auto px-4 pb-8 space-y-8">
                // Summary row
                <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <MetricCard label="Dry Waste" value=dry share=dry_share color=DRY_COLOR />
                    <MetricCard label="Wet Waste" value=wet share=wet_share color=WET_COLOR />
                    <MetricCard
                        label="Combined"
                        value=combined
                        share=Signal::derive(|| None::<f64>)
                    />
                </section>

                // Main chart
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Waste Breakdown"</h2>
                    <WasteChart />
                </section>
            </main>

            <Footer />
        </div>
    }
}

/// Percentage share, `None` when the whole is zero.
fn share(part: f64, whole: f64) -> Option<f64> {
    (whole > 0.0).then(|| part / whole * 100.0)
}

/// Footer showing when the host rendered the page
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto text-sm text-gray-400">
                {move || {
                    state.totals.get()
                        .and_then(|t| t.generated_at)
                        .and_then(chrono::DateTime::from_timestamp_millis)
                        .map(|dt| format!("Report generated {}", dt.format("%b %d %Y, %H:%M")))
                        .unwrap_or_else(|| "Report time unknown".to_string())
                }}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_of_zero_total_is_none() {
        assert_eq!(share(0.0, 0.0), None);
    }

    #[test]
    fn share_splits_the_whole() {
        assert_eq!(share(10.0, 40.0), Some(25.0));
    }
}
