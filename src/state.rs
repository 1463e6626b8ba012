//! Dashboard State
//!
//! Reactive state shared across components via Leptos context.

use leptos::*;

use crate::inject::WasteTotals;

/// Dashboard state provided to all components.
#[derive(Clone)]
pub struct DashboardState {
    /// Validated totals, `None` when the injected payload failed validation.
    /// Components render their empty state in that case; the failure was
    /// already logged at bootstrap.
    pub totals: RwSignal<Option<WasteTotals>>,
}

/// Provide dashboard state to the component tree.
pub fn provide_dashboard_state(totals: Option<WasteTotals>) {
    provide_context(DashboardState {
        totals: create_rw_signal(totals),
    });
}
