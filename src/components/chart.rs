//! Chart Component
//!
//! Dry/wet waste bar chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::chart::layout::{bar_rects, grid_line_values, PlotArea, YScale};
use crate::chart::BarChartSpec;
use crate::state::DashboardState;

/// Waste bar chart component
#[component]
pub fn WasteChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the totals change. No totals means no draw: the failure
    // path leaves an empty chart area with no on-page message.
    create_effect(move |_| {
        let totals = state.totals.get();
        if let (Some(canvas), Some(totals)) = (canvas_ref.get(), totals) {
            let spec = BarChartSpec::from_totals(&totals);
            draw_bar_chart(&canvas, &spec);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Draw the bar chart on canvas
fn draw_bar_chart(canvas: &HtmlCanvasElement, spec: &BarChartSpec) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 60.0;

    let plot = PlotArea {
        left: margin_left,
        top: margin_top,
        width: width - margin_left - margin_right,
        height: height - margin_top - margin_bottom,
    };

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let scale = YScale::for_values(&spec.values);
    let grid_count = 5;

    // Horizontal grid lines with y-axis tick labels
    for (i, value) in grid_line_values(&scale, grid_count).iter().enumerate() {
        let y = plot.top + (i as f64 / grid_count as f64) * plot.height;

        ctx.set_stroke_style(&"#374151".into()); // gray-700
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Bars with category labels beneath
    for (i, rect) in bar_rects(&spec.values, &scale, &plot).iter().enumerate() {
        ctx.set_fill_style(&spec.colors[i].into());
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);

        let label = spec.categories[i];
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(label, rect.center_x() - label.len() as f64 * 3.5, plot.bottom() + 20.0);
    }

    // Axis titles
    ctx.set_fill_style(&"#d1d5db".into()); // gray-300
    ctx.set_font("13px sans-serif");
    let _ = ctx.fill_text(spec.x_axis_title, width / 2.0 - 30.0, height - 10.0);

    ctx.save();
    let _ = ctx.translate(14.0, height / 2.0 + 35.0);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    let _ = ctx.fill_text(spec.y_axis_title, 0.0, 0.0);
    ctx.restore();
}
