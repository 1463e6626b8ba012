//! Bar Geometry
//!
//! Pure scaling math for the canvas renderer, kept separate so it can be
//! tested off the browser.

/// Drawable plot region inside the canvas margins.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Linear y scale. The axis always begins at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct YScale {
    pub min: f64,
    pub max: f64,
}

impl YScale {
    /// Range `[0, max]` with 10% headroom above the tallest bar. All-zero
    /// data maps to `[0, 1]` so the axis is still drawable.
    pub fn for_values(values: &[f64]) -> Self {
        let max = values.iter().fold(0.0_f64, |acc, v| acc.max(*v));
        let max = if max > 0.0 { max * 1.1 } else { 1.0 };
        Self { min: 0.0, max }
    }

    /// Value to canvas y. Canvas y grows downward, so the maximum maps to
    /// the top of the plot.
    pub fn to_pixel(&self, value: f64, plot: &PlotArea) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        plot.top + (self.max - clamped) / (self.max - self.min) * plot.height
    }
}

/// One bar, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// One rect per value, evenly slotted across the plot with gaps on both
/// sides of each bar.
pub fn bar_rects(values: &[f64], scale: &YScale, plot: &PlotArea) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = plot.width / values.len() as f64;
    let bar_width = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = plot.left + slot * i as f64 + (slot - bar_width) / 2.0;
            let top = scale.to_pixel(*value, plot);
            BarRect {
                x,
                y: top,
                width: bar_width,
                height: plot.bottom() - top,
            }
        })
        .collect()
}

/// Tick values for `count + 1` horizontal grid lines, top of range first,
/// zero last. Index i pairs with the line at fraction i/count of the plot
/// height.
pub fn grid_line_values(scale: &YScale, count: usize) -> Vec<f64> {
    (0..=count)
        .map(|i| scale.max - (i as f64 / count as f64) * (scale.max - scale.min))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> PlotArea {
        PlotArea {
            left: 60.0,
            top: 20.0,
            width: 720.0,
            height: 320.0,
        }
    }

    #[test]
    fn scale_begins_at_zero() {
        let scale = YScale::for_values(&[10.0, 20.0]);
        assert_eq!(scale.min, 0.0);
        assert!(scale.max >= 20.0);
    }

    #[test]
    fn all_zero_data_is_still_drawable() {
        let scale = YScale::for_values(&[0.0, 0.0]);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 1.0);
    }

    #[test]
    fn zero_maps_to_plot_bottom() {
        let plot = plot();
        let scale = YScale::for_values(&[10.0, 20.0]);
        assert_eq!(scale.to_pixel(0.0, &plot), plot.bottom());
    }

    #[test]
    fn max_maps_to_plot_top() {
        let plot = plot();
        let scale = YScale { min: 0.0, max: 20.0 };
        assert_eq!(scale.to_pixel(20.0, &plot), plot.top);
    }

    #[test]
    fn bar_heights_are_proportional() {
        let plot = plot();
        let scale = YScale { min: 0.0, max: 20.0 };
        let rects = bar_rects(&[10.0, 20.0], &scale, &plot);
        assert_eq!(rects.len(), 2);
        assert!((rects[0].height * 2.0 - rects[1].height).abs() < 1e-9);
    }

    #[test]
    fn zero_value_gives_zero_height() {
        let plot = plot();
        let scale = YScale::for_values(&[0.0, 0.0]);
        let rects = bar_rects(&[0.0, 0.0], &scale, &plot);
        assert_eq!(rects[0].height, 0.0);
        assert_eq!(rects[0].y, plot.bottom());
    }

    #[test]
    fn bars_stay_inside_their_slots() {
        let plot = plot();
        let scale = YScale::for_values(&[5.0, 5.0]);
        let rects = bar_rects(&[5.0, 5.0], &scale, &plot);
        let slot = plot.width / 2.0;
        assert!(rects[0].x >= plot.left);
        assert!(rects[0].x + rects[0].width <= plot.left + slot);
        assert!(rects[1].x >= plot.left + slot);
        assert!(rects[1].x + rects[1].width <= plot.left + plot.width);
    }

    #[test]
    fn grid_lines_run_from_max_to_zero() {
        let scale = YScale { min: 0.0, max: 10.0 };
        let values = grid_line_values(&scale, 5);
        assert_eq!(values.len(), 6);
        assert_eq!(values[0], 10.0);
        assert_eq!(*values.last().unwrap(), 0.0);
    }
}
