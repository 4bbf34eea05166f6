use std::ops::Range;
use std::path::Path;

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Circle, ErrorBar};
use plotters::style::colors::{BLACK, BLUE, WHITE};
use plotters::style::Color;
use thiserror::Error;

use crate::model::transmission::ReducedRow;

pub const PLOT_WIDTH: u32 = 1024;
pub const PLOT_HEIGHT: u32 = 768;
const FONT_SIZE_TITLE: i32 = 26;
const FONT_SIZE_AXIS_LABEL: i32 = 18;
const MARKER_RADIUS: u32 = 4;
const ERROR_BAR_WIDTH: u32 = 10;

pub const X_AXIS_LABEL: &str = "Thickness [mm]";
pub const Y_AXIS_LABEL: &str = "Transmission [%]";

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot")]
    Empty,
    #[error("plot rendering failed: {0}")]
    Render(String),
}

fn render_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Render(e.to_string())
}

#[derive(Debug, Clone)]
pub struct ErrorBarPlot<'a> {
    pub title: String,
    pub legend: String,
    pub rows: &'a [ReducedRow],
}

impl ErrorBarPlot<'_> {
    pub fn x_range(&self) -> Range<f64> {
        let (min, max) = bounds(self.rows.iter().map(|r| r.thickness));
        let (lo, hi) = calculate_range(min, max);
        lo..hi
    }

    /// Covers every point plus its one-sigma bar.
    pub fn y_range(&self) -> Range<f64> {
        let lows = self
            .rows
            .iter()
            .map(|r| r.transmission_avg - r.transmission_stdev);
        let highs = self
            .rows
            .iter()
            .map(|r| r.transmission_avg + r.transmission_stdev);
        let (min, _) = bounds(lows);
        let (_, max) = bounds(highs);
        let (lo, hi) = calculate_range(min, max);
        lo..hi
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max { (0.0, 0.0) } else { (min, max) }
}

/// Adds 15% padding, or a fixed 0.5 for degenerate ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

pub fn render_errorbar_plot(path: &Path, plot: &ErrorBarPlot<'_>) -> Result<(), PlotError> {
    if plot.rows.is_empty() {
        return Err(PlotError::Empty);
    }

    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&plot.title, ("sans-serif", FONT_SIZE_TITLE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(plot.x_range(), plot.y_range())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .axis_desc_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(plot.rows.iter().map(|r| {
            ErrorBar::new_vertical(
                r.thickness,
                r.transmission_avg - r.transmission_stdev,
                r.transmission_avg,
                r.transmission_avg + r.transmission_stdev,
                BLUE.filled(),
                ERROR_BAR_WIDTH,
            )
        }))
        .map_err(render_err)?;

    chart
        .draw_series(
            plot.rows
                .iter()
                .map(|r| Circle::new((r.thickness, r.transmission_avg), MARKER_RADIUS, BLUE.filled())),
        )
        .map_err(render_err)?
        .label(plot.legend.as_str())
        .legend(|(x, y)| Circle::new((x, y), MARKER_RADIUS, BLUE.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    tracing::info!(path = %path.display(), points = plot.rows.len(), "wrote error-bar plot");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/plot.rs"]
mod tests;
