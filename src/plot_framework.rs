// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea};
use plotters::element::Cross;
use plotters::style::colors::{BLACK, TRANSPARENT, WHITE};
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    GRID_COLOR, MARKER_SIZE, MARKER_STROKE_WIDTH, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND};

/// One legend entry and its points, drawn as discrete markers.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
}

/// Everything needed to draw one single-chart image.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub show_grid: bool,
}

impl ScatterPlotConfig {
    /// An empty chart: no series, no grid.
    pub fn new(
        title: &str,
        x_range: Range<f64>,
        y_range: Range<f64>,
        x_label: &str,
        y_label: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            x_range,
            y_range,
            series: Vec::new(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            show_grid: false,
        }
    }

    /// Legend entries in drawing order.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.data.len()).sum()
    }
}

type ScatterChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Points inside `y_range` get drawn; anything else is clipped.
fn is_drawn(y_range: &Range<f64>, y: f64) -> bool {
    y >= y_range.start && y <= y_range.end
}

/// Caption, label areas and coordinate system shared by rendering and layout queries.
fn build_scatter_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    plot_config: &ScatterPlotConfig,
) -> Result<ScatterChart<'a, DB>, DrawingAreaErrorKind<DB::ErrorType>> {
    ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(50)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())
}

/// Pixel centre of every marker `draw_scatter_plot` draws, grouped per series.
/// Clipped points are left out.
pub fn marker_pixels(plot_config: &ScatterPlotConfig) -> Result<Vec<Vec<(i32, i32)>>, Box<dyn Error>> {
    let mut buffer = vec![0u8; (PLOT_WIDTH * PLOT_HEIGHT * 3) as usize];
    let root_area = BitMapBackend::with_buffer(&mut buffer, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    let chart = build_scatter_chart(&root_area, plot_config)?;

    let pixels = plot_config
        .series
        .iter()
        .map(|s| {
            s.data
                .iter()
                .filter(|&&(_, y)| is_drawn(&plot_config.y_range, y))
                .map(|point| chart.backend_coord(point))
                .collect()
        })
        .collect();
    Ok(pixels)
}

/// Renders a scatter chart to a PNG file, overwriting any existing file.
///
/// Points outside `y_range` are clipped from the plotting area. The legend is
/// drawn only when at least one series exists; the mesh only when
/// `show_grid` is set.
pub fn draw_scatter_plot(
    output_path: &Path,
    plot_config: &ScatterPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = build_scatter_chart(&root_area, plot_config)?;

    let whole_number = |v: &f64| format!("{v:.0}");
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_label_formatter(&whole_number)
        .y_label_formatter(&whole_number)
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .axis_desc_style(FONT_TUPLE_AXIS_LABEL);
    if plot_config.show_grid {
        mesh.bold_line_style(GRID_COLOR.mix(0.6))
            .light_line_style(TRANSPARENT);
    } else {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let y_range = &plot_config.y_range;
    for s in &plot_config.series {
        let color = s.color;
        chart
            .draw_series(
                s.data
                    .iter()
                    .filter(|&&(_, y)| is_drawn(y_range, y))
                    .map(|&(x, y)| {
                        Cross::new((x, y), MARKER_SIZE, color.stroke_width(MARKER_STROKE_WIDTH))
                    }),
            )?
            .label(&s.label)
            .legend(move |(x, y)| {
                Cross::new((x + 10, y), MARKER_SIZE, color.stroke_width(MARKER_STROKE_WIDTH))
            });
    }

    if !plot_config.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    root_area.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(label: &str, data: Vec<(f64, f64)>) -> PlotSeries {
        PlotSeries {
            data,
            label: label.to_string(),
            color: RGBColor(0, 0, 0),
        }
    }

    #[test]
    fn test_new_config_is_empty() {
        let config = ScatterPlotConfig::new("FAST", 0.0..19.0, 0.0..40.0, "x", "y");
        assert!(config.series.is_empty());
        assert!(!config.show_grid);
        assert!(config.legend_labels().is_empty());
        assert_eq!(config.point_count(), 0);
    }

    #[test]
    fn test_is_drawn_includes_bounds() {
        let y_range = 0.0..40.0;
        assert!(is_drawn(&y_range, 0.0));
        assert!(is_drawn(&y_range, 40.0));
        assert!(!is_drawn(&y_range, -100.0));
        assert!(!is_drawn(&y_range, 40.5));
    }

    #[test]
    fn test_legend_follows_series_order() {
        let mut config = ScatterPlotConfig::new("ORB", 0.0..19.0, 0.0..40.0, "x", "y");
        config.series.push(series("BRIEF", vec![(1.0, 3.0)]));
        config.series.push(series("ORB", vec![(1.0, 4.0), (2.0, 5.0)]));
        assert_eq!(config.legend_labels(), vec!["BRIEF", "ORB"]);
        assert_eq!(config.point_count(), 3);
    }
}

// src/plot_framework.rs
