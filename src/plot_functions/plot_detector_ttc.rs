// src/plot_functions/plot_detector_ttc.rs

use log::{info, warn};
use plotters::style::RGBColor;
use std::error::Error;
use std::path::PathBuf;

use crate::constants::{
    FRAME_AXIS_MAX, FRAME_AXIS_MIN, FRAME_COUNT, SERIES_COLOR_CYCLE, TTC_AXIS_MAX_S,
    TTC_AXIS_MIN_S, X_AXIS_LABEL, Y_AXIS_LABEL,
};
use crate::data_input::ttc_data::{frame_points, is_sentinel};
use crate::data_input::ttc_parser::{parse_ttc_file, TtcParseError};
use crate::plot_framework::{draw_scatter_plot, PlotSeries, ScatterPlotConfig};
use crate::report_config::ReportConfig;

/// Colour for the n-th series actually plotted on a chart.
pub fn series_color(series_index: usize) -> RGBColor {
    SERIES_COLOR_CYCLE[series_index % SERIES_COLOR_CYCLE.len()]
}

/// Loads every descriptor series for one detector and lays them out as a chart.
///
/// Descriptors whose file is missing or empty are skipped and never reach the
/// legend. The grid is enabled as soon as one series is added.
pub fn build_detector_chart(
    config: &ReportConfig,
    detector: &str,
) -> Result<ScatterPlotConfig, TtcParseError> {
    let mut chart = ScatterPlotConfig::new(
        detector,
        FRAME_AXIS_MIN..FRAME_AXIS_MAX,
        TTC_AXIS_MIN_S..TTC_AXIS_MAX_S,
        X_AXIS_LABEL,
        Y_AXIS_LABEL,
    );

    for descriptor in &config.descriptors {
        let ttcs = parse_ttc_file(&config.source_path(detector, descriptor))?;
        if ttcs.is_empty() {
            continue;
        }
        if ttcs.len() > FRAME_COUNT {
            warn!(
                "{} has {} values, only the first {} frames are plotted.",
                ReportConfig::source_file_name(detector, descriptor),
                ttcs.len(),
                FRAME_COUNT
            );
        }

        chart.series.push(PlotSeries {
            data: frame_points(&ttcs),
            label: descriptor.clone(),
            color: series_color(chart.series.len()),
        });
        chart.show_grid = true;
    }

    Ok(chart)
}

/// Points whose TTC equals the sentinel value, whether substituted by the
/// loader or written as `-100` in the input file.
pub fn sentinel_point_count(chart: &ScatterPlotConfig) -> usize {
    chart
        .series
        .iter()
        .flat_map(|s| s.data.iter())
        .filter(|&&(_, ttc)| is_sentinel(ttc))
        .count()
}

/// Generates the TTC comparison chart for one detector and returns its path.
pub fn plot_detector_ttc(config: &ReportConfig, detector: &str) -> Result<PathBuf, Box<dyn Error>> {
    let chart = build_detector_chart(config, detector)?;
    let output_path = config.output_path(detector);

    draw_scatter_plot(&output_path, &chart)
        .map_err(|e| format!("failed to write '{}': {e}", output_path.display()))?;

    info!(
        "  {detector}: {} series ({} points, {} at sentinel value), saved as '{}'.",
        chart.series.len(),
        chart.point_count(),
        sentinel_point_count(&chart),
        output_path.display()
    );

    Ok(output_path)
}


// src/plot_functions/plot_detector_ttc.rs
