// src/constants.rs

use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 640;
pub const PLOT_HEIGHT: u32 = 480;

// Number of image frames the upstream pipeline produces TTC values for.
pub const FRAME_COUNT: usize = 18;
pub const FIRST_FRAME_INDEX: usize = 1;

// Fixed TTC axis range in seconds. Valid readings are expected inside it.
pub const TTC_AXIS_MIN_S: f64 = 0.0;
pub const TTC_AXIS_MAX_S: f64 = 40.0;

// Frame axis spans one step of padding either side of the frame indices.
pub const FRAME_AXIS_MIN: f64 = 0.0;
pub const FRAME_AXIS_MAX: f64 = (FIRST_FRAME_INDEX + FRAME_COUNT) as f64;

// Substituted for invalid readings so they land outside the TTC axis range.
pub const TTC_SENTINEL: f64 = -100.0;
pub const SENTINEL_TOKENS: [&str; 3] = ["nan", "inf", "-inf"];

// --- Chart text ---
pub const X_AXIS_LABEL: &str = "image frame index";
pub const Y_AXIS_LABEL: &str = "TTC (s)";

pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 12;

// --- Markers ---
pub const MARKER_SIZE: u32 = 4;
pub const MARKER_STROKE_WIDTH: u32 = 2;

// Categorical colour cycle, one colour per plotted series in inclusion order.
pub const SERIES_COLOR_CYCLE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);

// --- File locations ---
pub const DEFAULT_INPUT_DIR: &str = ".";
pub const DEFAULT_OUTPUT_DIR: &str = "../images/report_images";
pub const SOURCE_FILE_EXTENSION: &str = "txt";
pub const OUTPUT_FILE_EXTENSION: &str = "png";

// --- Algorithm names ---
pub const DETECTOR_NAMES: [&str; 7] = ["SHITOMASI", "HARRIS", "FAST", "BRISK", "ORB", "AKAZE", "SIFT"];
pub const DESCRIPTOR_NAMES: [&str; 6] = ["BRISK", "BRIEF", "ORB", "FREAK", "AKAZE", "SIFT"];

// src/constants.rs
