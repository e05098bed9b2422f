// src/font_config.rs

// Font styles for chart rendering, kept in one place so every chart
// uses the same family and sizes.

use crate::constants::{FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND};

/// Font family name for default system fonts.
/// When plotters renders with "sans-serif", it resolves a system font.
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

/// Represents a font style (family + size) for consistent usage throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStyle {
    pub family: &'static str,
    pub size: i32,
}

impl FontStyle {
    /// Tuple form accepted by plotters' `IntoFont` trait.
    pub const fn as_tuple(self) -> (&'static str, i32) {
        (self.family, self.size)
    }
}

pub const FONT_CHART_TITLE: FontStyle = FontStyle {
    family: FONT_FAMILY_SYSTEM,
    size: FONT_SIZE_CHART_TITLE,
};

pub const FONT_AXIS_LABEL: FontStyle = FontStyle {
    family: FONT_FAMILY_SYSTEM,
    size: FONT_SIZE_AXIS_LABEL,
};

pub const FONT_LEGEND: FontStyle = FontStyle {
    family: FONT_FAMILY_SYSTEM,
    size: FONT_SIZE_LEGEND,
};

// Tuple representations for direct use with `.caption()`, `.label_style()` and `.label_font()`
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = FONT_CHART_TITLE.as_tuple();
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = FONT_AXIS_LABEL.as_tuple();
pub const FONT_TUPLE_LEGEND: (&str, i32) = FONT_LEGEND.as_tuple();
