// src/data_input/ttc_data.rs

use crate::constants::{FIRST_FRAME_INDEX, FRAME_COUNT, TTC_SENTINEL};

/// TTC readings in seconds for one detector/descriptor pairing, in frame order.
/// Invalid readings have already been replaced by `TTC_SENTINEL`.
pub type TtcSeries = Vec<f64>;

/// Returns true if the value is the substitute for an invalid reading.
pub fn is_sentinel(value: f64) -> bool {
    value == TTC_SENTINEL
}

/// Pairs each reading with its image frame index, starting at `FIRST_FRAME_INDEX`.
/// At most `FRAME_COUNT` points are produced; shorter series are not padded.
pub fn frame_points(series: &[f64]) -> Vec<(f64, f64)> {
    (FIRST_FRAME_INDEX..FIRST_FRAME_INDEX + FRAME_COUNT)
        .zip(series.iter())
        .map(|(frame, &ttc)| (frame as f64, ttc))
        .collect()
}


// src/data_input/ttc_data.rs
