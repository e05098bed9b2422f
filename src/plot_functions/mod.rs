// src/plot_functions/mod.rs

pub mod plot_detector_ttc;

// src/plot_functions/mod.rs
