// src/data_input/mod.rs

pub mod ttc_data;
pub mod ttc_parser;

// src/data_input/mod.rs
