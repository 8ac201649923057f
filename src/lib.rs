//! benchplot - benchmark timing summaries as bar charts
//!
//! This library turns an ordered list of benchmark timings into chart bars
//! of raw wall clock time or speedup against a baseline, colors them by
//! implementation category, and renders them as text, SVG, HTML, JSON or CSV.

pub mod chart;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod html_output;
pub mod json_output;
pub mod model;
pub mod presets;
pub mod style;
pub mod summary;
pub mod svg_output;
pub mod text_output;
