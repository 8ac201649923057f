//! JSON output format for benchmark summaries

use crate::model::Category;
use crate::style::Color;
use crate::summary::{RenderMode, Summary};
use serde::Serialize;

/// Format version identifier
pub const JSON_FORMAT_VERSION: &str = "1.0";

/// A single chart bar
#[derive(Debug, Clone, Serialize)]
pub struct JsonBar {
    pub label: String,
    pub category: Category,
    /// Bar height; null for a gap (not run / undefined speedup)
    pub value: Option<f64>,
    pub color: Color,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub title: String,
    pub mode: RenderMode,
    pub axis_label: String,
    pub bars: Vec<JsonBar>,
}

impl JsonOutput {
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            version: JSON_FORMAT_VERSION.to_string(),
            format: "benchplot-json-v1".to_string(),
            title: summary.title.clone(),
            mode: summary.mode,
            axis_label: summary.axis_label.to_string(),
            bars: summary
                .bars
                .iter()
                .map(|b| JsonBar {
                    label: b.label.clone(),
                    category: b.category,
                    value: b.value.as_f64(),
                    color: b.color,
                })
                .collect(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
