//! Benchmark result files (TOML or JSON)
//!
//! # Example benchplot.toml
//!
//! ```toml
//! title = "python scatter.py -nx 256 -ny 256 -nc 256"
//! baseline = "vect"
//!
//! [[entry]]
//! label = "original"
//! # no `seconds`: not run
//!
//! [[entry]]
//! label = "vect"
//! seconds = 126.0
//! category = "vectorized"
//!
//! [[entry]]
//! label = "openmp-c"
//! seconds = 10.0
//!
//! [style]
//! threaded = "#bcbd22"
//! fallback = "#7f7f7f"
//! ```
//!
//! The same document in JSON uses `entries` for the list and `null` for a
//! variant that was not run.

use crate::model::{BenchmarkEntry, BenchmarkSet, Category, Elapsed};
use crate::style::{CategoryStyle, Color};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Style key that sets the fallback color instead of a category color
pub const FALLBACK_KEY: &str = "fallback";

/// One `[[entry]]` row
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EntryConfig {
    pub label: String,
    /// Elapsed seconds; absent or null when the variant was not run
    #[serde(default)]
    pub seconds: Option<f64>,
    /// Inferred from the label when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Root of a benchmark result file
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BenchmarkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Baseline label; the first entry when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,
    #[serde(default, alias = "entries")]
    pub entry: Vec<EntryConfig>,
    /// Lay `[style]` over the built-in palette; when false the `[style]`
    /// table must cover every category used (or set `fallback`)
    #[serde(default = "default_palette")]
    pub default_palette: bool,
    /// Category name (or `fallback`) -> `#rrggbb`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, Color>,
}

fn default_palette() -> bool {
    true
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            title: None,
            baseline: None,
            entry: Vec::new(),
            default_palette: true,
            style: BTreeMap::new(),
        }
    }
}

impl BenchmarkConfig {
    /// Load a result file, picking the parser from the extension
    /// (`.json` is JSON, anything else TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
        .with_context(|| format!("Invalid benchmark file {}", path.display()))?;

        info!(
            path = %path.display(),
            entries = config.entry.len(),
            "loaded benchmark results"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON")
    }

    /// Validate entries and build the benchmark set
    pub fn to_set(&self) -> Result<BenchmarkSet> {
        let mut entries = Vec::with_capacity(self.entry.len());
        for row in &self.entry {
            let category = match row.category {
                Some(category) => category,
                None => {
                    let inferred = Category::infer_from_label(&row.label);
                    debug!(label = %row.label, category = %inferred, "inferred category");
                    inferred
                }
            };
            entries.push(BenchmarkEntry::new(
                row.label.clone(),
                Elapsed::from(row.seconds),
                category,
            )?);
        }

        let mut set = BenchmarkSet::new(entries)?;
        if let Some(baseline) = &self.baseline {
            set = set.with_baseline(baseline)?;
        }
        if let Some(title) = &self.title {
            set = set.with_title(title.clone());
        }
        Ok(set)
    }

    /// Palette for this file: `[style]` laid over the built-in palette, or
    /// `[style]` alone when `default_palette = false`
    pub fn category_style(&self) -> Result<CategoryStyle> {
        let overrides = self.style_overrides()?;
        if self.default_palette {
            Ok(CategoryStyle::default().merged(&overrides))
        } else {
            Ok(overrides)
        }
    }

    /// Only the `[style]` table, without the default palette underneath
    pub fn style_overrides(&self) -> Result<CategoryStyle> {
        let mut style = CategoryStyle::empty();
        for (key, color) in &self.style {
            if key == FALLBACK_KEY {
                style = style.with_fallback(*color);
            } else {
                let category = Category::parse(key)
                    .with_context(|| format!("Invalid [style] key '{}'", key))?;
                style = style.with_color(category, *color);
            }
        }
        Ok(style)
    }
}

impl From<&BenchmarkSet> for BenchmarkConfig {
    fn from(set: &BenchmarkSet) -> Self {
        Self {
            title: set.title().map(str::to_string),
            baseline: Some(set.baseline().label.clone()),
            entry: set
                .entries()
                .iter()
                .map(|e| EntryConfig {
                    label: e.label.clone(),
                    seconds: e.elapsed.seconds(),
                    category: Some(e.category),
                })
                .collect(),
            default_palette: true,
            style: BTreeMap::new(),
        }
    }
}
