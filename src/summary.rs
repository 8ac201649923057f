//! Summary renderer: benchmark set -> ordered, colored chart bars
//!
//! [`summarize`] is the whole data-to-chart mapping. It either returns a
//! complete [`Summary`] or an error; it never produces a partial series and
//! never emits Infinity or NaN. A speedup ratio that overflows `f64` is
//! rendered as a gap, like any other undefined non-baseline value.

use crate::model::{BenchmarkSet, Category, Elapsed};
use crate::style::{CategoryStyle, Color};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Y axis label for raw timings
pub const RAW_TIME_AXIS_LABEL: &str = "Wall clock time [s]";
/// Y axis label for speedup charts
pub const SPEEDUP_AXIS_LABEL: &str = "Speedup";

/// Errors that can occur while summarizing a benchmark set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("Speedup is undefined: baseline '{baseline}' was not run or took zero time")]
    UndefinedMetric { baseline: String },

    #[error("No color for '{label}' (category '{category}') and no fallback color set")]
    UnstyledCategory { label: String, category: Category },
}

/// What each bar's height represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Elapsed seconds, passed through unchanged
    #[default]
    RawTime,
    /// Baseline elapsed divided by entry elapsed
    Speedup,
}

impl RenderMode {
    pub fn axis_label(&self) -> &'static str {
        match self {
            RenderMode::RawTime => RAW_TIME_AXIS_LABEL,
            RenderMode::Speedup => SPEEDUP_AXIS_LABEL,
        }
    }
}

/// Height of one bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarValue {
    Value(f64),
    /// Kept in position but not plottable
    Gap,
}

impl BarValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            BarValue::Value(v) => Some(*v),
            BarValue::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, BarValue::Gap)
    }
}

/// One (label, value, color) triple handed to a chart sink
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBar {
    pub label: String,
    pub category: Category,
    pub value: BarValue,
    pub color: Color,
}

/// Complete chart description
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mode: RenderMode,
    pub title: String,
    pub axis_label: &'static str,
    pub bars: Vec<SummaryBar>,
}

impl Summary {
    /// Largest plotted value, 0.0 when every bar is a gap
    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .filter_map(|b| b.value.as_f64())
            .fold(0.0, f64::max)
    }

    /// Number of bars that carry a value
    pub fn plotted_count(&self) -> usize {
        self.bars.iter().filter(|b| !b.value.is_gap()).count()
    }
}

/// Map a benchmark set to chart bars.
///
/// # Errors
///
/// * [`SummaryError::UndefinedMetric`] in speedup mode when the baseline was
///   not run or took zero time
/// * [`SummaryError::UnstyledCategory`] when an entry's category has no color
///   and `style` has no fallback
pub fn summarize(
    set: &BenchmarkSet,
    mode: RenderMode,
    style: &CategoryStyle,
) -> Result<Summary, SummaryError> {
    let baseline_seconds = match mode {
        RenderMode::RawTime => None,
        RenderMode::Speedup => {
            let baseline = set.baseline();
            match baseline.elapsed {
                Elapsed::Measured(s) if s > 0.0 => Some(s),
                _ => {
                    return Err(SummaryError::UndefinedMetric {
                        baseline: baseline.label.clone(),
                    })
                }
            }
        }
    };

    let mut bars = Vec::with_capacity(set.len());
    for (index, entry) in set.entries().iter().enumerate() {
        let color =
            style
                .color_for(entry.category)
                .ok_or_else(|| SummaryError::UnstyledCategory {
                    label: entry.label.clone(),
                    category: entry.category,
                })?;

        let value = match (baseline_seconds, entry.elapsed) {
            (_, Elapsed::NotRun) => {
                warn!(label = %entry.label, "benchmark not run, rendering as gap");
                BarValue::Gap
            }
            (None, Elapsed::Measured(s)) => BarValue::Value(s),
            // Exactly 1.0, not b / b
            (Some(_), Elapsed::Measured(_)) if index == set.baseline_index() => {
                BarValue::Value(1.0)
            }
            (Some(b), Elapsed::Measured(s)) if s > 0.0 => {
                let speedup = b / s;
                if speedup.is_finite() {
                    BarValue::Value(speedup)
                } else {
                    warn!(
                        label = %entry.label,
                        baseline = b,
                        seconds = s,
                        "speedup overflows, rendering as gap"
                    );
                    BarValue::Gap
                }
            }
            (Some(_), Elapsed::Measured(_)) => {
                warn!(label = %entry.label, "zero elapsed time, speedup undefined");
                BarValue::Gap
            }
        };

        bars.push(SummaryBar {
            label: entry.label.clone(),
            category: entry.category,
            value,
            color,
        });
    }

    debug!(
        bars = bars.len(),
        mode = ?mode,
        "summarized benchmark set"
    );

    Ok(Summary {
        mode,
        title: set.title().unwrap_or_default().to_string(),
        axis_label: mode.axis_label(),
        bars,
    })
}
