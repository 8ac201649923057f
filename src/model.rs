//! Benchmark data model
//!
//! A [`BenchmarkSet`] is an ordered list of [`BenchmarkEntry`] values with one
//! designated baseline. Order is caller-supplied and becomes bar order on the
//! chart. Nothing here is mutated after construction.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised while building a benchmark set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Benchmark set is empty")]
    Empty,

    #[error("Duplicate benchmark label: {0}")]
    DuplicateLabel(String),

    #[error("Baseline '{0}' does not match any entry")]
    UnknownBaseline(String),

    #[error("Invalid elapsed time for '{label}': {value} (must be a finite, non-negative number)")]
    InvalidElapsed { label: String, value: f64 },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Wall-clock time of one benchmark run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Elapsed {
    /// Measured duration in seconds (finite, >= 0)
    Measured(f64),
    /// The variant was not executed
    NotRun,
}

impl Elapsed {
    /// Seconds if measured, `None` for the not-run sentinel
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Elapsed::Measured(s) => Some(*s),
            Elapsed::NotRun => None,
        }
    }

    /// True when the value can act as a speedup divisor
    pub fn is_positive(&self) -> bool {
        matches!(self, Elapsed::Measured(s) if *s > 0.0)
    }
}

impl From<Option<f64>> for Elapsed {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(s) => Elapsed::Measured(s),
            None => Elapsed::NotRun,
        }
    }
}

/// Implementation strategy of a benchmarked variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Serial,
    Vectorized,
    Jit,
    NativeExt,
    Multiprocess,
    MessagePassing,
    Threaded,
}

impl Category {
    /// All categories in legend order
    pub const ALL: [Category; 7] = [
        Category::Serial,
        Category::Vectorized,
        Category::Jit,
        Category::NativeExt,
        Category::Multiprocess,
        Category::MessagePassing,
        Category::Threaded,
    ];

    /// Stable snake_case name, matching the config file spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Serial => "serial",
            Category::Vectorized => "vectorized",
            Category::Jit => "jit",
            Category::NativeExt => "native_ext",
            Category::Multiprocess => "multiprocess",
            Category::MessagePassing => "message_passing",
            Category::Threaded => "threaded",
        }
    }

    /// Parse the config spelling of a category
    pub fn parse(name: &str) -> Result<Self, ModelError> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == name.trim())
            .ok_or_else(|| ModelError::UnknownCategory(name.to_string()))
    }

    /// Guess a category from well-known label fragments.
    ///
    /// Only used when a config entry omits `category`; the result is stored on
    /// the entry so nothing downstream looks at label text again.
    pub fn infer_from_label(label: &str) -> Self {
        for (pattern, category) in inference_rules() {
            if pattern.is_match(label) {
                return *category;
            }
        }
        Category::Serial
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// First match wins, so "multiproc" is checked before "mpi".
fn inference_rules() -> &'static [(Regex, Category)] {
    static RULES: OnceLock<Vec<(Regex, Category)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (r"(?i)multi-?proc", Category::Multiprocess),
            (r"(?i)\bmpi", Category::MessagePassing),
            (r"(?i)openmp|\bomp\b|thread|rayon", Category::Threaded),
            (r"(?i)numba|jit|pypy", Category::Jit),
            (r"(?i)ctypes|cython|cffi|pybind|native|\bext\b", Category::NativeExt),
            (r"(?i)vect|numpy|simd", Category::Vectorized),
        ]
        .into_iter()
        .filter_map(|(re, cat)| Regex::new(re).ok().map(|re| (re, cat)))
        .collect()
    })
}

/// One benchmarked variant
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkEntry {
    pub label: String,
    pub elapsed: Elapsed,
    pub category: Category,
}

impl BenchmarkEntry {
    /// Create an entry, rejecting NaN, infinite or negative timings
    pub fn new(
        label: impl Into<String>,
        elapsed: Elapsed,
        category: Category,
    ) -> Result<Self, ModelError> {
        let label = label.into();
        if let Elapsed::Measured(value) = elapsed {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::InvalidElapsed { label, value });
            }
        }
        Ok(Self {
            label,
            elapsed,
            category,
        })
    }

    /// Measured entry
    pub fn measured(
        label: impl Into<String>,
        seconds: f64,
        category: Category,
    ) -> Result<Self, ModelError> {
        Self::new(label, Elapsed::Measured(seconds), category)
    }

    /// Entry for a variant that was not executed
    pub fn not_run(label: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            elapsed: Elapsed::NotRun,
            category,
        }
    }
}

/// Ordered benchmark results with one designated baseline
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSet {
    entries: Vec<BenchmarkEntry>,
    baseline: usize,
    title: Option<String>,
}

impl BenchmarkSet {
    /// Build a set whose baseline is the first entry
    pub fn new(entries: Vec<BenchmarkEntry>) -> Result<Self, ModelError> {
        if entries.is_empty() {
            return Err(ModelError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.label.as_str()) {
                return Err(ModelError::DuplicateLabel(entry.label.clone()));
            }
        }

        Ok(Self {
            entries,
            baseline: 0,
            title: None,
        })
    }

    /// Designate the baseline by label
    pub fn with_baseline(mut self, label: &str) -> Result<Self, ModelError> {
        self.baseline = self
            .entries
            .iter()
            .position(|e| e.label == label)
            .ok_or_else(|| ModelError::UnknownBaseline(label.to_string()))?;
        Ok(self)
    }

    /// Attach a chart title (workload and host description)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn entries(&self) -> &[BenchmarkEntry] {
        &self.entries
    }

    pub fn baseline(&self) -> &BenchmarkEntry {
        &self.entries[self.baseline]
    }

    pub fn baseline_index(&self) -> usize {
        self.baseline
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_rejects_nan() {
        let err = BenchmarkEntry::measured("x", f64::NAN, Category::Serial).unwrap_err();
        assert!(matches!(err, ModelError::InvalidElapsed { .. }));
    }

    #[test]
    fn test_entry_rejects_negative() {
        assert!(BenchmarkEntry::measured("x", -1.0, Category::Serial).is_err());
    }

    #[test]
    fn test_entry_accepts_zero() {
        let entry = BenchmarkEntry::measured("x", 0.0, Category::Serial).unwrap();
        assert_eq!(entry.elapsed, Elapsed::Measured(0.0));
        assert!(!entry.elapsed.is_positive());
    }

    #[test]
    fn test_not_run_has_no_seconds() {
        let entry = BenchmarkEntry::not_run("original", Category::Serial);
        assert_eq!(entry.elapsed.seconds(), None);
    }

    #[test]
    fn test_elapsed_from_option() {
        assert_eq!(Elapsed::from(Some(2.5)), Elapsed::Measured(2.5));
        assert_eq!(Elapsed::from(None), Elapsed::NotRun);
    }

    #[test]
    fn test_set_rejects_empty() {
        assert_eq!(BenchmarkSet::new(vec![]).unwrap_err(), ModelError::Empty);
    }

    #[test]
    fn test_set_rejects_duplicate_labels() {
        let entries = vec![
            BenchmarkEntry::measured("vect", 1.0, Category::Vectorized).unwrap(),
            BenchmarkEntry::measured("vect", 2.0, Category::Vectorized).unwrap(),
        ];
        assert_eq!(
            BenchmarkSet::new(entries).unwrap_err(),
            ModelError::DuplicateLabel("vect".to_string())
        );
    }

    #[test]
    fn test_set_baseline_defaults_to_first() {
        let set = BenchmarkSet::new(vec![
            BenchmarkEntry::measured("original", 950.0, Category::Serial).unwrap(),
            BenchmarkEntry::measured("vect", 126.0, Category::Vectorized).unwrap(),
        ])
        .unwrap();
        assert_eq!(set.baseline().label, "original");
        assert_eq!(set.baseline_index(), 0);
    }

    #[test]
    fn test_set_with_named_baseline() {
        let set = BenchmarkSet::new(vec![
            BenchmarkEntry::not_run("original", Category::Serial),
            BenchmarkEntry::measured("vect", 126.0, Category::Vectorized).unwrap(),
        ])
        .unwrap()
        .with_baseline("vect")
        .unwrap();
        assert_eq!(set.baseline().label, "vect");
    }

    #[test]
    fn test_set_unknown_baseline() {
        let set = BenchmarkSet::new(vec![BenchmarkEntry::not_run("a", Category::Serial)]).unwrap();
        assert_eq!(
            set.with_baseline("b").unwrap_err(),
            ModelError::UnknownBaseline("b".to_string())
        );
    }

    #[test]
    fn test_category_parse_roundtrip_names() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()).unwrap(), category);
        }
        assert!(Category::parse("gpu").is_err());
    }

    #[test]
    fn test_category_inference() {
        assert_eq!(Category::infer_from_label("original"), Category::Serial);
        assert_eq!(Category::infer_from_label("vect"), Category::Vectorized);
        assert_eq!(Category::infer_from_label("numba"), Category::Jit);
        assert_eq!(Category::infer_from_label("ctypes"), Category::NativeExt);
        assert_eq!(Category::infer_from_label("multiproc"), Category::Multiprocess);
        assert_eq!(Category::infer_from_label("mpi4py"), Category::MessagePassing);
        assert_eq!(Category::infer_from_label("openmp-c"), Category::Threaded);
    }
}
