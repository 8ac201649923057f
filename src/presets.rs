//! Built-in benchmark sets
//!
//! `scatter-256` carries the recorded timings of the scatter variants
//! (`scatter.py -nx 256 -ny 256 -nc 256`). `scatter-256-serial` is an
//! illustrative set with a placeholder 950 s original, since the original
//! was never timed at that size. Either one produces a chart without a
//! result file.

use crate::model::{BenchmarkEntry, BenchmarkSet, Category, Elapsed};
use anyhow::{bail, Result};

const SCATTER_TITLE: &str = "python scatter.py -nx 256 -ny 256 -nc 256";

/// A named, built-in benchmark set
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    title: &'static str,
    entries: &'static [(&'static str, Option<f64>, Category)],
}

impl Preset {
    /// Build the benchmark set (baseline is the first entry)
    pub fn to_set(&self) -> Result<BenchmarkSet> {
        let entries = self
            .entries
            .iter()
            .map(|(label, seconds, category)| {
                BenchmarkEntry::new(*label, Elapsed::from(*seconds), *category)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BenchmarkSet::new(entries)?.with_title(self.title))
    }
}

/// All built-in presets
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "scatter-256",
        description: "All scatter variants on a 256^3 grid (original and multiproc not run)",
        title: SCATTER_TITLE,
        entries: &[
            ("original", None, Category::Serial),
            ("vect", Some(2.0 * 60.0 + 6.0), Category::Vectorized),
            ("numba", Some(60.0 + 4.0), Category::Jit),
            ("multiproc", None, Category::Multiprocess),
            ("mpi4py", Some(2.0 * 60.0 + 14.0), Category::MessagePassing),
            ("ctypes", Some(26.0), Category::NativeExt),
            ("openmp-c", Some(10.0), Category::Threaded),
        ],
    },
    Preset {
        name: "scatter-256-serial",
        description: "Illustrative speedup set: vect and numba against a placeholder 950 s original",
        title: SCATTER_TITLE,
        entries: &[
            ("original", Some(950.0), Category::Serial),
            ("vect", Some(126.0), Category::Vectorized),
            ("numba", Some(64.0), Category::Jit),
        ],
    },
];

/// Look up a preset by name
pub fn find(name: &str) -> Result<&'static Preset> {
    match PRESETS.iter().find(|p| p.name == name) {
        Some(preset) => Ok(preset),
        None => {
            let known: Vec<_> = PRESETS.iter().map(|p| p.name).collect();
            bail!(
                "Unknown preset '{}'. Available presets: {}",
                name,
                known.join(", ")
            )
        }
    }
}
