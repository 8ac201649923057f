//! CLI argument parsing for benchplot

use crate::summary::RenderMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the rendered chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal bar chart (default)
    Text,
    /// Standalone SVG image
    Svg,
    /// HTML report with embedded chart and data table
    Html,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// What the bar heights show
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Wall clock time in seconds
    Raw,
    /// Speedup relative to the baseline entry
    Speedup,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Raw => RenderMode::RawTime,
            ModeArg::Speedup => RenderMode::Speedup,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "benchplot")]
#[command(version)]
#[command(about = "Render benchmark timings as a bar chart of wall clock time or speedup", long_about = None)]
pub struct Cli {
    /// Benchmark result file (.toml or .json)
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    pub input: Option<PathBuf>,

    /// Use a built-in benchmark set instead of a file
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// List built-in presets and exit
    #[arg(long = "list-presets")]
    pub list_presets: bool,

    /// Plot raw wall clock time or speedup against the baseline
    #[arg(short, long, value_enum, default_value = "raw")]
    pub mode: ModeArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the chart to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Chart title (overrides the title in the input)
    #[arg(short, long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Baseline label for speedup (overrides the input; default is the first entry)
    #[arg(short, long, value_name = "LABEL")]
    pub baseline: Option<String>,

    /// Width of the longest bar in text output, in characters
    #[arg(long, value_name = "COLS", default_value = "50")]
    pub width: usize,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["benchplot", "--preset", "scatter-256"]);
        assert_eq!(cli.preset.as_deref(), Some("scatter-256"));
        assert_eq!(cli.mode, ModeArg::Raw);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.width, 50);
        assert!(cli.output.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_input_file() {
        let cli = Cli::parse_from(["benchplot", "-i", "bench.toml"]);
        assert_eq!(cli.input, Some(PathBuf::from("bench.toml")));
    }

    #[test]
    fn test_cli_speedup_svg() {
        let cli = Cli::parse_from([
            "benchplot",
            "--preset",
            "scatter-256",
            "--mode",
            "speedup",
            "--format",
            "svg",
            "-o",
            "out.svg",
        ]);
        assert_eq!(RenderMode::from(cli.mode), RenderMode::Speedup);
        assert_eq!(cli.format, OutputFormat::Svg);
        assert_eq!(cli.output, Some(PathBuf::from("out.svg")));
    }

    #[test]
    fn test_cli_input_conflicts_with_preset() {
        let result = Cli::try_parse_from(["benchplot", "-i", "a.toml", "-p", "scatter-256"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_title_and_baseline() {
        let cli = Cli::parse_from([
            "benchplot",
            "-p",
            "scatter-256",
            "--title",
            "host: epyc",
            "--baseline",
            "vect",
        ]);
        assert_eq!(cli.title.as_deref(), Some("host: epyc"));
        assert_eq!(cli.baseline.as_deref(), Some("vect"));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["benchplot", "-p", "x", "--format", "png"]).is_err());
    }
}
