//! Terminal bar chart

use crate::summary::{BarValue, RenderMode, Summary};

const BAR_CHAR: char = '█';

/// Horizontal bar chart for terminals
#[derive(Debug)]
pub struct TextOutput {
    /// Width of the longest bar in characters
    width: usize,
}

impl TextOutput {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    fn format_value(mode: RenderMode, value: f64) -> String {
        match mode {
            RenderMode::RawTime => format!("{:.2} s", value),
            RenderMode::Speedup => format!("{:.2}x", value),
        }
    }

    fn gap_text(mode: RenderMode) -> &'static str {
        match mode {
            RenderMode::RawTime => "(not run)",
            RenderMode::Speedup => "(n/a)",
        }
    }

    fn bar_len(&self, value: f64, max: f64) -> usize {
        if max <= 0.0 {
            return 0;
        }
        ((value / max) * self.width as f64).round() as usize
    }

    pub fn to_text(&self, summary: &Summary) -> String {
        let mut output = String::new();

        if !summary.title.is_empty() {
            output.push_str(&summary.title);
            output.push('\n');
            output.push_str(&"─".repeat(summary.title.chars().count()));
            output.push('\n');
        }

        let label_width = summary
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        let max = summary.max_value();

        for bar in &summary.bars {
            let cell = match bar.value {
                BarValue::Value(v) => {
                    let len = self.bar_len(v, max);
                    let bar_str: String = std::iter::repeat(BAR_CHAR).take(len).collect();
                    if len > 0 {
                        format!("{} {}", bar_str, Self::format_value(summary.mode, v))
                    } else {
                        Self::format_value(summary.mode, v)
                    }
                }
                BarValue::Gap => Self::gap_text(summary.mode).to_string(),
            };
            output.push_str(&format!(
                "{:<width$} │ {}\n",
                bar.label,
                cell,
                width = label_width
            ));
        }

        output.push_str(&format!("\n{}\n", summary.axis_label));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::style::Color;
    use crate::summary::SummaryBar;

    fn summary(mode: RenderMode, values: &[(&str, Option<f64>)]) -> Summary {
        Summary {
            mode,
            title: "scatter".to_string(),
            axis_label: mode.axis_label(),
            bars: values
                .iter()
                .map(|(label, v)| SummaryBar {
                    label: label.to_string(),
                    category: Category::Serial,
                    value: v.map_or(BarValue::Gap, BarValue::Value),
                    color: Color::NEUTRAL,
                })
                .collect(),
        }
    }

    #[test]
    fn test_longest_bar_fills_width() {
        let text = TextOutput::new(10).to_text(&summary(
            RenderMode::RawTime,
            &[("vect", Some(126.0)), ("openmp-c", Some(63.0))],
        ));
        assert!(text.contains(&format!("vect     │ {} 126.00 s", "█".repeat(10))));
        assert!(text.contains(&format!("openmp-c │ {} 63.00 s", "█".repeat(5))));
    }

    #[test]
    fn test_gap_raw_time() {
        let text = TextOutput::new(10).to_text(&summary(
            RenderMode::RawTime,
            &[("original", None), ("mpi", Some(134.0))],
        ));
        assert!(text.contains("original │ (not run)"));
        assert!(text.ends_with("Wall clock time [s]\n"));
    }

    #[test]
    fn test_gap_speedup() {
        let text = TextOutput::new(10).to_text(&summary(
            RenderMode::Speedup,
            &[("original", Some(1.0)), ("multiproc", None)],
        ));
        assert!(text.contains("multiproc │ (n/a)"));
        assert!(text.contains("1.00x"));
        assert!(text.ends_with("Speedup\n"));
    }

    #[test]
    fn test_all_gaps_does_not_divide_by_zero() {
        let text = TextOutput::new(10).to_text(&summary(RenderMode::RawTime, &[("a", None)]));
        assert!(text.contains("a │ (not run)"));
    }

    #[test]
    fn test_title_header() {
        let text = TextOutput::new(10).to_text(&summary(RenderMode::RawTime, &[("a", Some(1.0))]));
        assert!(text.starts_with("scatter\n───────\n"));
    }
}
