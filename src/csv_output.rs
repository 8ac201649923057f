//! CSV output format for benchmark summaries

use crate::summary::Summary;

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput;

impl CsvOutput {
    pub fn new() -> Self {
        Self
    }

    fn header() -> &'static str {
        "label,category,value,color"
    }

    /// Escape CSV field (handle commas, quotes, line breaks)
    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string; gaps leave the value column empty
    pub fn to_csv(&self, summary: &Summary) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for bar in &summary.bars {
            let value = bar
                .value
                .as_f64()
                .map(|v| v.to_string())
                .unwrap_or_default();
            output.push_str(&format!(
                "{},{},{},{}\n",
                Self::escape_field(&bar.label),
                bar.category,
                value,
                bar.color
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::style::Color;
    use crate::summary::{BarValue, RenderMode, SummaryBar};

    fn summary(bars: Vec<(&str, BarValue)>) -> Summary {
        Summary {
            mode: RenderMode::RawTime,
            title: String::new(),
            axis_label: RenderMode::RawTime.axis_label(),
            bars: bars
                .into_iter()
                .map(|(label, value)| SummaryBar {
                    label: label.to_string(),
                    category: Category::MessagePassing,
                    value,
                    color: Color::rgb(0xd6, 0x27, 0x28),
                })
                .collect(),
        }
    }

    #[test]
    fn test_csv_header() {
        let csv = CsvOutput::new().to_csv(&summary(vec![]));
        assert_eq!(csv, "label,category,value,color\n");
    }

    #[test]
    fn test_csv_rows() {
        let csv = CsvOutput::new().to_csv(&summary(vec![
            ("original", BarValue::Gap),
            ("mpi", BarValue::Value(134.0)),
        ]));
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[1], "original,message_passing,,#d62728");
        assert_eq!(lines[2], "mpi,message_passing,134,#d62728");
    }

    #[test]
    fn test_csv_escape_field() {
        assert_eq!(CsvOutput::escape_field("simple"), "simple");
        assert_eq!(CsvOutput::escape_field("a,b"), "\"a,b\"");
        assert_eq!(CsvOutput::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(CsvOutput::escape_field("a\nb"), "\"a\nb\"");
        assert_eq!(CsvOutput::escape_field("a\rb"), "\"a\rb\"");
    }

    #[test]
    fn test_csv_carriage_return_label_is_quoted() {
        let csv = CsvOutput::new().to_csv(&summary(vec![("a\rb", BarValue::Value(1.0))]));
        assert!(csv.ends_with("\"a\rb\",message_passing,1,#d62728\n"));
    }
}
