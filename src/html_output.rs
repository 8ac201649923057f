//! HTML output format for benchmark summaries
//!
//! Self-contained report: embedded CSS, the SVG chart and a data table.

use crate::summary::{BarValue, RenderMode, Summary};
use crate::svg_output::SvgOutput;

/// HTML output formatter
#[derive(Debug, Default)]
pub struct HtmlOutput {
    chart: SvgOutput,
}

impl HtmlOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        SvgOutput::escape_xml(text)
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        .chart {
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
            display: inline-block;
        }
        table {
            border-collapse: collapse;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .label {
            font-family: monospace;
            font-weight: bold;
        }
        .value {
            font-family: monospace;
            text-align: right;
        }
        .gap {
            color: #888;
            font-style: italic;
        }
        .swatch {
            display: inline-block;
            width: 12px;
            height: 12px;
            margin-right: 6px;
            vertical-align: middle;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    fn format_value(mode: RenderMode, value: &BarValue) -> String {
        match (mode, value) {
            (RenderMode::RawTime, BarValue::Value(v)) => format!("{:.2}", v),
            (RenderMode::Speedup, BarValue::Value(v)) => format!("{:.2}x", v),
            (RenderMode::RawTime, BarValue::Gap) => "not run".to_string(),
            (RenderMode::Speedup, BarValue::Gap) => "n/a".to_string(),
        }
    }

    /// Render the data table
    fn render_table(&self, summary: &Summary) -> String {
        let mut html = String::new();

        html.push_str("    <h2>Results</h2>\n");
        html.push_str("    <table>\n");
        html.push_str(&format!(
            "        <tr><th>Variant</th><th>Category</th><th>{}</th></tr>\n",
            Self::escape_html(summary.axis_label)
        ));

        for bar in &summary.bars {
            let value_class = if bar.value.is_gap() {
                "value gap"
            } else {
                "value"
            };
            html.push_str(&format!(
                "        <tr><td class=\"label\"><span class=\"swatch\" style=\"background-color: {}\"></span>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>\n",
                bar.color,
                Self::escape_html(&bar.label),
                bar.category,
                value_class,
                Self::format_value(summary.mode, &bar.value)
            ));
        }

        html.push_str("    </table>\n");
        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self, summary: &Summary) -> String {
        let mut html = String::new();
        let title = if summary.title.is_empty() {
            "Benchmark Summary".to_string()
        } else {
            Self::escape_html(&summary.title)
        };

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("    <title>{}</title>\n", title));
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str(&format!("    <h1>{}</h1>\n", title));

        html.push_str("    <div class=\"chart\">\n");
        html.push_str(&self.chart.to_svg(summary));
        html.push_str("    </div>\n");

        html.push_str(&self.render_table(summary));

        html.push_str("    <div class=\"footer\">\n");
        html.push_str("        Generated by benchplot\n");
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}
