//! Chart sinks: where a finished [`Summary`] gets drawn
//!
//! A sink receives the bars in order and must not reorder or alter values.

use crate::cli::OutputFormat;
use crate::csv_output::CsvOutput;
use crate::html_output::HtmlOutput;
use crate::json_output::JsonOutput;
use crate::summary::Summary;
use crate::svg_output::SvgOutput;
use crate::text_output::TextOutput;
use std::io::{self, Write};

/// Something that can render a summary to a byte stream
pub trait ChartSink {
    fn render(&self, summary: &Summary, out: &mut dyn Write) -> io::Result<()>;
}

impl ChartSink for TextOutput {
    fn render(&self, summary: &Summary, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.to_text(summary).as_bytes())
    }
}

impl ChartSink for SvgOutput {
    fn render(&self, summary: &Summary, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.to_svg(summary).as_bytes())
    }
}

impl ChartSink for HtmlOutput {
    fn render(&self, summary: &Summary, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.to_html(summary).as_bytes())
    }
}

impl ChartSink for CsvOutput {
    fn render(&self, summary: &Summary, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.to_csv(summary).as_bytes())
    }
}

/// JSON sink; the document is built per call
#[derive(Debug, Default)]
pub struct JsonSink;

impl ChartSink for JsonSink {
    fn render(&self, summary: &Summary, out: &mut dyn Write) -> io::Result<()> {
        let json = JsonOutput::from_summary(summary).to_json()?;
        writeln!(out, "{}", json)
    }
}

/// Sink for an output format
pub fn sink_for(format: OutputFormat, text_width: usize) -> Box<dyn ChartSink> {
    match format {
        OutputFormat::Text => Box::new(TextOutput::new(text_width)),
        OutputFormat::Svg => Box::new(SvgOutput::new()),
        OutputFormat::Html => Box::new(HtmlOutput::new()),
        OutputFormat::Json => Box::new(JsonSink),
        OutputFormat::Csv => Box::new(CsvOutput::new()),
    }
}

/// Render into memory
pub fn render_to_string(sink: &dyn ChartSink, summary: &Summary) -> io::Result<String> {
    let mut buf = Vec::new();
    sink.render(summary, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
