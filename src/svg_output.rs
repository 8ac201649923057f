//! SVG bar chart
//!
//! Vertical bars in input order, filled with their category color. Gaps are
//! drawn as a dashed placeholder labelled "n/a" so a missing run is visibly
//! different from a zero-height bar.

use crate::summary::{BarValue, Summary};
use std::fmt::Write as _;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;
const BAR_FILL_RATIO: f64 = 0.7;
const GAP_PLACEHOLDER_HEIGHT: f64 = 24.0;
const Y_TICKS: usize = 5;

/// SVG chart formatter
#[derive(Debug, Default)]
pub struct SvgOutput;

impl SvgOutput {
    pub fn new() -> Self {
        Self
    }

    /// Escape XML special characters
    pub(crate) fn escape_xml(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Smallest 1/2/5 x 10^k value >= `max`, so axis ticks land on round numbers.
    /// Falls back to `max` itself when rounding up would overflow.
    pub(crate) fn nice_ceiling(max: f64) -> f64 {
        if max <= 0.0 {
            return 1.0;
        }
        let magnitude = 10f64.powf(max.log10().floor());
        let normalized = max / magnitude;
        let step = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };
        let ceiling = step * magnitude;
        if ceiling.is_finite() {
            ceiling
        } else {
            max
        }
    }

    fn format_tick(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }

    pub fn to_svg(&self, summary: &Summary) -> String {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let axis_y = MARGIN_TOP + plot_h;
        let y_max = Self::nice_ceiling(summary.max_value());
        let slot = plot_w / summary.bars.len().max(1) as f64;
        let bar_w = slot * BAR_FILL_RATIO;

        // write! into a String cannot fail
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
            w = WIDTH,
            h = HEIGHT
        );
        let _ = writeln!(
            svg,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            WIDTH, HEIGHT
        );

        if !summary.title.is_empty() {
            let _ = writeln!(
                svg,
                r#"  <text class="title" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="16">{}</text>"#,
                WIDTH / 2.0,
                MARGIN_TOP / 2.0 + 6.0,
                Self::escape_xml(&summary.title)
            );
        }

        // Y axis with gridlines
        for i in 0..=Y_TICKS {
            let value = y_max * (i as f64 / Y_TICKS as f64);
            let y = axis_y - plot_h * i as f64 / Y_TICKS as f64;
            let _ = writeln!(
                svg,
                r##"  <line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e0e0e0"/>"##,
                MARGIN_LEFT,
                MARGIN_LEFT + plot_w,
                y = y
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
                MARGIN_LEFT - 6.0,
                y + 4.0,
                Self::format_tick(value)
            );
        }
        let _ = writeln!(
            svg,
            r#"  <line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="black"/>"#,
            MARGIN_TOP,
            axis_y,
            x = MARGIN_LEFT
        );
        let _ = writeln!(
            svg,
            r#"  <line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="black"/>"#,
            MARGIN_LEFT,
            MARGIN_LEFT + plot_w,
            y = axis_y
        );
        let _ = writeln!(
            svg,
            r#"  <text class="axis-label" transform="translate({:.1},{:.1}) rotate(-90)" text-anchor="middle">{}</text>"#,
            MARGIN_LEFT / 3.0,
            MARGIN_TOP + plot_h / 2.0,
            Self::escape_xml(summary.axis_label)
        );

        for (i, bar) in summary.bars.iter().enumerate() {
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
            let center = x + bar_w / 2.0;
            let label = Self::escape_xml(&bar.label);

            match bar.value {
                BarValue::Value(v) => {
                    let h = plot_h * (v / y_max);
                    let _ = writeln!(
                        svg,
                        r#"  <rect class="bar" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}: {}</title></rect>"#,
                        x,
                        axis_y - h,
                        bar_w,
                        h,
                        bar.color,
                        label,
                        Self::format_tick(v)
                    );
                }
                BarValue::Gap => {
                    let _ = writeln!(
                        svg,
                        r#"  <rect class="gap" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{}" stroke-dasharray="4 3"><title>{}: not available</title></rect>"#,
                        x,
                        axis_y - GAP_PLACEHOLDER_HEIGHT,
                        bar_w,
                        GAP_PLACEHOLDER_HEIGHT,
                        bar.color,
                        label
                    );
                    let _ = writeln!(
                        svg,
                        r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" fill="#666">n/a</text>"##,
                        center,
                        axis_y - GAP_PLACEHOLDER_HEIGHT / 2.0 + 4.0
                    );
                }
            }

            let _ = writeln!(
                svg,
                r#"  <text class="tick" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
                center,
                axis_y + 18.0,
                label
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::style::Color;
    use crate::summary::{RenderMode, SummaryBar};

    fn bar(label: &str, value: BarValue) -> SummaryBar {
        SummaryBar {
            label: label.to_string(),
            category: Category::Serial,
            value,
            color: Color::rgb(0xff, 0x7f, 0x0e),
        }
    }

    fn summary(bars: Vec<SummaryBar>) -> Summary {
        Summary {
            mode: RenderMode::RawTime,
            title: "scatter <256>".to_string(),
            axis_label: RenderMode::RawTime.axis_label(),
            bars,
        }
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(SvgOutput::nice_ceiling(134.0), 200.0);
        assert_eq!(SvgOutput::nice_ceiling(14.84), 20.0);
        assert_eq!(SvgOutput::nice_ceiling(1.0), 1.0);
        assert_eq!(SvgOutput::nice_ceiling(3.0), 5.0);
        assert_eq!(SvgOutput::nice_ceiling(0.0), 1.0);
        assert_eq!(SvgOutput::nice_ceiling(f64::MAX), f64::MAX);
        assert_eq!(SvgOutput::nice_ceiling(1.5e308), 1.5e308);
    }

    #[test]
    fn test_svg_huge_values_keep_bar_heights() {
        let svg = SvgOutput::new().to_svg(&summary(vec![
            bar("slow", BarValue::Value(f64::MAX)),
            bar("half", BarValue::Value(f64::MAX / 2.0)),
        ]));
        assert!(!svg.contains("inf"));
        assert!(!svg.contains("NaN"));
        assert!(svg.contains(r#"height="380.0""#));
        assert!(svg.contains(r#"height="190.0""#));
    }

    #[test]
    fn test_svg_structure() {
        let svg = SvgOutput::new().to_svg(&summary(vec![bar("vect", BarValue::Value(126.0))]));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Wall clock time [s]"));
        assert!(svg.contains(r##"fill="#ff7f0e""##));
    }

    #[test]
    fn test_svg_escapes_title_and_labels() {
        let svg = SvgOutput::new().to_svg(&summary(vec![bar("a<b", BarValue::Value(1.0))]));
        assert!(svg.contains("scatter &lt;256&gt;"));
        assert!(svg.contains("a&lt;b"));
        assert!(!svg.contains("a<b"));
    }

    #[test]
    fn test_svg_gap_is_placeholder() {
        let svg = SvgOutput::new().to_svg(&summary(vec![
            bar("original", BarValue::Gap),
            bar("mpi", BarValue::Value(134.0)),
        ]));
        assert_eq!(svg.matches(r#"class="gap""#).count(), 1);
        assert_eq!(svg.matches(r#"class="bar""#).count(), 1);
        assert!(svg.contains("n/a"));
    }

    #[test]
    fn test_svg_empty_summary() {
        let svg = SvgOutput::new().to_svg(&summary(vec![]));
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains(r#"class="bar""#));
    }
}
