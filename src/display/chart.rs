//! Statistics chart output.

use owo_colors::OwoColorize;

use crate::actions::statistics::Series;

/// Widest bar, in characters.
const BAR_WIDTH: usize = 40;

/// Receives fetched statistics for display. Never talks to the API.
pub trait ChartSink {
    fn plot(&mut self, series: &Series);
}

/// Horizontal bar chart written to stdout.
#[derive(Debug, Default)]
pub struct TerminalChart;

impl ChartSink for TerminalChart {
    fn plot(&mut self, series: &Series) {
        println!("{}", render_bars(series, BAR_WIDTH));
    }
}

/// Render `series` as labelled horizontal bars scaled to `width`.
pub fn render_bars(series: &Series, width: usize) -> String {
    let mut output = format!("{}", series.title.bold());
    if series.is_empty() {
        output.push_str("\n(no data)");
        return output;
    }

    let label_width = series
        .points
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.max();

    for (label, value) in &series.points {
        let len = if max > 0.0 {
            ((value / max) * width as f64).round().max(0.0) as usize
        } else {
            0
        };
        output.push_str(&format!(
            "\n{:>label_width$} | {} {}",
            label,
            "█".repeat(len).green(),
            format_value(*value)
        ));
    }
    output
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
