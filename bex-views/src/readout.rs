//! Sum readout and record counter text.

use bex_utils::format::{currency, thousands};
use serde::Serialize;

/// `"$"` followed by the filtered total with thousands separators.
pub fn sum_text(total: f64) -> String {
    currency(total)
}

/// An SVG text node drawn over the bubble chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgText {
    pub id: &'static str,
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub text_anchor: &'static str,
    pub font_size: f64,
}

/// The "Sum:" caption and the value readout, positioned for a bubble chart
/// of the given size.
pub fn sum_labels(width: f64, height: f64, total: f64) -> [SvgText; 2] {
    [
        SvgText {
            id: "stats-title",
            x: width * 0.40,
            y: height * 0.15,
            content: "Sum:".to_string(),
            text_anchor: "start",
            font_size: (height * 0.065).round(),
        },
        SvgText {
            id: "sum",
            x: width * 0.5,
            y: height * 0.15,
            content: sum_text(total),
            text_anchor: "start",
            font_size: (height * 0.11).round(),
        },
    ]
}

/// Filtered vs. total record counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordCounter {
    pub filtered: usize,
    pub total: usize,
    /// True when no dimension has an active filter
    pub all_selected: bool,
}

impl RecordCounter {
    pub fn html(&self) -> String {
        if self.all_selected {
            "All records selected. Please click on the chart(s) to apply filters.".to_string()
        } else {
            format!(
                "<strong>{}</strong> selected out of <strong>{}</strong> records.",
                thousands(self.filtered as f64),
                thousands(self.total as f64)
            )
        }
    }
}
