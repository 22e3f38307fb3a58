//! Serializable chart payloads handed to the D3 renderers.

use crate::axis::Axis;
use crate::layout::ResolvedLayout;
use crate::readout::SvgText;
use crate::widget::WidgetId;
use bex_filter::Key;
use serde::Serialize;

/// One bar of a row or bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartItem {
    pub key: Key,
    pub label: String,
    pub value: f64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Passes this axis's own filter while the axis is filtered
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowChartData {
    pub widget: WidgetId,
    pub axis: Axis,
    pub layout: ResolvedLayout,
    pub items: Vec<ChartItem>,
    /// True when the chart's own axis has an active filter
    pub filtered: bool,
    pub elastic_x: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartData {
    pub widget: WidgetId,
    pub axis: Axis,
    pub layout: ResolvedLayout,
    pub items: Vec<ChartItem>,
    pub filtered: bool,
    pub elastic_y: bool,
    pub bar_padding: f64,
    pub outer_padding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleItem {
    pub key: Key,
    pub label: String,
    /// Ordinal x position (1-based load-time rank)
    pub x: usize,
    pub value: f64,
    pub radius: f64,
    pub color: String,
    pub title: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleChartData {
    pub widget: WidgetId,
    pub axis: Axis,
    pub layout: ResolvedLayout,
    pub items: Vec<BubbleItem>,
    pub filtered: bool,
    pub x_domain: [f64; 2],
    pub sum_labels: [SvgText; 2],
}

/// A ring segment of the sunburst. Branches hold their programs as children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstNode {
    pub name: String,
    /// Leaf keys under this node; clicking the node toggles all of them
    pub keys: Vec<Key>,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Raw, unformatted value
    pub label: String,
    pub title: String,
    pub selected: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SunburstNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunburstData {
    pub widget: WidgetId,
    pub axis: Axis,
    pub layout: ResolvedLayout,
    pub nodes: Vec<SunburstNode>,
    pub filtered: bool,
}
