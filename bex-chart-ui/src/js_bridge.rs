//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes chart payloads and calls those globals. Clicks flow
//! back the other way through [`filter_channel`].

use bex_views::charts::{BarChartData, BubbleChartData, RowChartData, SunburstData};
use bex_views::TablePage;
use serde::Serialize;
use wasm_bindgen::JsCast;

// Embed all D3 chart JS files at compile time
static COMMON_JS: &str = include_str!("../assets/js/common.js");
static ROW_CHART_JS: &str = include_str!("../assets/js/row-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static BUBBLE_CHART_JS: &str = include_str!("../assets/js/bubble-chart.js");
static SUNBURST_JS: &str = include_str!("../assets/js/sunburst.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Width used when a container has not been laid out yet.
pub const FALLBACK_WIDTH: f64 = 600.0;

/// Installs `window.__bexFilter`, which forwards filter actions to Rust.
const FILTER_CHANNEL_JS: &str = r#"
    window.__bexFilter = function(action) { dioxus.send(action); };
    await new Promise(function() {});
"#;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BEX JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts declare functions like `renderRowChart(...)`. They are
/// evaluated at global scope via indirect eval once D3 is ready and then
/// promoted to `window.*` so the render calls below can find them.
pub fn init_charts() {
    let all_js = [
        COMMON_JS,
        ROW_CHART_JS,
        BAR_CHART_JS,
        BUBBLE_CHART_JS,
        SUNBURST_JS,
        DATA_TABLE_JS,
    ]
    .join("\n");

    let store_js = format!(
        "window.__bexChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__bexChartScripts);
                    delete window.__bexChartScripts;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    if (typeof renderRowChart !== 'undefined') window.renderRowChart = renderRowChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderBubbleChart !== 'undefined') window.renderBubbleChart = renderBubbleChart;
                    if (typeof renderSunburst !== 'undefined') window.renderSunburst = renderSunburst;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    window.__bexChartsReady = true;
                    console.log('BEX charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Start the click channel. Each `window.__bexFilter(action)` call from a
/// renderer arrives as one message on the returned handle.
pub fn filter_channel() -> dioxus::document::Eval {
    dioxus::document::eval(FILTER_CHANNEL_JS)
}

/// Poll until D3, the chart scripts and the container all exist, then call
/// `window[function](container_id, payload)`.
fn render_when_ready<T: Serialize>(function: &str, container_id: &str, payload: &T) {
    // JSON is a valid JS expression, so the payload is passed as an object literal
    let data_json = match serde_json::to_string(payload) {
        Ok(json) => json,
        Err(e) => {
            log::error!("[BEX] failed to serialize {} payload: {}", function, e);
            return;
        }
    };
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__bexChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', {data_json});
                    }} catch(e) {{ console.error('[BEX] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

pub fn render_row_chart(container_id: &str, data: &RowChartData) {
    render_when_ready("renderRowChart", container_id, data);
}

pub fn render_bar_chart(container_id: &str, data: &BarChartData) {
    render_when_ready("renderBarChart", container_id, data);
}

/// Render the fund type bubbles along with the "Sum:" labels.
pub fn render_bubble_chart(container_id: &str, data: &BubbleChartData) {
    render_when_ready("renderBubbleChart", container_id, data);
}

pub fn render_sunburst(container_id: &str, data: &SunburstData) {
    render_when_ready("renderSunburst", container_id, data);
}

pub fn render_data_table(container_id: &str, page: &TablePage) {
    render_when_ready("renderDataTable", container_id, page);
}

/// Update the sum readout drawn inside the bubble chart without a redraw.
pub fn set_sum_text(text: &str) {
    let text_json = serde_json::to_string(text).unwrap_or_default();
    call_js(&format!(
        "var el = document.getElementById('sum'); if (el) el.textContent = {};",
        text_json
    ));
}

/// Current width of a container element, or [`FALLBACK_WIDTH`].
pub fn container_width(container_id: &str) -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .map(|el| el.client_width() as f64)
        .filter(|width| *width > 0.0)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Values of the selected options of a `<select multiple>` element.
pub fn selected_values(select_id: &str) -> Vec<String> {
    let Some(select) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(select_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlSelectElement>().ok())
    else {
        return Vec::new();
    };

    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}
