//! Budget Explorer
//!
//! Cross-filtered dashboard over a city's expenditure records. Clicking a
//! row, bar, bubble or sunburst segment (or changing a select menu) filters
//! that axis, and every other widget re-aggregates over the records that
//! pass all active filters.
//!
//! Data flow:
//! 1. On mount: fetch `expenditures.json` and `sunburst-colors.json`
//!    concurrently, then build the `Dashboard` (index, dimensions, groups,
//!    color scales) and register its filter-event subscribers.
//! 2. D3 renderers report clicks over the filter channel; each action
//!    mutates the index, whose subscribers bump the revision signal and
//!    refresh the sum readout.
//! 3. Every revision change re-renders all charts and the data table.

use bex_chart_ui::components::{
    Accordion, AxisMenu, ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner,
    RecordCounter, Sidebar, SidebarToggle, SumReadout, TablePager,
};
use bex_chart_ui::js_bridge;
use bex_chart_ui::loader::{self, LoaderConfig};
use bex_chart_ui::state::AppState;
use bex_views::{Axis, Dashboard, FilterAction, WidgetId};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("budget-explorer-root"))
        .launch(App);
}

/// Render every chart and the current table page from the dashboard.
fn render_all(dashboard: &Dashboard, page: usize) {
    let width = |widget: WidgetId| js_bridge::container_width(widget.container_id());

    js_bridge::render_row_chart(
        WidgetId::RowChart.container_id(),
        &dashboard.row_chart(width(WidgetId::RowChart)),
    );
    js_bridge::render_bar_chart(
        WidgetId::BarChart.container_id(),
        &dashboard.bar_chart(width(WidgetId::BarChart)),
    );
    js_bridge::render_bubble_chart(
        WidgetId::BubbleChart.container_id(),
        &dashboard.bubble_chart(width(WidgetId::BubbleChart)),
    );
    js_bridge::render_sunburst(
        WidgetId::Sunburst.container_id(),
        &dashboard.sunburst(width(WidgetId::Sunburst)),
    );
    js_bridge::render_data_table(WidgetId::DataTable.container_id(), &dashboard.table_page(page));
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load both files and build the dashboard once on mount ───
    use_effect(move || {
        spawn(async move {
            let (dataset, palette) = match loader::load(&LoaderConfig::default()).await {
                Ok(loaded) => loaded,
                Err(e) => {
                    state.fail(format!("Failed to load budget data: {}", e));
                    return;
                }
            };
            match Dashboard::build(dataset, &palette) {
                Ok(dashboard) => {
                    state.attach(dashboard);
                    js_bridge::init_charts();
                }
                Err(e) => state.fail(format!("Failed to build dashboard: {}", e)),
            }
        });
    });

    // ─── Effect 2: Apply filter actions reported by the D3 renderers ───
    use_future(move || async move {
        let mut channel = js_bridge::filter_channel();
        loop {
            match channel.recv::<FilterAction>().await {
                Ok(action) => {
                    let dashboard = state.dashboard.peek().clone();
                    if let Some(dashboard) = dashboard {
                        action.apply(&dashboard);
                    }
                }
                Err(e) => {
                    log::error!("[BEX] filter channel closed: {:?}", e);
                    break;
                }
            }
        }
    });

    // ─── Effect 3: Re-render every chart on each filter event ───
    use_effect(move || {
        let _revision = (state.revision)();
        let page = (state.table_page)();

        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let dashboard = state.dashboard.read().clone();
        if let Some(dashboard) = dashboard {
            render_all(&dashboard, page);
        }
    });

    // ─── Render ───
    let _revision = (state.revision)();
    let table_page = state
        .dashboard
        .read()
        .as_ref()
        .map(|d| d.table_page((state.table_page)()));
    let loading = *state.loading.read();

    rsx! {
        div {
            style: "font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if loading {
                LoadingSpinner {}
            } else if let Some(page) = table_page {
                Sidebar {
                    menu: rsx! {
                        Accordion { title: "Departments".to_string(), open: true,
                            AxisMenu { axis: Axis::Department }
                        }
                        Accordion { title: "Budget Years".to_string(),
                            AxisMenu { axis: Axis::BudgetYear }
                        }
                        Accordion { title: "Fund Types".to_string(),
                            AxisMenu { axis: Axis::FundType }
                        }
                        Accordion { title: "Branches & Programs".to_string(),
                            AxisMenu { axis: Axis::BranchProgram }
                        }
                    },

                    div {
                        class: "w3-container",
                        style: "display: flex; align-items: center; gap: 12px;",
                        SidebarToggle {}
                        h2 { "Budget Explorer" }
                    }
                    div {
                        class: "w3-container",
                        SumReadout {}
                        RecordCounter {}
                    }

                    div {
                        class: "w3-row-padding",
                        div {
                            class: "w3-half",
                            ChartHeader { title: "Budget by Department".to_string(), axis: Axis::Department }
                            ChartContainer { widget: WidgetId::RowChart, loading, min_height: 360 }
                        }
                        div {
                            class: "w3-half",
                            ChartHeader { title: "Budget by Fund Type".to_string(), axis: Axis::FundType }
                            ChartContainer { widget: WidgetId::BubbleChart, loading }
                            ChartHeader { title: "Budget by Year".to_string(), axis: Axis::BudgetYear }
                            ChartContainer { widget: WidgetId::BarChart, loading, min_height: 120 }
                        }
                    }

                    div {
                        class: "w3-row-padding",
                        div {
                            class: "w3-half",
                            ChartHeader { title: "Budget by Branch and Program".to_string(), axis: Axis::BranchProgram }
                            ChartContainer { widget: WidgetId::Sunburst, loading, min_height: 360 }
                        }
                        div {
                            class: "w3-half",
                            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Records" }
                            ChartContainer { widget: WidgetId::DataTable, loading }
                            TablePager { page }
                        }
                    }
                }
            }
        }
    }
}
