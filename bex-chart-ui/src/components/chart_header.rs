//! Chart header with a title and a reset link for the chart's axis.

use crate::state::AppState;
use bex_views::Axis;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Axis whose filter the reset link clears
    pub axis: Axis,
}

/// Chart title, plus a "reset" link while the chart's axis is filtered.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let state = use_context::<AppState>();
    let _revision = (state.revision)();
    let dashboard = state.dashboard.read().clone();
    let filtered = dashboard
        .as_ref()
        .map(|d| !d.filter(props.axis).is_all())
        .unwrap_or(false);
    let axis = props.axis;

    rsx! {
        div {
            style: "margin-bottom: 8px; display: flex; align-items: baseline; gap: 8px;",
            h3 {
                style: "margin: 0; font-size: 16px;",
                "{props.title}"
            }
            if filtered {
                a {
                    class: "reset",
                    href: "#",
                    style: "font-size: 12px;",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        if let Some(dashboard) = dashboard.as_ref() {
                            dashboard.reset(axis);
                        }
                    },
                    "reset"
                }
            }
        }
    }
}
