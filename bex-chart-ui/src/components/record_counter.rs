//! Filtered vs. total record count, with a reset-all link.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn RecordCounter() -> Element {
    let state = use_context::<AppState>();
    let _revision = (state.revision)();
    let Some(dashboard) = state.dashboard.read().clone() else {
        return rsx! {};
    };
    let counter = dashboard.record_counter();
    let html = counter.html();

    rsx! {
        div {
            style: "margin: 8px 0; font-size: 13px;",
            span { id: "records-count", dangerous_inner_html: "{html}" }
            if !counter.all_selected {
                " "
                a {
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        dashboard.reset_all();
                    },
                    "Reset All"
                }
            }
        }
    }
}
