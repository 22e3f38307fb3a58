//! Running budget total.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SumReadout() -> Element {
    let state = use_context::<AppState>();
    let text = (state.sum_text)();

    rsx! {
        div {
            class: "w3-container",
            style: "font-size: 20px; margin: 8px 0;",
            span { style: "color: #666; margin-right: 6px;", "Total budget:" }
            strong { "{text}" }
        }
    }
}
