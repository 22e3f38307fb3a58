//! Previous / next controls for the data table.

use crate::state::AppState;
use bex_views::TablePage;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TablePagerProps {
    pub page: TablePage,
}

#[component]
pub fn TablePager(props: TablePagerProps) -> Element {
    let mut state = use_context::<AppState>();
    let page = props.page;
    let current = page.page;

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; margin: 8px 0; font-size: 13px;",
            button {
                class: "w3-button w3-small w3-border",
                disabled: !page.has_previous(),
                onclick: move |_| state.table_page.set(current.saturating_sub(1)),
                "Previous"
            }
            span { "Showing {page.begin}-{page.end} of {page.total}" }
            button {
                class: "w3-button w3-small w3-border",
                disabled: !page.has_next(),
                onclick: move |_| state.table_page.set(current + 1),
                "Next"
            }
        }
    }
}
