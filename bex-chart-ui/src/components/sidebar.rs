//! Collapsible sidebar holding the select menus.

use crate::state::AppState;
use dioxus::prelude::*;

/// Main area left margin while the sidebar is open.
const MAIN_MARGIN_OPEN: &str = "55%";
const SIDEBAR_WIDTH: &str = "53%";
const SIDEBAR_HEIGHT: &str = "90%";

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Sidebar contents
    pub menu: Element,
    /// Main area contents
    pub children: Element,
}

/// Sidebar plus main area. The main area shifts right while the sidebar is open.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let mut state = use_context::<AppState>();
    let open = (state.sidebar_open)();

    let sidebar_style = if open {
        format!(
            "display: block; width: {}; height: {}; overflow-y: auto; z-index: 3;",
            SIDEBAR_WIDTH, SIDEBAR_HEIGHT
        )
    } else {
        "display: none;".to_string()
    };
    let main_style = if open {
        format!("margin-left: {};", MAIN_MARGIN_OPEN)
    } else {
        "margin-left: 0;".to_string()
    };

    rsx! {
        nav {
            id: "sidebar",
            class: "w3-sidebar w3-bar-block w3-card",
            style: "{sidebar_style}",
            button {
                class: "w3-bar-item w3-button w3-large",
                onclick: move |_| state.sidebar_open.set(false),
                "Close ×"
            }
            {props.menu}
        }
        div {
            id: "main",
            style: "{main_style}",
            {props.children}
        }
    }
}

/// Hamburger button that opens the sidebar.
#[component]
pub fn SidebarToggle() -> Element {
    let mut state = use_context::<AppState>();
    let open = (state.sidebar_open)();

    rsx! {
        if !open {
            button {
                class: "w3-button w3-xlarge",
                onclick: move |_| state.sidebar_open.set(true),
                "☰"
            }
        }
    }
}
