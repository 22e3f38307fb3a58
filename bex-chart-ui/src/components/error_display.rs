//! Load or build failure banner.

use crate::loader::{DEFAULT_DATA_URL, DEFAULT_PALETTE_URL};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Files the dashboard fetches on mount; listed so a missing deploy
    /// artifact is obvious from the page itself.
    #[props(default = vec![DEFAULT_DATA_URL.to_string(), DEFAULT_PALETTE_URL.to_string()])]
    pub sources: Vec<String>,
}

/// Shown in place of the dashboard when the budget files cannot be
/// loaded or the index cannot be built.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let files = props.sources.join(", ");
    rsx! {
        div {
            class: "w3-panel w3-pale-red w3-border",
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0;",
            strong { "Budget dashboard unavailable: " }
            "{props.message}"
            if !props.sources.is_empty() {
                p {
                    style: "margin: 8px 0 0 0; font-size: 13px; color: #555;",
                    "Check that these files are served next to index.html: "
                    code { "{files}" }
                }
            }
        }
    }
}
