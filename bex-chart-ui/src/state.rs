//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bex_views::Dashboard;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Cross-filtered dashboard (None until both files are loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Bumped on every filter event; every widget re-renders from it
    pub revision: Signal<u64>,
    /// Current sum readout text
    pub sum_text: Signal<String>,
    /// Zero-based data table page
    pub table_page: Signal<usize>,
    pub sidebar_open: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            revision: Signal::new(0),
            sum_text: Signal::new(String::new()),
            table_page: Signal::new(0),
            sidebar_open: Signal::new(false),
        }
    }

    /// Install a freshly built dashboard and register its filter-event
    /// subscribers. Subscribers are keyed by name, so calling this again
    /// replaces them instead of stacking duplicates.
    pub fn attach(&mut self, dashboard: Dashboard) {
        let sum_text = self.sum_text;
        let revision = self.revision;
        let table_page = self.table_page;
        dashboard.subscribe_readouts(
            move |text| {
                let mut sum_text = sum_text;
                crate::js_bridge::set_sum_text(&text);
                sum_text.set(text);
            },
            move |event| {
                log::debug!("[BEX] filtered: {}", event.dimension);
                let (mut revision, mut table_page) = (revision, table_page);
                table_page.set(0);
                *revision.write() += 1;
            },
        );

        self.sum_text.set(dashboard.sum_text());
        self.dashboard.set(Some(dashboard));
        self.error_msg.set(None);
        self.loading.set(false);
    }

    /// Record a load failure. Nothing is rendered afterwards.
    pub fn fail(&mut self, message: String) {
        log::error!("[BEX] {}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
