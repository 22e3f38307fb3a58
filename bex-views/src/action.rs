//! Filter actions sent back from the chart renderers.

use crate::axis::Axis;
use crate::dashboard::Dashboard;
use bex_filter::Key;
use serde::Deserialize;

/// A user interaction that changes the filter state.
///
/// Chart clicks arrive as `Toggle` (a sunburst branch toggles all of its
/// programs at once), menu changes as `Select`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum FilterAction {
    Toggle { axis: Axis, keys: Vec<Key> },
    Select { axis: Axis, keys: Vec<Key> },
    Reset { axis: Axis },
    ResetAll,
}

impl FilterAction {
    pub fn apply(self, dashboard: &Dashboard) {
        log::debug!("[BEX] filter action: {:?}", self);
        match self {
            FilterAction::Toggle { axis, keys } => dashboard.toggle_keys(axis, keys),
            FilterAction::Select { axis, keys } => dashboard.select(axis, keys),
            FilterAction::Reset { axis } => dashboard.reset(axis),
            FilterAction::ResetAll => dashboard.reset_all(),
        }
    }
}
