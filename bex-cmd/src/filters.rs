//! `--filter axis=value` arguments.

use bex_filter::Key;
use bex_views::{Axis, Dashboard};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterArg {
    pub axis: Axis,
    pub key: Key,
}

/// Parse `axis=value`. Branch/program values are written `branch/program`.
pub fn parse_filter(text: &str) -> Result<FilterArg, String> {
    let (axis, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected axis=value, got '{}'", text))?;
    let axis: Axis = axis.parse().map_err(|e: anyhow::Error| e.to_string())?;
    let key = axis.parse_key(value).map_err(|e| e.to_string())?;
    Ok(FilterArg { axis, key })
}

/// Apply the filters. Several values on one axis select any of them.
pub fn apply(dashboard: &Dashboard, filters: &[FilterArg]) {
    let mut by_axis: BTreeMap<String, (Axis, Vec<Key>)> = BTreeMap::new();
    for filter in filters {
        by_axis
            .entry(filter.axis.to_string())
            .or_insert_with(|| (filter.axis, Vec::new()))
            .1
            .push(filter.key.clone());
    }
    for (axis, keys) in by_axis.into_values() {
        log::info!("Filtering {} to {} value(s)", axis, keys.len());
        dashboard.select(axis, keys);
    }
}
