use crate::axis::Axis;
use crate::widget::title;
use bex_filter::{Filter, Key, KeyValue};
use serde::Serialize;
use std::cmp::Ordering;

/// Order entries by descending value. The sort is stable, so ties keep the
/// ascending key order produced by the group.
pub fn order_desc(entries: &mut [KeyValue]) {
    entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
}

/// Visible rows of each axis's select menu.
pub fn number_visible(axis: Axis) -> usize {
    match axis {
        Axis::Department => 11,
        Axis::BudgetYear => 5,
        Axis::FundType => 6,
        Axis::BranchProgram => 11,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuOption {
    pub key: Key,
    /// Option value used by the `<select>` element: the option's position,
    /// so composite keys that print alike stay distinct
    pub value: String,
    pub title: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectMenu {
    pub axis: Axis,
    pub label: &'static str,
    pub multiple: bool,
    pub number_visible: usize,
    pub options: Vec<MenuOption>,
}

impl SelectMenu {
    pub fn build(axis: Axis, mut entries: Vec<KeyValue>, filter: &Filter) -> Self {
        order_desc(&mut entries);
        let selected = filter.selected();
        let options = entries
            .into_iter()
            .enumerate()
            .map(|(position, kv)| MenuOption {
                value: position.to_string(),
                title: title(&kv.key, kv.value),
                selected: selected.contains(&kv.key),
                key: kv.key,
            })
            .collect();
        Self {
            axis,
            label: axis.label(),
            multiple: true,
            number_visible: number_visible(axis),
            options,
        }
    }

    /// Keys of the options whose values are in `values`. Unknown values are
    /// skipped.
    pub fn keys_for(&self, values: &[String]) -> Vec<Key> {
        values
            .iter()
            .filter_map(|v| v.parse::<usize>().ok())
            .filter_map(|position| self.options.get(position))
            .map(|o| o.key.clone())
            .collect()
    }
}
