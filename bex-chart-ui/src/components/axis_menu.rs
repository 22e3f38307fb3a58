//! Multi-select menu bound to one axis.

use crate::js_bridge;
use crate::state::AppState;
use bex_views::{Axis, WidgetId};
use dioxus::prelude::*;

/// A `<select multiple>` listing the axis's group entries by descending
/// value. Changing the selection replaces the axis filter.
#[component]
pub fn AxisMenu(axis: Axis) -> Element {
    let state = use_context::<AppState>();
    let _revision = (state.revision)();
    let Some(dashboard) = state.dashboard.read().clone() else {
        return rsx! {};
    };

    let menu = dashboard.menu(axis);
    let select_id = WidgetId::menu_for(axis).container_id();
    let on_change = {
        let menu = menu.clone();
        move |_evt: Event<FormData>| {
            let values = js_bridge::selected_values(select_id);
            dashboard.select(axis, menu.keys_for(&values));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{select_id}",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "{menu.label}"
            }
            select {
                id: "{select_id}",
                class: "w3-select",
                multiple: menu.multiple,
                size: "{menu.number_visible}",
                onchange: on_change,
                for option in menu.options.iter() {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: option.selected,
                        "{option.title}"
                    }
                }
            }
        }
    }
}
