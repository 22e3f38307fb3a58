//! Mount point for one D3 widget.

use bex_views::WidgetId;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Widget drawn into this container; its container id is the D3 target.
    pub widget: WidgetId,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 200)]
    pub min_height: u32,
}

/// Accessible label and loading text for a widget's container.
fn container_copy(widget: WidgetId) -> (String, String) {
    match widget {
        WidgetId::DataTable => ("Expenditure records".to_string(), "Listing records...".to_string()),
        widget => {
            let axis = widget.axis().label();
            (format!("Budget by {}", axis), format!("Summing {}...", axis))
        }
    }
}

/// Empty div the D3 scripts render into, labelled with the axis the widget
/// filters so screen readers announce which selection a click changes.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let id = props.widget.container_id();
    let (label, pending) = container_copy(props.widget);

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "{pending}"
                }
            }
            div {
                id: "{id}",
                "aria-label": "{label}",
                style: "width: 100%;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_copy_names_the_axis() {
        let (label, pending) = container_copy(WidgetId::Sunburst);
        assert_eq!(label, "Budget by Branches & Programs");
        assert_eq!(pending, "Summing Branches & Programs...");
        assert_eq!(container_copy(WidgetId::DataTable).0, "Expenditure records");
    }
}
