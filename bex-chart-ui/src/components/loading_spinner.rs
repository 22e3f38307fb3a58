use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading budget data...".to_string())]
    pub message: String,
    /// Records indexed so far, when the loader knows it.
    #[props(default)]
    pub records: Option<usize>,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{props.message}"
            if let Some(records) = props.records {
                span { style: "font-size: 12px; margin-top: 6px;", "{records} expenditure records" }
            }
        }
    }
}
