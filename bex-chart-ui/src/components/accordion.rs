//! Accordion section: clicking the header shows or hides the body.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AccordionProps {
    pub title: String,
    #[props(default = false)]
    pub open: bool,
    pub children: Element,
}

#[component]
pub fn Accordion(props: AccordionProps) -> Element {
    let mut open = use_signal(|| props.open);

    let header_class = if open() {
        "w3-button w3-block w3-left-align w3-darkblue"
    } else {
        "w3-button w3-block w3-left-align"
    };
    let section_class = if open() {
        "w3-hide w3-show"
    } else {
        "w3-hide"
    };

    rsx! {
        div {
            button {
                class: "{header_class}",
                onclick: move |_| open.toggle(),
                "{props.title}"
            }
            div {
                class: "{section_class}",
                {props.children}
            }
        }
    }
}
