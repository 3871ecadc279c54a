use dioxus::prelude::*;

use crate::components::action_link::ActionLink;

#[derive(Props, Clone, PartialEq)]
pub struct LabelValueProps {
    #[props(into)]
    pub label: String,

    #[props(optional)]
    pub value: Option<String>,

    /// When present, the value renders as a link and clicking it reports
    /// the row's label back to the caller.
    #[props(optional)]
    pub on_value_click: Option<EventHandler<String>>,
}

/// One `label: value` row. A missing value renders as an empty cell, so
/// callers can pass optional payload fields straight through.
#[component]
pub fn LabelValue(props: LabelValueProps) -> Element {
    let label = props.label.clone();
    let value = props.value.clone().unwrap_or_default();

    rsx! {
        div {
            class: "label-value-row",
            span {
                class: "label",
                "{props.label}"
            }
            span {
                if let Some(handler) = props.on_value_click {
                    ActionLink {
                        onclick: move |_| handler.call(label.clone()),
                        "{value}"
                    }
                } else {
                    "{value}"
                }
            }
        }
    }
}
