use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    pub onclick: EventHandler<MouseEvent>,

    pub children: Element,
}

/// An anchor that never navigates: activation is suppressed and handled
/// entirely by the supplied callback.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    rsx! {
        a {
            href: "#",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                props.onclick.call(evt);
            },
            {props.children}
        }
    }
}
