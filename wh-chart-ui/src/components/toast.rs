//! Transient notice component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    pub message: String,
    pub on_dismiss: EventHandler<()>,
}

/// Displays a notice pinned to the bottom of the page. Clicking hides it.
#[component]
pub fn Toast(props: ToastProps) -> Element {
    let on_dismiss = props.on_dismiss;
    rsx! {
        div {
            onclick: move |_| on_dismiss.call(()),
            style: "position: fixed; bottom: 24px; left: 50%; transform: translateX(-50%); padding: 10px 16px; background: #2a1620; color: #ffb3c7; border: 1px solid #ff5c8a; border-radius: 6px; font-size: 14px; cursor: pointer;",
            "{props.message}"
        }
    }
}
