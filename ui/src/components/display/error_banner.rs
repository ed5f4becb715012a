use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub message: String,
    pub visible: bool,
}

/// The single error element at the top of the form. Later errors overwrite
/// the message; hiding keeps the element mounted.
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    rsx! {
        div {
            class: "error-message",
            style: if props.visible { "display: block;" } else { "display: none;" },
            div {
                class: "error-content",
                span { class: "error-icon", "⚠" }
                span { "{props.message}" }
            }
        }
    }
}
