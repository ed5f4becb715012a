use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SuccessModalProps {
    pub visible: bool,
}

/// Shown after a successful login until the page navigates away
#[component]
pub fn SuccessModal(props: SuccessModalProps) -> Element {
    rsx! {
        div {
            class: "success-modal",
            style: if props.visible { "display: flex;" } else { "display: none;" },
            div {
                class: "success-modal-content",
                div { class: "success-icon", "✓" }
                h2 { "Login realizado com sucesso!" }
                p { "Redirecionando para o sistema..." }
            }
        }
    }
}
