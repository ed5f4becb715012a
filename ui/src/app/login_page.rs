use dioxus::prelude::*;

use crate::auth::{LoginAction, LoginState};
use crate::components::forms::LoginFormComponent;
use crate::console_warn;
use crate::services::config::LoginConfig;

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

#[derive(Props, PartialEq, Clone)]
pub struct LoginPageProps {
    /// Settings for this page; defaults apply when the caller omits it
    #[props(default)]
    pub config: LoginConfig,
}

#[component]
pub fn LoginPage(props: LoginPageProps) -> Element {
    // Consolidated state management
    let mut state = use_signal(LoginState::default);

    // Surface configuration mistakes early instead of failing mid-submission
    use_effect({
        let config = props.config.clone();
        move || {
            if let Err(errors) = config.validate() {
                console_warn!("Invalid login configuration: {}", errors.join(", "));
            }
        }
    });

    // Dispatch function for actions - in-place reduction preserves Dioxus
    // Signal reactivity
    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_CSS }

        div {
            class: "login-container",

            div {
                class: "title-container",
                h1 {
                    class: "login-title",
                    "Sistema de Boletim Escolar"
                }
                p {
                    class: "login-subtitle",
                    "Acesse sua conta para continuar"
                }
            }

            LoginFormComponent {
                state: state,
                dispatch: dispatch,
                config: props.config.clone()
            }
        }
    }
}
