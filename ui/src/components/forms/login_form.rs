//! Login form wired to the authentication endpoint

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::auth::form_validation::{collect_credentials, submit_allowed};
use crate::auth::{LoginAction, LoginState, UserType};
use crate::components::{
    display::{ErrorBanner, SuccessModal},
    inputs::{InputType, UserTypeRadio, ValidatedInput},
};
use crate::console_error;
use crate::services::client::AuthClient;
use crate::services::config::LoginConfig;
use crate::utils::navigation::redirect_to;

/// Fallback when the endpoint reports failure without a message
const GENERIC_FAILURE_MESSAGE: &str = "Erro ao fazer login";
/// Shown for transport and decode failures
const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão. Tente novamente.";

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormComponentProps {
    pub state: Signal<LoginState>,
    pub dispatch: EventHandler<LoginAction>,
    pub config: LoginConfig,
}

#[component]
pub fn LoginFormComponent(props: LoginFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = props.config;

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        if !submit_allowed(&state.peek()) {
            return;
        }

        let credentials = collect_credentials(&state.peek());
        let login_endpoint = config.login_endpoint.clone();
        let success_redirect = config.success_redirect.clone();
        let redirect_delay_ms = config.redirect_delay_ms;
        let error_display_ms = config.error_display_ms;

        // Loading state must be visible before any network activity
        dispatch.call(LoginAction::SubmitStarted);

        spawn(async move {
            let client = AuthClient::new();
            let failure_message = match client.login(&login_endpoint, &credentials).await {
                Ok(response) if response.success => {
                    dispatch.call(LoginAction::SubmitSucceeded);
                    // Let the success modal be seen before leaving the page
                    TimeoutFuture::new(redirect_delay_ms).await;
                    redirect_to(&success_redirect);
                    return;
                }
                Ok(response) => response
                    .message
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
                Err(e) => {
                    console_error!("Erro no login: {}", e);
                    CONNECTION_ERROR_MESSAGE.to_string()
                }
            };

            dispatch.call(LoginAction::SubmitFailed(failure_message));

            // Auto-hide the banner; the epoch check ignores this timer if a
            // newer error replaced the banner meanwhile
            let epoch = state.peek().error_epoch;
            TimeoutFuture::new(error_display_ms).await;
            dispatch.call(LoginAction::DismissError { epoch });
        });
    };

    let current = state();
    let password_input_type = if current.password_visible {
        InputType::Text
    } else {
        InputType::Password
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: on_submit,

            ErrorBanner {
                message: current.error.as_ref().map(|b| b.message.clone()).unwrap_or_default(),
                visible: current.error_visible(),
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "email",
                    "E-mail:"
                }
                ValidatedInput {
                    id: "email".to_string(),
                    value: current.email.clone(),
                    placeholder: "Digite seu e-mail".to_string(),
                    input_type: InputType::Email,
                    input_class: "input-field".to_string(),
                    disabled: current.is_submitting(),
                    required: true,
                    on_change: move |data: String| {
                        dispatch.call(LoginAction::SetEmail(data));
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "password",
                    "Senha:"
                }
                div {
                    class: "password-field",
                    ValidatedInput {
                        id: "password".to_string(),
                        value: current.password.clone(),
                        placeholder: "Digite sua senha".to_string(),
                        input_type: password_input_type,
                        input_class: "input-field".to_string(),
                        disabled: current.is_submitting(),
                        required: true,
                        on_change: move |data: String| {
                            dispatch.call(LoginAction::SetPassword(data));
                        }
                    }
                    button {
                        r#type: "button",
                        class: "toggle-password",
                        onclick: move |_| {
                            dispatch.call(LoginAction::TogglePasswordVisibility);
                        },
                        if current.password_visible { "🙈" } else { "👁" }
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Tipo de usuário:"
                }
                UserTypeRadio {
                    selected: current.user_type,
                    disabled: current.is_submitting(),
                    on_select: move |user_type: UserType| {
                        dispatch.call(LoginAction::SetUserType(user_type));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    r#type: "submit",
                    class: "login-button",
                    disabled: current.is_submitting(),
                    if current.is_submitting() {
                        span {
                            class: "btn-loading",
                            span { class: "spinner" }
                            "Entrando..."
                        }
                    } else {
                        span { class: "btn-text", "Entrar" }
                    }
                }
            }
        }

        SuccessModal { visible: current.success_visible }
    }
}
