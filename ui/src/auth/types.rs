// Core types for the login controller - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Account role picked from the mutually exclusive radio group
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Professor,
    Aluno,
}

impl UserType {
    /// Value sent on the wire and used for the radio `value` attribute
    pub fn wire_name(&self) -> &'static str {
        match self {
            UserType::Professor => "professor",
            UserType::Aluno => "aluno",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Professor => "Professor",
            UserType::Aluno => "Aluno",
        }
    }
}

/// Credentials collected from the form, built fresh for every submission
/// and never persisted
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

/// Outcome of a settled submission
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmitOutcome {
    Success,
    Error,
}

/// Visual state of the submit control. `Settled` behaves like `Idle` between
/// submissions: the control is re-enabled and a new attempt may start.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmitPhase {
    Idle,
    Loading,
    Settled(SubmitOutcome),
}

impl SubmitPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitPhase::Loading)
    }
}

/// The single error banner at the top of the form. Subsequent errors reuse
/// and overwrite it; dismissal hides it without unmounting.
#[derive(Clone, PartialEq, Debug)]
pub struct ErrorBanner {
    pub message: String,
    pub visible: bool,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum LoginAction {
    SetEmail(String),
    SetPassword(String),
    SetUserType(UserType),
    TogglePasswordVisibility,
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
    DismissError { epoch: u64 },
}

#[derive(Clone)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    pub password_visible: bool,
    pub phase: SubmitPhase,
    pub error: Option<ErrorBanner>,
    /// Bumped on every shown error so a stale auto-hide timer cannot
    /// dismiss a newer banner
    pub error_epoch: u64,
    pub success_visible: bool,
}

impl LoginState {
    /// Reduces the state in place based on an action (preserves Dioxus
    /// Signal reactivity)
    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetEmail(email) => {
                self.email = email;
            }
            LoginAction::SetPassword(password) => {
                self.password = password;
            }
            LoginAction::SetUserType(user_type) => {
                self.user_type = user_type;
            }
            LoginAction::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
            }
            LoginAction::SubmitStarted => {
                // The disabled button is the first double-submit guard;
                // this is the second.
                if self.phase.is_loading() {
                    return;
                }
                self.phase = SubmitPhase::Loading;
                if let Some(banner) = &mut self.error {
                    banner.visible = false;
                }
            }
            LoginAction::SubmitSucceeded => {
                if self.phase.is_loading() {
                    self.phase = SubmitPhase::Settled(SubmitOutcome::Success);
                    self.success_visible = true;
                }
            }
            LoginAction::SubmitFailed(message) => {
                if self.phase.is_loading() {
                    self.phase = SubmitPhase::Settled(SubmitOutcome::Error);
                    self.error = Some(ErrorBanner {
                        message,
                        visible: true,
                    });
                    self.error_epoch += 1;
                }
            }
            LoginAction::DismissError { epoch } => {
                if epoch == self.error_epoch {
                    if let Some(banner) = &mut self.error {
                        banner.visible = false;
                    }
                }
            }
        }
    }

    /// Helper methods for common state queries
    pub fn is_submitting(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn error_visible(&self) -> bool {
        self.error.as_ref().map(|b| b.visible).unwrap_or(false)
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            user_type: UserType::Professor,
            password_visible: false,
            phase: SubmitPhase::Idle,
            error: None,
            error_epoch: 0,
            success_visible: false,
        }
    }
}
