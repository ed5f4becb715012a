use crate::auth::types::*;

/// Builds the request payload from the current form state. The email is
/// trimmed; the password is taken exactly as typed.
pub fn collect_credentials(state: &LoginState) -> Credentials {
    Credentials {
        email: state.email.trim().to_string(),
        password: state.password.clone(),
        user_type: state.user_type,
    }
}

/// A submission may start only while no other one is in flight
pub fn submit_allowed(state: &LoginState) -> bool {
    !state.phase.is_loading()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_credentials_trims_email_only() {
        let mut state = LoginState::default();
        state.email = "  joao@escola.br  ".to_string();
        state.password = "  senha com espaços  ".to_string();
        state.user_type = UserType::Aluno;

        let credentials = collect_credentials(&state);
        assert_eq!(credentials.email, "joao@escola.br");
        assert_eq!(credentials.password, "  senha com espaços  ");
        assert_eq!(credentials.user_type, UserType::Aluno);
    }

    #[test]
    fn test_credentials_wire_format() {
        let credentials = Credentials {
            email: "joao@escola.br".to_string(),
            password: "senha123".to_string(),
            user_type: UserType::Professor,
        };

        let body = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "email": "joao@escola.br",
                "password": "senha123",
                "user_type": "professor",
            })
        );
    }

    #[test]
    fn test_submit_allowed_only_outside_loading() {
        let mut state = LoginState::default();
        assert!(submit_allowed(&state));

        state.reduce_in_place(LoginAction::SubmitStarted);
        assert!(!submit_allowed(&state));

        state.reduce_in_place(LoginAction::SubmitFailed("erro".to_string()));
        assert!(submit_allowed(&state));
    }
}
