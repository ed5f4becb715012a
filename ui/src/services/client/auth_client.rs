use reqwest::Client;

use super::errors::{ClientError, ClientResult};
use super::types::LoginResponse;
use crate::auth::Credentials;

/// HTTP client for the authentication endpoint
#[derive(Clone, Default)]
pub struct AuthClient {
    http_client: Client,
}

impl AuthClient {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// Posts the credentials as JSON and decodes the body.
    ///
    /// The HTTP status is not consulted: the endpoint reports the outcome in
    /// the body's `success` field, also on non-2xx responses. One request per
    /// call, no retries.
    pub async fn login(
        &self,
        endpoint: &str,
        credentials: &Credentials,
    ) -> ClientResult<LoginResponse> {
        let response = self
            .http_client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(credentials)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to call login endpoint: {}", e),
            })?;

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ClientError::Decode {
                message: format!("Failed to parse response: {}", e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::UserType;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Credentials {
        Credentials {
            email: "maria@escola.br".to_string(),
            password: "senha123".to_string(),
            user_type: UserType::Professor,
        }
    }

    #[tokio::test]
    async fn test_login_posts_json_and_decodes_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "email": "maria@escola.br",
                "password": "senha123",
                "user_type": "professor",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Login realizado",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AuthClient::new();
        let response = client
            .login(&format!("{}/api/auth/login", server.uri()), &credentials())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("Login realizado"));
    }

    #[tokio::test]
    async fn test_login_failure_comes_from_body_not_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Credenciais inválidas",
            })))
            .mount(&server)
            .await;

        let client = AuthClient::new();
        let response = client
            .login(&format!("{}/api/auth/login", server.uri()), &credentials())
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Credenciais inválidas"));
    }

    #[tokio::test]
    async fn test_missing_message_is_allowed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
            })))
            .mount(&server)
            .await;

        let client = AuthClient::new();
        let response = client
            .login(&format!("{}/api/auth/login", server.uri()), &credentials())
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, None);
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<html>bad gateway</html>"),
            )
            .mount(&server)
            .await;

        let client = AuthClient::new();
        let error = client
            .login(&format!("{}/api/auth/login", server.uri()), &credentials())
            .await
            .unwrap_err();

        assert!(matches!(error, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_body_without_success_field_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "sem campo success",
            })))
            .mount(&server)
            .await;

        let client = AuthClient::new();
        let error = client
            .login(&format!("{}/api/auth/login", server.uri()), &credentials())
            .await
            .unwrap_err();

        assert!(matches!(error, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        let client = AuthClient::new();
        let error = client
            .login("http://127.0.0.1:9/api/auth/login", &credentials())
            .await
            .unwrap_err();

        assert!(matches!(error, ClientError::Network { .. }));
    }
}
