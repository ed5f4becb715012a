use serde::{Deserialize, Serialize};

/// What the client expects back from the authentication endpoint.
///
/// `success` is mandatory; a body without it does not satisfy the contract
/// and is treated as a decode failure. Unknown extra fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
