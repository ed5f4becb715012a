use thiserror::Error;

/// Client-side login errors. Both variants surface to the user as the
/// generic connection message; the distinction only matters for diagnostics.
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    /// The request could not be sent or the transport failed mid-flight
    #[error("Network error: {message}")]
    Network { message: String },

    /// The response body was not the JSON contract the endpoint promises
    #[error("Decode error: {message}")]
    Decode { message: String },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
