use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum IssuerError {
    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    #[error("Failed to fetch subject info: {0}")]
    FetchSubject(String),

    #[error("Forwarding error: {0}")]
    Forward(String),

    #[error("Serde error: {0}")]
    Serde(String),
}
