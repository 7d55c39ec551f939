//! Error types for the auth-gateway crate

use thiserror::Error;

use crate::issuer::IssuerError;
use crate::session::SessionError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Errors that can occur while coordinating a login or a session lookup
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Malformed or missing request input
    #[error("Validation error: {0}")]
    Validation(String),

    /// No valid session for the presented token
    #[error("Unauthorized access")]
    Unauthorized,

    /// Resource not found with context
    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from the user directory operations
    #[error("User error: {0}")]
    UserError(UserError),

    /// Error from the external issuer
    #[error("Issuer error: {0}")]
    IssuerError(IssuerError),

    /// Error from session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    UtilsError(UtilError),
}

impl GatewayError {
    /// Log the error and return self
    ///
    /// Logs with appropriate context and returns self, allowing for method
    /// chaining where a caller wants explicit logging.
    pub fn log(self) -> Self {
        match &self {
            Self::Validation(msg) => tracing::error!("Validation error: {}", msg),
            Self::Unauthorized => tracing::error!("Unauthorized access"),
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::error!("Resource not found: {} {}", resource_type, resource_id),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::IssuerError(err) => tracing::error!("Issuer error: {}", err),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::UtilsError(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<UserError> for GatewayError {
    fn from(err: UserError) -> Self {
        let error = Self::UserError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<IssuerError> for GatewayError {
    fn from(err: IssuerError) -> Self {
        let error = Self::IssuerError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for GatewayError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UtilError> for GatewayError {
    fn from(err: UtilError) -> Self {
        let error = Self::UtilsError(err);
        tracing::error!("{}", error);
        error
    }
}
