//! auth-gateway - Core coordination layer for the edge auth gateway
//!
//! This crate owns the user directory, the short-lived session store and
//! the client for the external authorization-code issuer. The HTTP surface
//! lives in the companion `auth-gateway-axum` crate.

mod config;
mod coordination;
mod issuer;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, GatewayConfig};

pub use coordination::{
    GatewayError, IssuedSession, authenticate, complete_authorization, finish_login,
};

pub use issuer::{ForwardedResponse, IssuerError, authorize_url, forward_request};

pub use session::{
    AUTH_TOKEN_COOKIE_NAME, SessionError, StoredSession, create_session, lookup_session,
};

pub use userdb::{User, UserError, UserStore};

pub use utils::{UtilError, gen_random_string, header_set_cookie};

/// Initialize the backing stores (relational user directory and session cache)
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    userdb::init().await?;
    Ok(())
}
