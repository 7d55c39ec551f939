use serde::Serialize;

use crate::config::GatewayConfig;
use crate::issuer::exchange_code;
use crate::session::{create_session, lookup_session};
use crate::userdb::{User, UserStore};

use super::errors::GatewayError;

/// Result of a completed login: the bearer token handed to the front end
/// and the directory row it authenticates as.
#[derive(Debug, Serialize)]
pub struct IssuedSession {
    pub token: String,
    pub user: User,
}

/// Complete the authorization-code flow for a callback hit.
///
/// Redeems the code at the external issuer, then provisions the user and
/// mints a session. The code is single-use on the issuer side and is never
/// stored or reused as a credential here.
pub async fn complete_authorization(
    code: &str,
    config: &GatewayConfig,
) -> Result<IssuedSession, GatewayError> {
    if code.is_empty() {
        return Err(GatewayError::Validation("Empty authorization code".to_string()).log());
    }

    let subject = exchange_code(code, config).await?;

    finish_login(&subject.email, config.session_ttl).await
}

/// Provision the directory row for a verified email and mint a session.
///
/// Upsert first, session second: if the session store fails the user row may
/// already exist, which is harmless because the upsert is idempotent and the
/// caller sees the whole login as failed.
pub async fn finish_login(email: &str, ttl: u64) -> Result<IssuedSession, GatewayError> {
    let user = UserStore::upsert_by_email(email).await?;

    let token = create_session(&user.id, &user.email, ttl).await?;

    tracing::info!("Login completed for user {}", user.id);
    Ok(IssuedSession { token, user })
}

/// Resolve a bearer token to its directory row.
///
/// An unknown or expired token is `Unauthorized`. A live session whose user
/// row has since been deleted is `ResourceNotFound`, not `Unauthorized`: the
/// credential was valid, the subject is gone.
pub async fn authenticate(token: &str) -> Result<User, GatewayError> {
    let Some(session) = lookup_session(token).await? else {
        return Err(GatewayError::Unauthorized);
    };

    let Some(user) = UserStore::get_user(&session.user_id).await? else {
        return Err(GatewayError::ResourceNotFound {
            resource_type: "User".to_string(),
            resource_id: session.user_id.clone(),
        }
        .log());
    };

    Ok(user)
}
