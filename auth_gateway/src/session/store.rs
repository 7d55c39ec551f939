use chrono::{Duration, Utc};

use crate::session::errors::SessionError;
use crate::session::types::StoredSession;
use crate::storage::GENERIC_CACHE_STORE;
use crate::utils::gen_random_string;

const SESSION_PREFIX: &str = "session";

/// Bytes of randomness behind a session token (43 base64url characters)
const SESSION_TOKEN_BYTES: usize = 32;

/// Mint a fresh session for an authenticated subject.
///
/// The token is cryptographically random and unrelated to any value the
/// issuer handed out; callers must never reuse an authorization code here.
pub async fn create_session(user_id: &str, email: &str, ttl: u64) -> Result<String, SessionError> {
    let token = gen_random_string(SESSION_TOKEN_BYTES)?;
    let expires_at = Utc::now() + Duration::seconds(ttl as i64);

    let stored_session = StoredSession {
        user_id: user_id.to_string(),
        email: email.to_string(),
        expires_at,
        ttl,
    };

    GENERIC_CACHE_STORE
        .lock()
        .await
        .put_with_ttl(SESSION_PREFIX, &token, stored_session.into(), ttl as usize)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    tracing::debug!("Created session for user {} (ttl {}s)", user_id, ttl);
    Ok(token)
}

/// Look up a session by token.
///
/// Expired and never-issued tokens are indistinguishable to the caller: both
/// come back as `Ok(None)`. An expired record still present in a store that
/// cannot evict on its own is removed here.
pub async fn lookup_session(token: &str) -> Result<Option<StoredSession>, SessionError> {
    let cached = GENERIC_CACHE_STORE
        .lock()
        .await
        .get(SESSION_PREFIX, token)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let Some(cache_data) = cached else {
        return Ok(None);
    };

    let stored_session: StoredSession = match cache_data.try_into() {
        Ok(session) => session,
        Err(_) => return Ok(None),
    };

    if stored_session.expires_at < Utc::now() {
        tracing::debug!("Session expired at {}", stored_session.expires_at);
        GENERIC_CACHE_STORE
            .lock()
            .await
            .remove(SESSION_PREFIX, token)
            .await
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        return Ok(None);
    }

    Ok(Some(stored_session))
}
