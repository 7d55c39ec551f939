use axum::{RequestPartsExt, extract::FromRequestParts};
use axum_extra::{
    TypedHeader,
    headers::{self, authorization::Bearer},
};
use http::{StatusCode, request::Parts};

use auth_gateway::AUTH_TOKEN_COOKIE_NAME;

use super::error::{ErrorResponse, error_response};

/// Bearer credential presented on a request, available as an Axum extractor
///
/// Looks for `Authorization: Bearer <token>` first, then falls back to the
/// `auth_token` cookie. The token is carried opaque; resolving it against
/// the session store is the handler's job.
#[derive(Clone, Debug)]
pub struct AuthToken(pub String);

impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        if let Ok(TypedHeader(bearer)) = parts
            .extract::<TypedHeader<headers::Authorization<Bearer>>>()
            .await
        {
            return Ok(AuthToken(bearer.token().to_string()));
        }

        if let Ok(TypedHeader(cookies)) = parts.extract::<TypedHeader<headers::Cookie>>().await
            && let Some(token) = cookies.get(AUTH_TOKEN_COOKIE_NAME.as_str())
        {
            return Ok(AuthToken(token.to_string()));
        }

        tracing::debug!("No bearer header or {} cookie", AUTH_TOKEN_COOKIE_NAME.as_str());
        Err(error_response(StatusCode::UNAUTHORIZED, "Unauthorized"))
    }
}
