use axum::{
    Json, Router,
    body::Body,
    extract::{Query, Request, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use auth_gateway::{
    AUTH_TOKEN_COOKIE_NAME, GatewayConfig, GatewayError, User, authenticate, authorize_url,
    complete_authorization, forward_request, header_set_cookie,
};

use super::error::{ErrorResponse, IntoResponseError, error_response};
use super::session::AuthToken;

pub(super) fn router(config: GatewayConfig) -> Router {
    Router::new()
        .route("/", get(login))
        .route("/callback", get(callback))
        .route("/verify", post(verify))
        .route("/me", get(me))
        .fallback(forward_to_issuer)
        .with_state(config)
}

/// Public view of a user row: id and email, nothing else
#[derive(Debug, Serialize)]
struct UserResponse {
    id: String,
    email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

async fn login(State(config): State<GatewayConfig>) -> Redirect {
    Redirect::temporary(&authorize_url(&config))
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
}

/// Issuer redirect target. With a code: redeem it, mint a session and hand
/// the front end the fresh token. Without one: send the visitor to the front
/// end empty-handed rather than erroring on a stray hit.
async fn callback(
    State(config): State<GatewayConfig>,
    Query(query): Query<CallbackQuery>,
) -> Result<(HeaderMap, Redirect), ErrorResponse> {
    let Some(code) = query.code else {
        tracing::debug!("Callback without code, redirecting to front end");
        return Ok((
            HeaderMap::new(),
            Redirect::temporary(config.frontend_origin.as_str()),
        ));
    };

    let issued = complete_authorization(&code, &config)
        .await
        .into_response_error()?;

    // Token travels as a query parameter; the redirect base comes from
    // configuration only, never from the request.
    let mut target = config.frontend_origin.clone();
    target
        .query_pairs_mut()
        .append_pair("token", &issued.token);

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        AUTH_TOKEN_COOKIE_NAME.as_str(),
        &issued.token,
        config.session_ttl as i64,
    )
    .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?;

    Ok((headers, Redirect::temporary(target.as_str())))
}

#[derive(Debug, Deserialize)]
struct VerifyRequest {
    token: String,
}

/// Back-channel token check for other services.
///
/// Any token that no longer resolves to a live subject is `{"valid": false}`,
/// whether it expired, was never issued, or its user row vanished.
async fn verify(payload: Result<Json<VerifyRequest>, JsonRejection>) -> Response {
    let Ok(Json(request)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Malformed request body"})),
        )
            .into_response();
    };

    match authenticate(&request.token).await {
        Ok(user) => (
            StatusCode::OK,
            Json(json!({"valid": true, "user": UserResponse::from(user)})),
        )
            .into_response(),
        Err(GatewayError::Unauthorized) | Err(GatewayError::ResourceNotFound { .. }) => {
            (StatusCode::UNAUTHORIZED, Json(json!({"valid": false}))).into_response()
        }
        // Remaining variants are store faults, not credential problems
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

async fn me(token: AuthToken) -> Result<Json<UserResponse>, ErrorResponse> {
    let user = authenticate(&token.0).await.into_response_error()?;
    Ok(Json(UserResponse::from(user)))
}

/// Upper bound on a buffered request body headed for the issuer
const FORWARD_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Anything the gateway does not handle itself is the issuer's business.
async fn forward_to_issuer(request: Request) -> Result<Response, ErrorResponse> {
    let method = request.method().clone();
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_string();

    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, FORWARD_BODY_LIMIT)
        .await
        .map_err(|e| error_response(StatusCode::PAYLOAD_TOO_LARGE, &e.to_string()))?;

    let forwarded = forward_request(method, &path_and_query, parts.headers, body.to_vec())
        .await
        .map_err(|e| error_response(StatusCode::BAD_GATEWAY, &e.to_string()))?;

    let mut builder = Response::builder().status(forwarded.status);
    if let Some(headers) = builder.headers_mut() {
        *headers = forwarded.headers;
    }
    builder.body(Body::from(forwarded.body)).into_response_error()
}
