use std::sync::LazyLock;

use http::{HeaderMap, Method, header};

use crate::config::GatewayConfig;
use crate::issuer::config::{ISSUER_AUTH_URL, ISSUER_TOKEN_URL, ISSUER_URL, ISSUER_USERINFO_URL};
use crate::issuer::errors::IssuerError;
use crate::issuer::types::{ForwardedResponse, TokenResponse, VerifiedSubject};

static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Build the issuer authorize URL for the browser redirect on `GET /`.
///
/// Inbound query parameters are ignored; everything here comes from
/// configuration, never from the request.
pub fn authorize_url(config: &GatewayConfig) -> String {
    format!(
        "{}?client_id={}&redirect_uri={}&response_type=code",
        ISSUER_AUTH_URL.as_str(),
        urlencoding::encode(&config.client_id),
        urlencoding::encode(&config.redirect_uri),
    )
}

/// Exchange an authorization code for the verified subject it stands for.
///
/// Two calls against the issuer: the token endpoint (form POST), then the
/// userinfo endpoint with the bearer access token.
pub(crate) async fn exchange_code(
    code: &str,
    config: &GatewayConfig,
) -> Result<VerifiedSubject, IssuerError> {
    let response = HTTP_CLIENT
        .post(ISSUER_TOKEN_URL.as_str())
        .form(&[
            ("code", code),
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| IssuerError::TokenExchange(e.to_string()))?;

    match response.status() {
        reqwest::StatusCode::OK => {
            tracing::debug!("Token exchange succeeded");
        }
        status => {
            tracing::debug!("Token exchange rejected: {}", status);
            return Err(IssuerError::TokenExchange(status.to_string()));
        }
    };

    let response_body = response
        .text()
        .await
        .map_err(|e| IssuerError::TokenExchange(e.to_string()))?;
    let token_response: TokenResponse = serde_json::from_str(&response_body)
        .map_err(|e| IssuerError::Serde(format!("Failed to deserialize token response: {e}")))?;

    fetch_verified_subject(token_response.access_token).await
}

async fn fetch_verified_subject(access_token: String) -> Result<VerifiedSubject, IssuerError> {
    let response = HTTP_CLIENT
        .get(ISSUER_USERINFO_URL.as_str())
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| IssuerError::FetchSubject(e.to_string()))?;

    let status = response.status();
    let response_body = response
        .text()
        .await
        .map_err(|e| IssuerError::FetchSubject(e.to_string()))?;

    let subject = parse_subject_response(status, &response_body)?;
    tracing::debug!("Issuer vouched for subject {}", subject.email);
    Ok(subject)
}

fn parse_subject_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<VerifiedSubject, IssuerError> {
    if status != reqwest::StatusCode::OK {
        tracing::debug!("Userinfo request rejected: {}", status);
        return Err(IssuerError::FetchSubject(status.to_string()));
    }

    serde_json::from_str(body)
        .map_err(|e| IssuerError::Serde(format!("Failed to deserialize subject info: {e}")))
}

/// Relay an unmatched request to the issuer and hand its response back verbatim.
///
/// The issuer owns `/authorize`, its provider UI and token-exchange routes;
/// the gateway adds nothing and inspects nothing.
pub async fn forward_request(
    method: Method,
    path_and_query: &str,
    headers: HeaderMap,
    body: Vec<u8>,
) -> Result<ForwardedResponse, IssuerError> {
    let url = format!("{}{}", ISSUER_URL.trim_end_matches('/'), path_and_query);
    tracing::debug!("Forwarding {} {} to issuer", method, path_and_query);

    let mut outbound = HeaderMap::new();
    for (name, value) in headers.iter() {
        // Connection-level headers must not survive the hop
        if name == header::HOST || name == header::CONTENT_LENGTH || name == header::CONNECTION {
            continue;
        }
        outbound.insert(name.clone(), value.clone());
    }

    let response = HTTP_CLIENT
        .request(method, url)
        .headers(outbound)
        .body(body)
        .send()
        .await
        .map_err(|e| IssuerError::Forward(e.to_string()))?;

    let status = response.status();
    let mut response_headers = response.headers().clone();
    response_headers.remove(header::CONTENT_LENGTH);
    response_headers.remove(header::TRANSFER_ENCODING);
    response_headers.remove(header::CONNECTION);

    let body = response
        .bytes()
        .await
        .map_err(|e| IssuerError::Forward(e.to_string()))?
        .to_vec();

    Ok(ForwardedResponse {
        status,
        headers: response_headers,
        body,
    })
}
