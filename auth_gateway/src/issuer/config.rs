use std::{env, sync::LazyLock};

/// Base URL of the external authorization-code issuer
pub(super) static ISSUER_URL: LazyLock<String> =
    LazyLock::new(|| env::var("ISSUER_URL").expect("ISSUER_URL must be set"));

/// Authorize endpoint, overridable for issuers with non-standard layouts
pub(super) static ISSUER_AUTH_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("ISSUER_AUTH_URL")
        .unwrap_or_else(|_| format!("{}/authorize", ISSUER_URL.trim_end_matches('/')))
});

pub(super) static ISSUER_TOKEN_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("ISSUER_TOKEN_URL")
        .unwrap_or_else(|_| format!("{}/token", ISSUER_URL.trim_end_matches('/')))
});

pub(super) static ISSUER_USERINFO_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("ISSUER_USERINFO_URL")
        .unwrap_or_else(|_| format!("{}/userinfo", ISSUER_URL.trim_end_matches('/')))
});
