use std::sync::LazyLock;

/// Cookie name accepted as an inbound session credential on `/me`
pub static AUTH_TOKEN_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("AUTH_TOKEN_COOKIE_NAME")
        .ok()
        .unwrap_or("auth_token".to_string())
});
