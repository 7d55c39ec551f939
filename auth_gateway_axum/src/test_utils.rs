//! Test utilities for shared test initialization
//!
//! The router tests exercise the real coordination layer, so the global
//! stores must be pointed at in-memory backends before anything touches
//! them. Environment variables are set directly rather than loaded from a
//! file to keep the tests self-contained.

use std::sync::Once;

use auth_gateway::GatewayConfig;

/// Point the global stores at in-memory backends and initialize them
pub async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        unsafe {
            std::env::set_var("GENERIC_DATA_STORE_TYPE", "sqlite");
            std::env::set_var(
                "GENERIC_DATA_STORE_URL",
                "sqlite:file:auth_gateway_axum_test?mode=memory&cache=shared",
            );
            std::env::set_var("GENERIC_CACHE_STORE_TYPE", "memory");
            std::env::set_var("GENERIC_CACHE_STORE_URL", "memory://");
            std::env::set_var("ISSUER_URL", "https://issuer.example.com");
        }
    });

    if let Err(e) = auth_gateway::init().await {
        eprintln!("Warning: Failed to initialize stores: {e}");
    }
}

/// Configuration used by the router tests
pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        frontend_origin: url::Url::parse("https://app.example.com/")
            .expect("static URL should parse"),
        client_id: "test-client".to_string(),
        redirect_uri: "https://gw.example.com/callback".to_string(),
        session_ttl: 300,
    }
}
