//! Test utilities for shared test initialization
//!
//! Centralized setup so every test module sees the same store configuration.
//! Environment variables are set directly instead of loaded from a file: the
//! global stores read them through `LazyLock`, so the values must be in place
//! before any store is touched.

use std::sync::Once;

/// Centralized test initialization for all tests across the crate
///
/// Points the global stores at an in-memory SQLite database (shared-cache so
/// every pooled connection sees the same tables) and the in-memory cache
/// store, then makes sure the user table exists.
pub async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        unsafe {
            std::env::set_var("GENERIC_DATA_STORE_TYPE", "sqlite");
            std::env::set_var(
                "GENERIC_DATA_STORE_URL",
                "sqlite:file:auth_gateway_test?mode=memory&cache=shared",
            );
            std::env::set_var("GENERIC_CACHE_STORE_TYPE", "memory");
            std::env::set_var("GENERIC_CACHE_STORE_URL", "memory://");
            std::env::set_var("ISSUER_URL", "https://issuer.example.com");
        }
    });

    ensure_database_initialized().await;
}

/// Ensures the user table exists; logs instead of panicking so that a test
/// asserting on a later failure still gets a useful message.
async fn ensure_database_initialized() {
    use crate::userdb::UserStore;

    if let Err(e) = UserStore::init().await {
        eprintln!("Warning: Failed to initialize UserStore: {e}");
    }
}
