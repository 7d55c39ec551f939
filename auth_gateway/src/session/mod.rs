mod config;
mod errors;
mod store;
mod types;

pub use config::AUTH_TOKEN_COOKIE_NAME;
pub use errors::SessionError;
pub use store::{create_session, lookup_session};
pub use types::StoredSession;
