//! Authentication coordination module
//!
//! High-level functions that tie the external issuer, the user directory
//! and the session store together. These are the entry points the HTTP
//! layer calls; the submodules they delegate to never call each other.
//!
//! - `errors`: Error types specific to coordination operations
//! - `login`: Authorization-code completion and session issuance

mod errors;
mod login;

pub use errors::GatewayError;
pub use login::{IssuedSession, authenticate, complete_authorization, finish_login};
