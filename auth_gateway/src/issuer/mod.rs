mod client;
mod config;
mod errors;
mod types;

pub use client::{authorize_url, forward_request};
pub(crate) use client::exchange_code;
pub use errors::IssuerError;
pub use types::ForwardedResponse;
