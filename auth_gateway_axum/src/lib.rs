//! auth-gateway-axum - Axum HTTP surface for the edge auth gateway
//!
//! Mounts the gateway endpoints (`/`, `/callback`, `/verify`, `/me`) with a
//! fallback that forwards anything else to the external issuer. CORS for the
//! configured front-end origin and HTTP tracing are applied at the router.

mod error;
mod gateway;
mod router;
mod session;

#[cfg(test)]
mod test_utils;

pub use error::{ErrorResponse, IntoResponseError};
pub use router::{auth_gateway_router, auth_gateway_router_no_trace};
pub use session::AuthToken;

// Re-export the pieces an embedding application needs from the core crate
pub use auth_gateway::{GatewayConfig, init};
