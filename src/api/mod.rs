//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod paths;
pub mod router;
pub mod state;
pub mod types;
pub mod v1;

#[cfg(test)]
pub(crate) mod test_support;

pub use router::{create_router, create_router_with_metrics};
pub use state::AppState;
