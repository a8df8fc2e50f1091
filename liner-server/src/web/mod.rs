//! Web layer: JSON API over the route-discovery engine.

pub mod dto;
mod routes;
mod state;

pub use routes::{AppError, create_router};
pub use state::AppState;
