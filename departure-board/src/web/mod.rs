//! Web layer for the departure board.
//!
//! Serves the board as an HTML page and as two JSON endpoints.

mod routes;
mod state;
pub mod templates;

pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
