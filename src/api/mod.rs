//! API Module
//!
//! HTTP handlers and routing for the REST API.
//!
//! # Endpoints
//! - `GET|POST /api/users`, `GET|PUT|DELETE /api/users/:id`
//! - `GET|POST /api/posts`, `GET /api/posts/:id`
//! - `POST /api/test/echo`, `GET /api/test/delay`, `POST /api/test/validate`
//! - `GET /` - static landing page

pub mod diagnostics;
pub mod extract;
pub mod posts;
pub mod routes;
pub mod state;
pub mod users;

pub use routes::{create_router, ENDPOINTS};
pub use state::AppState;
