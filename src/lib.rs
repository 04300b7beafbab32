//! Demo API - A small in-memory REST server
//!
//! Serves users and posts from process memory, plus echo, delay and
//! validation endpoints for exercising HTTP clients.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use store::Store;
