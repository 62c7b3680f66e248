//! `Authorization: ApiKey <token>` header extraction and the axum service around it.
//!
//! The pure part lives in [`services::auth::get_api_key`]; everything else wires it into HTTP.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
