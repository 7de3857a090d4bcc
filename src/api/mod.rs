//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Reimbursement handlers
//! - Authentication middleware
//! - Custom extractors (validated JSON, current account)
//! - Entity alert headers
//! - Route definitions

pub mod alerts;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
