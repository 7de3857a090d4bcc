//! HTTP request handlers.

pub mod reimbursement_handler;

pub use reimbursement_handler::reimbursement_routes;
