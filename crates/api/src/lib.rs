//! REST API for the shift-tally defect tracker.
//!
//! Thin axum layer over the persistence crate: CRUD for the four
//! reference/event collections, JWT-authenticated admin accounts, and the
//! dashboard endpoint that runs the pure aggregation core over a snapshot
//! of the store.

pub mod aggregate;
pub mod auth;
pub mod background;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
