//! HTTP handler functions, one module per resource.

pub mod auth;
pub mod color_code;
pub mod dashboard;
pub mod defect_event;
pub mod defect_type;
pub mod employee;
