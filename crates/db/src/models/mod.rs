//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the route
//!   supports patches

pub mod admin;
pub mod color_code;
pub mod defect_event;
pub mod defect_type;
pub mod employee;
