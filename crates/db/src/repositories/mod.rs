//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod color_code_repo;
pub mod defect_event_repo;
pub mod defect_type_repo;
pub mod employee_repo;

pub use admin_repo::AdminRepo;
pub use color_code_repo::ColorCodeRepo;
pub use defect_event_repo::DefectEventRepo;
pub use defect_type_repo::DefectTypeRepo;
pub use employee_repo::EmployeeRepo;
