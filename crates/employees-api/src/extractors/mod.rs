//! Custom Axum extractors.

pub mod path;

pub use path::parse_employee_id;
