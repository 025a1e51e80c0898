//! Employee domain entities.

pub mod input;
pub mod model;

pub use input::{CreateEmployeeInput, REQUIRED_CREATE_FIELDS, first_missing_field};
pub use model::Employee;
