//! Typed path parameter helpers.

use employees_core::error::AppError;
use employees_core::result::AppResult;

/// Parses an employee id from a path segment.
pub fn parse_employee_id(s: &str) -> AppResult<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("Invalid employee id: {s}")))
}
