//! Route handlers organized by domain.

pub mod employee;
pub mod health;
