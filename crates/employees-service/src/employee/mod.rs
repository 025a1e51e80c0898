//! Employee query, aggregation, and mutation services.

pub mod aggregate;
pub mod mutation;
pub mod query;

pub use aggregate::TOP_EARNERS_LIMIT;
pub use mutation::EmployeeMutationService;
pub use query::EmployeeQueryService;
