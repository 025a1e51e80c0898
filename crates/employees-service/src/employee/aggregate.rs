//! In-memory operations over a fetched employee list.
//!
//! Every function takes or borrows a per-call list; nothing is shared.

use employees_entity::Employee;

/// Number of names returned by the top-earners query.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Employees whose name contains `query` (case-sensitive). An empty query
/// matches everyone.
pub fn search_by_name(employees: Vec<Employee>, query: &str) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee| employee.name.contains(query))
        .collect()
}

/// Highest salary, or `None` for an empty list.
pub fn max_salary(employees: &[Employee]) -> Option<i64> {
    employees.iter().map(|employee| employee.salary).max()
}

/// Names of the `limit` best-paid employees, highest salary first.
///
/// The sort is stable, so equal salaries keep their upstream order.
pub fn top_earner_names(mut employees: Vec<Employee>, limit: usize) -> Vec<String> {
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees
        .into_iter()
        .take(limit)
        .map(|employee| employee.name)
        .collect()
}
