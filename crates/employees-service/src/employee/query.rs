//! Read-side employee operations.

use std::sync::Arc;

use tracing::{error, info};

use employees_core::error::AppError;
use employees_core::result::AppResult;
use employees_core::traits::{UpstreamExecutor, UpstreamRequest};
use employees_entity::{Employee, EmployeeListResponse, EmployeeResponse};
use employees_upstream::EmployeeEndpoints;

use super::aggregate::{self, TOP_EARNERS_LIMIT};

/// Fetches employees from upstream and answers list, lookup, and
/// aggregate queries.
#[derive(Debug, Clone)]
pub struct EmployeeQueryService {
    /// Outbound executor.
    executor: Arc<dyn UpstreamExecutor>,
    /// Upstream URL builder.
    endpoints: EmployeeEndpoints,
}

impl EmployeeQueryService {
    /// Creates a new query service.
    pub fn new(executor: Arc<dyn UpstreamExecutor>, endpoints: EmployeeEndpoints) -> Self {
        Self {
            executor,
            endpoints,
        }
    }

    /// Every employee known upstream.
    pub async fn get_all_employees(&self) -> AppResult<Vec<Employee>> {
        self.fetch_employee_list().await?.ok_or_else(|| {
            error!("Upstream returned no employee list");
            AppError::operation_failed("Failed to get all employees")
        })
    }

    /// Employees whose name contains `search` (case-sensitive).
    pub async fn get_employees_by_name_search(&self, search: &str) -> AppResult<Vec<Employee>> {
        let employees = self.fetch_employee_list().await?.ok_or_else(|| {
            error!(search, "Failed to get employee list to get employees by name search");
            AppError::operation_failed(format!("Failed to search employees by name '{search}'"))
        })?;

        Ok(aggregate::search_by_name(employees, search))
    }

    /// A single employee, or `NotFound` when upstream has no payload for `id`.
    pub async fn get_employee_by_id(&self, id: i64) -> AppResult<Employee> {
        let response = self
            .executor
            .execute(UpstreamRequest::get(self.endpoints.get_by_id(id)))
            .await
            .inspect_err(|e| error!(id, error = %e, "Failed to get employee"))?;

        let envelope: EmployeeResponse = response
            .json()
            .inspect_err(|e| error!(id, error = %e, "Malformed employee response"))?;

        envelope.data.ok_or_else(|| {
            error!(id, "Employee not found");
            AppError::not_found(format!("Employee not found with id {id}"))
        })
    }

    /// Highest salary across all employees.
    ///
    /// An empty list has no maximum and fails with `OperationFailed`.
    pub async fn get_highest_salary_of_employees(&self) -> AppResult<i64> {
        let employees = self.fetch_employee_list().await?.ok_or_else(|| {
            error!("Failed to get employee list to calculate highest salary of employee");
            AppError::operation_failed("Failed to calculate highest salary of employees")
        })?;

        aggregate::max_salary(&employees).ok_or_else(|| {
            error!("Cannot calculate highest salary of an empty employee list");
            AppError::operation_failed(
                "Failed to calculate highest salary of employees: no employees available",
            )
        })
    }

    /// Names of the ten best-paid employees, highest salary first.
    pub async fn get_top_ten_highest_earning_employee_names(&self) -> AppResult<Vec<String>> {
        let employees = self.fetch_employee_list().await?.ok_or_else(|| {
            error!("Failed to get employee list to calculate top ten highest earning employees");
            AppError::operation_failed("Failed to get top ten highest earning employee names")
        })?;

        let names = aggregate::top_earner_names(employees, TOP_EARNERS_LIMIT);
        info!(limit = TOP_EARNERS_LIMIT, ?names, "Top earning employee names");
        Ok(names)
    }

    /// The list payload, or `None` when the envelope carried no data.
    async fn fetch_employee_list(&self) -> AppResult<Option<Vec<Employee>>> {
        let response = self
            .executor
            .execute(UpstreamRequest::get(self.endpoints.list_all()))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to get all employee list"))?;

        let envelope: EmployeeListResponse = response
            .json()
            .inspect_err(|e| error!(error = %e, "Malformed employee list response"))?;

        Ok(envelope.data)
    }
}
