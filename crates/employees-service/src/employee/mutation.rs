//! Write-side employee operations.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use employees_core::error::AppError;
use employees_core::result::AppResult;
use employees_core::traits::{UpstreamExecutor, UpstreamRequest};
use employees_entity::employee::first_missing_field;
use employees_entity::{ApiResponse, CreateEmployeeInput, Employee, EmployeeResponse};
use employees_upstream::EmployeeEndpoints;

/// Validates and forwards create and delete requests upstream.
#[derive(Debug, Clone)]
pub struct EmployeeMutationService {
    executor: Arc<dyn UpstreamExecutor>,
    endpoints: EmployeeEndpoints,
}

impl EmployeeMutationService {
    /// Creates a new mutation service.
    pub fn new(executor: Arc<dyn UpstreamExecutor>, endpoints: EmployeeEndpoints) -> Self {
        Self {
            executor,
            endpoints,
        }
    }

    /// Creates an employee from a loosely typed payload.
    ///
    /// `name`, `salary`, and `age` must be present and non-null. The whole
    /// payload, extra keys included, is forwarded as the request body.
    pub async fn create_employee(&self, input: CreateEmployeeInput) -> AppResult<Employee> {
        validate_create_input(&input)?;
        let name = display_name(&input);

        let response = self
            .executor
            .execute(UpstreamRequest::post(
                self.endpoints.create(),
                Value::Object(input),
            ))
            .await
            .inspect_err(|e| error!(name = %name, error = %e, "Failed to create employee"))?;

        let envelope: EmployeeResponse = response
            .json()
            .inspect_err(|e| error!(name = %name, error = %e, "Malformed create response"))?;

        let employee = envelope.data.ok_or_else(|| {
            error!(name = %name, "Failed to create employee record with given details");
            AppError::operation_failed(format!("Failed to create employee with name {name}"))
        })?;

        info!(id = employee.id, name = %employee.name, "Employee created");
        Ok(employee)
    }

    /// Deletes an employee and returns the upstream confirmation message.
    ///
    /// Existence is not checked first; the upstream may confirm deletion of
    /// an id it never had.
    pub async fn delete_employee_by_id(&self, id: i64) -> AppResult<String> {
        let response = self
            .executor
            .execute(UpstreamRequest::delete(self.endpoints.delete_by_id(id)))
            .await
            .inspect_err(|e| error!(id, error = %e, "Failed to delete employee"))?;

        if !response.status.is_success() {
            error!(id, status = response.status.as_u16(), "Delete was not accepted upstream");
            return Err(delete_failed(id));
        }

        let envelope: ApiResponse = response
            .json()
            .inspect_err(|e| error!(id, error = %e, "Malformed delete response"))?;

        if envelope.is_error() {
            error!(id, message = ?envelope.message, "Upstream reported delete failure");
            return Err(delete_failed(id));
        }

        info!(id, "Employee deleted");
        Ok(envelope.message.unwrap_or_default())
    }
}

/// Rejects a create payload missing any required field.
pub fn validate_create_input(input: &CreateEmployeeInput) -> AppResult<()> {
    match first_missing_field(input) {
        Some(field) => {
            warn!(field, "Create employee request missing mandatory field");
            Err(AppError::validation(format!("{field} field is mandatory")))
        }
        None => Ok(()),
    }
}

fn display_name(input: &CreateEmployeeInput) -> String {
    match input.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn delete_failed(id: i64) -> AppError {
    AppError::operation_failed(format!("Failed to delete employee with id {id}"))
}
