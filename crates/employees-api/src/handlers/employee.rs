//! Employee handlers.
//!
//! Each handler delegates to a service and returns its result unchanged;
//! errors render through [`ApiError`].

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use employees_core::error::AppError;
use employees_entity::{CreateEmployeeInput, Employee};

use crate::error::ApiError;
use crate::extractors::parse_employee_id;
use crate::state::AppState;

/// GET /api/v1/employee
pub async fn get_all_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    info!("Received request to get all employees");
    let employees = state.query_service.get_all_employees().await?;
    Ok(Json(employees))
}

/// GET /api/v1/employee/search/{search_string}
pub async fn get_employees_by_name_search(
    State(state): State<AppState>,
    Path(search_string): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    info!(search = %search_string, "Received request to search employees by name");
    let employees = state
        .query_service
        .get_employees_by_name_search(&search_string)
        .await?;
    Ok(Json(employees))
}

/// GET /api/v1/employee/{id}
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_employee_id(&id)?;
    info!(id, "Received request to get employee by id");
    let employee = state.query_service.get_employee_by_id(id).await?;
    Ok(Json(employee))
}

/// GET /api/v1/employee/highestSalary
pub async fn get_highest_salary_of_employees(
    State(state): State<AppState>,
) -> Result<Json<i64>, ApiError> {
    info!("Received request to get highest salary of employees");
    let salary = state.query_service.get_highest_salary_of_employees().await?;
    Ok(Json(salary))
}

/// GET /api/v1/employee/topTenHighestEarningEmployeeNames
pub async fn get_top_ten_highest_earning_employee_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    info!("Received request to get top ten highest earning employee names");
    let names = state
        .query_service
        .get_top_ten_highest_earning_employee_names()
        .await?;
    Ok(Json(names))
}

/// POST /api/v1/employee
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        AppError::validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    info!("Received request to create employee");
    let employee = state.mutation_service.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// DELETE /api/v1/employee/{id}
pub async fn delete_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id = parse_employee_id(&id)?;
    info!(id, "Received request to delete employee by id");
    let message = state.mutation_service.delete_employee_by_id(id).await?;
    Ok(message)
}
