//! Route definitions for the employee proxy HTTP API.
//!
//! Employee routes are mounted under `/api/v1/employee`, the health probe
//! under `/api`. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request logging.
///
/// No inbound timeout is applied: a request lasts as long as the upstream
/// retry budget, and its outcome is returned unchanged.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1/employee", employee_routes())
        .nest("/api", health_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Employee list, lookup, aggregate, create, and delete
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::employee::get_all_employees).post(handlers::employee::create_employee),
        )
        .route(
            "/search/{search_string}",
            get(handlers::employee::get_employees_by_name_search),
        )
        .route(
            "/highestSalary",
            get(handlers::employee::get_highest_salary_of_employees),
        )
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(handlers::employee::get_top_ten_highest_earning_employee_names),
        )
        .route(
            "/{id}",
            get(handlers::employee::get_employee_by_id)
                .delete(handlers::employee::delete_employee_by_id),
        )
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
