//! Integration tests for the employee routes.

mod helpers;

use http::{Method, StatusCode};
use serde_json::json;

use employees_core::error::AppError;
use employees_core::traits::UpstreamResponse;
use employees_entity::Employee;
use helpers::{TestApp, UPSTREAM, employee, list_envelope};

fn staff() -> Vec<Employee> {
    vec![
        employee(1, "Tiger Nixon", 320800),
        employee(2, "Garrett Winters", 170750),
        employee(3, "Ashton Cox", 86000),
        employee(4, "Cedric Kelly", 433060),
    ]
}

fn names(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|e| e["employee_name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_all_employees() {
    let app = TestApp::new();
    app.upstream
        .on_json(Method::GET, "/employees", list_envelope(&staff()));

    let response = app.request("GET", "/api/v1/employee", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let list = response.body.as_array().unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[0]["employee_name"], "Tiger Nixon");
    assert_eq!(list[0]["employee_salary"], 320800);
}

#[tokio::test]
async fn test_search_by_name_fragment() {
    let app = TestApp::new();
    app.upstream
        .on_json(Method::GET, "/employees", list_envelope(&staff()));

    let response = app.request("GET", "/api/v1/employee/search/er", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body), vec!["Tiger Nixon", "Garrett Winters"]);
}

#[tokio::test]
async fn test_search_is_case_sensitive() {
    let app = TestApp::new();
    app.upstream
        .on_json(Method::GET, "/employees", list_envelope(&staff()));

    let response = app.request("GET", "/api/v1/employee/search/tiger", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(names(&response.body).is_empty());
}

#[tokio::test]
async fn test_get_employee_by_id() {
    let app = TestApp::new();
    app.upstream.on_json(
        Method::GET,
        "/employee/3",
        json!({"status": "success", "data": employee(3, "Ashton Cox", 86000)}),
    );

    let response = app.request("GET", "/api/v1/employee/3", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 3);
    assert_eq!(response.body["employee_name"], "Ashton Cox");
}

#[tokio::test]
async fn test_get_missing_employee_is_not_found() {
    let app = TestApp::new();
    app.upstream.on_json(
        Method::GET,
        "/employee/404",
        json!({"status": "success", "data": null}),
    );

    let response = app.request("GET", "/api/v1/employee/404", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_integer_id_is_rejected_without_upstream_call() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/employee/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(app.upstream.calls().is_empty());
}

#[tokio::test]
async fn test_highest_salary() {
    let app = TestApp::new();
    app.upstream
        .on_json(Method::GET, "/employees", list_envelope(&staff()));

    let response = app.request("GET", "/api/v1/employee/highestSalary", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(433060));
}

#[tokio::test]
async fn test_highest_salary_of_empty_list_fails() {
    let app = TestApp::new();
    app.upstream
        .on_json(Method::GET, "/employees", list_envelope(&[]));

    let response = app.request("GET", "/api/v1/employee/highestSalary", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "OPERATION_FAILED");
}

#[tokio::test]
async fn test_top_ten_highest_earning_names() {
    let app = TestApp::new();
    let many: Vec<Employee> = (1..=12)
        .map(|i| employee(i, &format!("Employee {i}"), i * 1000))
        .collect();
    app.upstream
        .on_json(Method::GET, "/employees", list_envelope(&many));

    let response = app
        .request("GET", "/api/v1/employee/topTenHighestEarningEmployeeNames", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let expected: Vec<String> = (3..=12).rev().map(|i| format!("Employee {i}")).collect();
    assert_eq!(response.body, json!(expected));
}

#[tokio::test]
async fn test_create_employee() {
    let app = TestApp::new();
    app.upstream.on_json(
        Method::POST,
        "/create",
        json!({
            "status": "success",
            "data": {"name": "test", "salary": "123", "age": "23", "id": 25},
        }),
    );

    let response = app
        .request(
            "POST",
            "/api/v1/employee",
            Some(json!({"name": "test", "salary": "123", "age": "23"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["id"], 25);
    assert_eq!(response.body["employee_name"], "test");
    assert_eq!(response.body["employee_salary"], 123);

    let calls = app.upstream.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].url, format!("{UPSTREAM}/create"));
    assert_eq!(calls[0].body.as_ref().unwrap()["name"], "test");
}

#[tokio::test]
async fn test_create_missing_field_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/employee",
            Some(json!({"salary": 5000, "age": 30})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().unwrap().contains("name"));
    assert!(app.upstream.calls().is_empty());
}

#[tokio::test]
async fn test_create_with_non_object_body_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/v1/employee", Some(json!(["name", "salary"])))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_employee_returns_plain_message() {
    let app = TestApp::new();
    app.upstream.on_json(
        Method::DELETE,
        "/delete/2",
        json!({
            "status": "success",
            "data": "2",
            "message": "Successfully! Record has been deleted",
        }),
    );

    let response = app.request("DELETE", "/api/v1/employee/2", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.starts_with("text/plain"));
    assert_eq!(response.text, "Successfully! Record has been deleted");
}

#[tokio::test]
async fn test_delete_reported_as_error_upstream() {
    let app = TestApp::new();
    app.upstream.on_json(
        Method::DELETE,
        "/delete/2",
        json!({"status": "error", "message": "Not found"}),
    );

    let response = app.request("DELETE", "/api/v1/employee/2", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "OPERATION_FAILED");
}

#[tokio::test]
async fn test_upstream_rate_limit_surfaces_as_429() {
    let app = TestApp::new();
    app.upstream.on(
        Method::GET,
        "/employees",
        Err(AppError::rate_limited("Upstream rate limit hit")),
    );

    let response = app.request("GET", "/api/v1/employee", None).await;

    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.body["error"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let app = TestApp::new();
    app.upstream.on(
        Method::GET,
        "/employees",
        Err(AppError::external_service("Upstream returned 500")),
    );

    let response = app.request("GET", "/api/v1/employee/highestSalary", None).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["error"], "EXTERNAL_SERVICE_ERROR");
}

#[tokio::test]
async fn test_malformed_upstream_body_is_bad_gateway() {
    let app = TestApp::new();
    app.upstream.on(
        Method::GET,
        "/employees",
        Ok(UpstreamResponse {
            status: StatusCode::OK,
            body: "<html>not json</html>".to_string(),
        }),
    );

    let response = app.request("GET", "/api/v1/employee", None).await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
}
