//! Canned upstream responses for service tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use employees_core::config::UpstreamConfig;
use employees_core::result::AppResult;
use employees_core::traits::{StatusCode, UpstreamExecutor, UpstreamRequest, UpstreamResponse};
use employees_entity::Employee;
use employees_upstream::EmployeeEndpoints;

pub const BASE_URL: &str = "http://upstream.test/api/v1";

/// Replays queued responses in order and records every request.
#[derive(Debug, Default)]
pub struct StubExecutor {
    responses: Mutex<VecDeque<AppResult<UpstreamResponse>>>,
    requests: Mutex<Vec<UpstreamRequest>>,
}

impl StubExecutor {
    pub fn replying(responses: Vec<AppResult<UpstreamResponse>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::default(),
        }
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamExecutor for StubExecutor {
    async fn execute(&self, request: UpstreamRequest) -> AppResult<UpstreamResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned upstream response left")
    }
}

pub fn endpoints() -> EmployeeEndpoints {
    EmployeeEndpoints::new(&UpstreamConfig {
        base_url: BASE_URL.to_string(),
        ..UpstreamConfig::default()
    })
}

pub fn employee(id: i64, name: &str, salary: i64) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        salary,
        age: 30,
        profile_image: Some(String::new()),
    }
}

pub fn ok(body: Value) -> AppResult<UpstreamResponse> {
    Ok(UpstreamResponse {
        status: StatusCode::OK,
        body: body.to_string(),
    })
}

pub fn list_body(employees: &[Employee]) -> Value {
    json!({
        "status": "success",
        "data": employees,
        "message": "Successfully! All records has been fetched.",
    })
}
