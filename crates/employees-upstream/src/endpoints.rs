//! Upstream URL construction.

use employees_core::config::{EndpointConfig, UpstreamConfig};

/// Builds fully formed upstream URLs from the configured base and paths.
#[derive(Debug, Clone)]
pub struct EmployeeEndpoints {
    base_url: String,
    paths: EndpointConfig,
}

impl EmployeeEndpoints {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            paths: config.endpoints.clone(),
        }
    }

    pub fn list_all(&self) -> String {
        self.join(&self.paths.list_all)
    }

    pub fn get_by_id(&self, id: i64) -> String {
        self.join(&with_id(&self.paths.get_by_id, id))
    }

    pub fn create(&self) -> String {
        self.join(&self.paths.create)
    }

    pub fn delete_by_id(&self, id: i64) -> String {
        self.join(&with_id(&self.paths.delete_by_id, id))
    }

    fn join(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn with_id(template: &str, id: i64) -> String {
    template.replace("{id}", &id.to_string())
}
