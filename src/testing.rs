//! Test doubles for the transport and storage seams

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiClient, ApiRequest, ApiResponse, Transport};
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::Task;
use crate::session::{KeyValueStore, ACCESS_TOKEN_KEY};

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<ApiResponse>,
    requests: Vec<ApiRequest>,
}

/// Scripted transport: answers requests in order, records what was sent.
/// Clones share the script.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Rc<RefCell<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.script.borrow_mut().responses.push_back(ApiResponse {
            status,
            body: body.to_string(),
        });
    }

    pub fn push_json<B: serde::Serialize>(&self, status: u16, body: &B) {
        let json = serde_json::to_string(body).expect("serializable test body");
        self.push_raw(status, &json);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script.borrow().requests.clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut script = self.script.borrow_mut();
        script.requests.push(request);
        script
            .responses
            .pop_front()
            .ok_or_else(|| ApiError::Transport("no scripted response".into()))
    }
}

pub type TestClient = ApiClient<MockTransport, MemoryStorage>;

/// Client against `http://api.test`, optionally with a stored bearer token
pub fn client(transport: &MockTransport, token: Option<&str>) -> TestClient {
    let storage = MemoryStorage::default();
    if let Some(token) = token {
        storage.set(ACCESS_TOKEN_KEY, token);
    }
    let config = AppConfig::default().with_base_url("http://api.test");
    ApiClient::new(transport.clone(), storage, &config)
}

pub fn sample_task(id: u64, status: bool, priority: u8) -> Task {
    Task {
        id,
        task: format!("Task {}", id),
        description: format!("Description for task {}", id),
        priority,
        status,
        owner_id: Some(1),
    }
}
