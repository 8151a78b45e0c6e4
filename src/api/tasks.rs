//! Task Endpoints
//!
//! CRUD against `/tasks/`. Each call is a single round trip.

use super::{json_body, ApiClient, Body, KeyValueStore, Method, Transport};
use crate::error::ApiResult;
use crate::models::{Task, TaskPayload, TaskResponse};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.send_json(Method::Get, "/tasks/", Body::Empty, "Failed to load tasks")
            .await
    }

    pub async fn create_task(&self, payload: &TaskPayload) -> ApiResult<Task> {
        let resp: TaskResponse = self
            .send_json(Method::Post, "/tasks/", json_body(payload)?, "Failed to create task")
            .await?;
        Ok(resp.into_task())
    }

    pub async fn update_task(&self, id: u64, payload: &TaskPayload) -> ApiResult<Task> {
        let path = format!("/tasks/{}", id);
        let resp: TaskResponse = self
            .send_json(Method::Put, &path, json_body(payload)?, "Failed to update task")
            .await?;
        Ok(resp.into_task())
    }

    pub async fn delete_task(&self, id: u64) -> ApiResult<()> {
        let path = format!("/tasks/{}", id);
        self.send(Method::Delete, &path, Body::Empty, "Failed to delete task")
            .await
            .map(|_| ())
    }
}
