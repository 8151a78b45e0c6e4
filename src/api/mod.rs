//! REST Client
//!
//! Thin wrappers over the backend's `/tasks` and `/users` routes,
//! organized by resource. The HTTP layer sits behind [`Transport`] so the
//! browser `fetch` implementation can be swapped for a double in tests.

mod fetch;
mod tasks;
mod users;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::{self, KeyValueStore};

pub use fetch::FetchTransport;

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    /// Serialized JSON, sent as `application/json`
    Json(String),
    /// Encoded pairs, sent as `application/x-www-form-urlencoded`
    Form(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Body,
    /// Full `Authorization` header value, if a credential is stored
    pub authorization: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Message for a failed response: the body's `detail`, else `fallback`
    pub fn error_message(&self, fallback: &str) -> String {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&self.body) else {
            return fallback.to_string();
        };
        match value.get("detail") {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => detail.clone(),
            // Request-validation errors carry a list of { msg, ... }
            Some(serde_json::Value::Array(items)) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if msgs.is_empty() {
                    fallback.to_string()
                } else {
                    msgs.join("; ")
                }
            }
            _ => fallback.to_string(),
        }
    }
}

/// One request, one response. No retries, no timeout beyond the platform's.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

// ========================
// Client
// ========================

/// Backend client. Reads the stored credential on every call.
#[derive(Debug, Clone)]
pub struct ApiClient<T, S> {
    transport: T,
    storage: S,
    base_url: String,
}

/// Client wired to `fetch` and `localStorage`
pub type BrowserClient = ApiClient<FetchTransport, session::BrowserStorage>;

impl BrowserClient {
    pub fn browser(config: &AppConfig) -> Self {
        ApiClient::new(FetchTransport, session::BrowserStorage, config)
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, storage: S, config: &AppConfig) -> Self {
        Self {
            transport,
            storage,
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn request(&self, method: Method, path: &str, body: Body) -> ApiRequest {
        ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            body,
            authorization: session::load_credential(&self.storage).map(|c| c.header_value()),
        }
    }

    /// Send and turn non-2xx responses into [`ApiError::Status`]
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Body,
        fallback: &str,
    ) -> ApiResult<ApiResponse> {
        let request = self.request(method, path, body);
        log::debug!("{} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
            e
        })?;

        if response.is_success() {
            Ok(response)
        } else {
            let message = response.error_message(fallback);
            log::warn!("{} {} -> {}: {}", method.as_str(), path, response.status, message);
            Err(ApiError::Status {
                status: response.status,
                message,
            })
        }
    }

    async fn send_json<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Body,
        fallback: &str,
    ) -> ApiResult<R> {
        let response = self.send(method, path, body, fallback).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn json_body<B: serde::Serialize>(body: &B) -> ApiResult<Body> {
    serde_json::to_string(body)
        .map(Body::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
