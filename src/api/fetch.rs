//! Browser `fetch` transport

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::{ApiRequest, ApiResponse, Body, Transport};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn js_err(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Transport(message)
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let headers = Headers::new().map_err(js_err)?;
        if let Some(auth) = &request.authorization {
            headers.set("Authorization", auth).map_err(js_err)?;
        }

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        match &request.body {
            Body::Empty => {}
            Body::Json(json) => {
                headers.set("Content-Type", "application/json").map_err(js_err)?;
                init.set_body(&JsValue::from_str(json));
            }
            Body::Form(form) => {
                headers
                    .set("Content-Type", "application/x-www-form-urlencoded")
                    .map_err(js_err)?;
                init.set_body(&JsValue::from_str(form));
            }
        }
        init.set_headers(&headers);

        let req = Request::new_with_str_and_init(&request.url, &init).map_err(js_err)?;
        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".into()))?;

        let value = JsFuture::from(window.fetch_with_request(&req)).await.map_err(js_err)?;
        let resp: Response = value.dyn_into().map_err(js_err)?;
        let text = JsFuture::from(resp.text().map_err(js_err)?).await.map_err(js_err)?;

        Ok(ApiResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
