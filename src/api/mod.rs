//! Admin API Bindings
//!
//! `fetch` wrappers for the admin REST endpoints, organized by resource.

mod posts;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

use crate::error::{ApiError, ApiResult, ThrownValue};

pub use posts::*;

impl ApiError {
    /// Convert a thrown JS value: `Error` objects keep their message,
    /// anything else is stringified.
    pub fn from_js(value: JsValue) -> Self {
        match value.dyn_ref::<js_sys::Error>() {
            Some(err) => ApiError::Transport(String::from(err.message())),
            None => ThrownValue::from_js(&value).into(),
        }
    }
}

impl ThrownValue {
    fn from_js(value: &JsValue) -> Self {
        if let Some(s) = value.as_string() {
            ThrownValue::Str(s)
        } else if let Some(n) = value.as_f64() {
            ThrownValue::Number(n)
        } else if let Some(b) = value.as_bool() {
            ThrownValue::Bool(b)
        } else if value.is_null() {
            ThrownValue::Null
        } else if value.is_undefined() {
            ThrownValue::Undefined
        } else {
            ThrownValue::Other(js_string(value))
        }
    }
}

/// Call the global `String` function on `value`
fn js_string(value: &JsValue) -> Option<String> {
    let ctor = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("String")).ok()?;
    let string_fn: js_sys::Function = ctor.dyn_into().ok()?;
    string_fn.call1(&JsValue::UNDEFINED, value).ok()?.as_string()
}

/// Send a request with `cache: "no-store"` and fail on non-2xx statuses.
async fn fetch(method: &str, url: &str) -> ApiResult<Response> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::from_js)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Unexpected("no window".to_string()))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?;
    let response: Response = value.dyn_into().map_err(ApiError::from_js)?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    Ok(response)
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
    let promise = response.json().map_err(ApiError::from_js)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::from_js)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
