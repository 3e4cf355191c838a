//! Admin API errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Response arrived but the status is outside 2xx
    #[error("{status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// The request threw an `Error` (network failure, aborted fetch, ...)
    #[error("{0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("{0}")]
    Decode(String),

    /// Something that is not an `Error` object was thrown
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// Text shown to the administrator when a delete request fails
    pub fn delete_alert_message(&self) -> String {
        match self {
            ApiError::Unexpected(detail) => format!("An unexpected error occurred\n{}", detail),
            other => format!("DELETE request for the post failed\n{}", other),
        }
    }
}

/// A thrown JS value that is not an `Error` object
#[derive(Debug, Clone, PartialEq)]
pub enum ThrownValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
    /// Objects, symbols, bigints: the result of `String(value)` when it succeeded
    Other(Option<String>),
}

impl ThrownValue {
    /// JavaScript `String(value)` form
    pub fn to_js_string(&self) -> String {
        match self {
            ThrownValue::Str(s) => s.clone(),
            ThrownValue::Number(n) => js_number_string(*n),
            ThrownValue::Bool(b) => b.to_string(),
            ThrownValue::Null => "null".to_string(),
            ThrownValue::Undefined => "undefined".to_string(),
            ThrownValue::Other(Some(text)) => text.clone(),
            ThrownValue::Other(None) => "[object Object]".to_string(),
        }
    }
}

impl From<ThrownValue> for ApiError {
    fn from(value: ThrownValue) -> Self {
        ApiError::Unexpected(value.to_js_string())
    }
}

fn js_number_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    n.to_string()
}
