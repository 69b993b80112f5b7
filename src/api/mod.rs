//! Backend API Client
//!
//! Every call to the task backend funnels through [`ApiClient`], which turns
//! HTTP failures and transport errors into a structured [`ApiError`] and
//! reports them to the user through the injected [`Notifier`].

mod fetch;
mod tasks;
mod transport;

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::dialog::Notifier;

pub use fetch::FetchTransport;
pub use tasks::*;
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// Failed API call. `Display` yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a usable response
    #[error("{message}")]
    Transport { message: String, cause: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Status { message, .. } | ApiError::Transport { message, .. } => message,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Request helper bound to one API base path
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    transport: Rc<dyn Transport>,
    notifier: Rc<dyn Notifier>,
}

impl ApiClient {
    pub fn new(base: &str, transport: Rc<dyn Transport>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            transport,
            notifier,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Call without a payload. No body and no content type are sent.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        error_message: &str,
    ) -> ApiResult<Option<T>> {
        self.dispatch(method, endpoint, None, error_message).await
    }

    /// Call with a JSON payload.
    pub async fn send<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        payload: &B,
        error_message: &str,
    ) -> ApiResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = match serde_json::to_string(payload) {
            Ok(body) => body,
            Err(err) => return Err(self.transport_failure(error_message, err.to_string())),
        };
        self.dispatch(method, endpoint, Some(body), error_message).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        error_message: &str,
    ) -> ApiResult<Option<T>> {
        let mut request = HttpRequest::new(method, format!("{}{}", self.base, endpoint));
        if let Some(body) = body {
            request = request.with_json(body);
        }
        log::debug!("[API] {} {}", method.as_str(), request.url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => return Err(self.transport_failure(error_message, err.to_string())),
        };

        if response.is_success() {
            return decode_body(&response.body)
                .map_err(|err| self.transport_failure(error_message, err.to_string()));
        }

        let detail = error_detail(&response.body).unwrap_or_else(|| error_message.to_string());
        log::warn!("[API] {} {} -> {}: {}", method.as_str(), endpoint, response.status, detail);
        self.notifier.notify(&format!("Error: {}", detail));
        Err(ApiError::Status {
            status: response.status,
            message: detail,
        })
    }

    fn transport_failure(&self, error_message: &str, cause: String) -> ApiError {
        log::error!("[API] request error: {}", cause);
        let message = format!("{}. Please try again.", error_message);
        self.notifier.notify(&message);
        ApiError::Transport { message, cause }
    }
}

/// Empty bodies decode to `None`
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body).map(Some)
}

/// Pull a human-readable `detail` out of an error body.
///
/// Plain strings are used verbatim. Validation errors arrive as a list of
/// objects carrying `msg`; those are joined.
fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let detail = match parsed.detail? {
        Value::String(text) => text,
        Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    (!detail.trim().is_empty()).then_some(detail)
}
