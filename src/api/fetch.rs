//! Browser Fetch Transport
//!
//! `Transport` implementation on top of `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());

        if !request.headers.is_empty() {
            let headers = Headers::new().map_err(network)?;
            for (name, value) in &request.headers {
                headers.set(name, value).map_err(network)?;
            }
            init.set_headers(&headers);
        }
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.url, &init).map_err(network)?;
        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("no window available".to_string()))?;

        let value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(network)?;
        let response: Response = value.dyn_into().map_err(network)?;
        let status = response.status();

        let text = response.text().map_err(body)?;
        let text = JsFuture::from(text).await.map_err(body)?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network(value: JsValue) -> TransportError {
    TransportError::Network(describe(value))
}

fn body(value: JsValue) -> TransportError {
    TransportError::Body(describe(value))
}
