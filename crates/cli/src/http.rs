//! Native transport over reqwest

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use motor_panel_protocol::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// reqwest-backed transport. Like the browser panel it sets no timeout.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if let (Some(content_type), Some(body)) = (request.content_type(), request.body) {
            builder = builder.header(CONTENT_TYPE, content_type).body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("failed to read response: {e}")))?;

        debug!(status, "response received");
        Ok(HttpResponse::new(status, body))
    }
}
