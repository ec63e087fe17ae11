//! HTTP client for the device's control endpoints.
//!
//! The client is generic over a [`Transport`] so the same request logic runs
//! in the browser (fetch) and natively (reqwest).

use async_trait::async_trait;

use crate::command::{Command, HttpRequest, HttpResponse, GET_SETTINGS_PATH};
use crate::error::{PanelError, TransportError};
use crate::settings::Settings;

/// Performs a single HTTP exchange.
///
/// `?Send` because browser futures hold `JsValue`s.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Client for the device's settings and motor endpoints
#[derive(Debug, Clone)]
pub struct PanelClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> PanelClient<T> {
    /// Create a client pointing to the given base URL (e.g. `http://192.168.4.1`)
    pub fn new(transport: T, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    /// Client for a page served by the device itself; paths stay relative
    pub fn same_origin(transport: T) -> Self {
        Self::new(transport, "")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /get_settings`
    pub async fn fetch_settings(&self) -> Result<Settings, PanelError> {
        let response = self
            .transport
            .execute(HttpRequest::get(self.url(GET_SETTINGS_PATH)))
            .await?;

        if !response.is_success() {
            return Err(PanelError::Status {
                status: response.status,
                path: GET_SETTINGS_PATH,
            });
        }

        Ok(Settings::from_json(&response.body)?)
    }

    /// Send one command; exactly one request per call, no retry
    pub async fn send(&self, command: &Command) -> Result<(), PanelError> {
        let request = HttpRequest::post(self.url(command.path()), command.body());
        let response = self.transport.execute(request).await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(PanelError::Status {
                status: response.status,
                path: command.path(),
            })
        }
    }
}
