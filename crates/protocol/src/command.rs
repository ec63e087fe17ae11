//! Device endpoints and the commands sent to them

use std::fmt;

use crate::settings::Settings;

pub const GET_SETTINGS_PATH: &str = "/get_settings";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A state-changing request to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Push live settings without persisting them
    Update(Settings),
    Start,
    Stop,
    /// Push settings and persist them on the device
    Save(Settings),
}

impl Command {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Update(_) => "/update",
            Self::Start => "/start",
            Self::Stop => "/stop",
            Self::Save(_) => "/save",
        }
    }

    /// Form-encoded body, if the command carries settings
    pub fn body(&self) -> Option<String> {
        match self {
            Self::Update(settings) | Self::Save(settings) => Some(settings.to_form_body()),
            Self::Start | Self::Stop => None,
        }
    }

    pub const fn success_message(&self) -> &'static str {
        match self {
            Self::Update(_) => "Values updated",
            Self::Start => "Motor started",
            Self::Stop => "Motor stopped",
            Self::Save(_) => "Settings saved",
        }
    }

    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::Update(_) => "Failed to update values",
            Self::Start => "Failed to start motor",
            Self::Stop => "Failed to stop motor",
            Self::Save(_) => "Failed to save settings",
        }
    }
}

/// Transport-agnostic HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Form-encoded body; its presence implies [`FORM_CONTENT_TYPE`]
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body,
        }
    }

    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| FORM_CONTENT_TYPE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any 2xx counts as success
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_paths() {
        let settings = Settings::new(1, 2);
        assert_eq!(Command::Update(settings).path(), "/update");
        assert_eq!(Command::Start.path(), "/start");
        assert_eq!(Command::Stop.path(), "/stop");
        assert_eq!(Command::Save(settings).path(), "/save");
    }

    #[test]
    fn test_only_settings_commands_have_body() {
        let settings = Settings::new(50, 15);
        let expected = Some("rotation_speed=50&interval_time=15".to_string());
        assert_eq!(Command::Update(settings).body(), expected);
        assert_eq!(Command::Save(settings).body(), expected);
        assert_eq!(Command::Start.body(), None);
        assert_eq!(Command::Stop.body(), None);
    }

    #[test]
    fn test_content_type_follows_body() {
        assert_eq!(HttpRequest::get("/get_settings").content_type(), None);
        assert_eq!(HttpRequest::post("/start", None).content_type(), None);
        assert_eq!(
            HttpRequest::post("/save", Some("a=1".into())).content_type(),
            Some(FORM_CONTENT_TYPE)
        );
    }

    #[test]
    fn test_success_is_any_2xx() {
        assert!(HttpResponse::new(200, "OK").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
