//! Scripted in-memory transport for tests

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::client::Transport;
use crate::command::{HttpRequest, HttpResponse};
use crate::error::TransportError;

/// Records every request and replays queued outcomes in order.
///
/// When the queue is empty it answers `200 OK`.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: RefCell<Vec<HttpRequest>>,
    outcomes: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.outcomes
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn push_error(&self, message: &str) {
        self.outcomes
            .borrow_mut()
            .push_back(Err(TransportError::new(message)));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Paths of all recorded requests, in order
    pub fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "OK")))
    }
}
