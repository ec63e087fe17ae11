use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Headers, Request, RequestInit, Response};

use motor_panel_protocol::{HttpRequest, HttpResponse, Transport, TransportError};

/// `window.fetch` transport. No timeout, no retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        fetch(&request)
            .await
            .map_err(|e| TransportError::new(describe_js_error(&e)))
    }
}

async fn fetch(request: &HttpRequest) -> Result<HttpResponse, JsValue> {
    let win = window().ok_or("No window")?;

    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    if let (Some(body), Some(content_type)) = (&request.body, request.content_type()) {
        let headers = Headers::new()?;
        headers.set("Content-Type", content_type)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));
    }

    let req = Request::new_with_str_and_init(&request.url, &init)?;
    let resp_val = JsFuture::from(win.fetch_with_request(&req)).await?;
    let resp: Response = resp_val.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;

    Ok(HttpResponse::new(
        resp.status(),
        text.as_string().unwrap_or_default(),
    ))
}

/// Best-effort message for a rejected JS promise (usually a `TypeError`)
fn describe_js_error(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>().map_or_else(
        || err.as_string().unwrap_or_else(|| format!("{err:?}")),
        |e| String::from(e.message()),
    )
}
