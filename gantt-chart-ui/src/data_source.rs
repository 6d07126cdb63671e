//! Fetches chart rows from the remote endpoint with the browser's `fetch`.
//!
//! One request per call: no retry, no caching.

use gantt_core::chart_row::{decode_rows, ChartRow};
use gantt_core::error::{ChartError, Result};
use gantt_core::source::ChartSource;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Best-effort message from a rejected JS promise.
fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// GET the source URL and return the response body.
pub async fn fetch_text(source: &ChartSource) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| ChartError::Fetch("no browser window".into()))?;

    let response = JsFuture::from(window.fetch_with_str(&source.url))
        .await
        .map_err(|e| ChartError::Fetch(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ChartError::Fetch("fetch did not resolve to a Response".into()))?;

    source.check_status(response.status())?;

    let body = response
        .text()
        .map_err(|e| ChartError::Fetch(js_error_message(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| ChartError::Fetch(js_error_message(&e)))?;
    body.as_string()
        .ok_or_else(|| ChartError::Decode("response body is not text".into()))
}

/// Fetch and decode the chart rows.
pub async fn fetch_rows(source: &ChartSource) -> Result<Vec<ChartRow>> {
    log::info!("fetching chart rows from {}", source.url);
    let body = fetch_text(source).await?;
    let rows = decode_rows(&body)?;
    log::info!("fetched {} chart rows", rows.len());
    Ok(rows)
}
