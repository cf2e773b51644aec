//! Minimal JSON-over-HTTP helper.
//!
//! One POST, one parsed body. No retries, no timeout, no cancellation, and
//! the HTTP status is never inspected: callers read the body's own success
//! flag.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("response was not valid JSON: {0}")]
    Decode(String),
}

/// POST `body` as JSON to `url` and parse the JSON response.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B, R>(url: &str, body: &B) -> Result<R, HttpError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    use gloo_net::http::Request;

    let request = Request::post(url)
        .json(body)
        .map_err(|err| HttpError::Encode(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| HttpError::Transport(err.to_string()))?;

    tracing::debug!(url, status = response.status(), "POST completed");

    response
        .json::<R>()
        .await
        .map_err(|err| HttpError::Decode(err.to_string()))
}

/// Native builds have no page origin to resolve relative endpoints against.
#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json<B, R>(url: &str, body: &B) -> Result<R, HttpError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    serde_json::to_vec(body).map_err(|err| HttpError::Encode(err.to_string()))?;
    Err(HttpError::Transport(format!(
        "fetch is unavailable outside the browser (POST {url})"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn native_post_reports_transport_failure() {
        let result: Result<Value, _> =
            futures::executor::block_on(post_json("/api/log", &json!({ "entry": "walked" })));
        assert!(matches!(result, Err(HttpError::Transport(_))));
    }

    #[test]
    fn errors_render_their_cause() {
        let err = HttpError::Decode("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "response was not valid JSON: expected value at line 1"
        );
    }
}
