//! Log entry submission against `/api/log`.

use serde::{Deserialize, Serialize};

use super::http::{post_json, HttpError};

pub const DEFAULT_LOG_ENDPOINT: &str = "/api/log";

#[derive(Debug, Clone, Serialize)]
pub struct LogRequest<'a> {
    pub entry: &'a str,
}

/// Body returned by the log endpoint. Extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub co2_saved_kg: Option<f64>,
    #[serde(default)]
    pub meta: Option<LogMeta>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogMeta {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedEntry {
    pub co2_saved_kg: f64,
    pub category: Option<String>,
}

/// What the page shows after a submission settles.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(SavedEntry),
    /// `None` means the generic fallback message.
    Failed { message: Option<String> },
}

impl LogResponse {
    pub fn into_outcome(self) -> SubmitOutcome {
        if self.ok {
            return SubmitOutcome::Saved(SavedEntry {
                co2_saved_kg: self.co2_saved_kg.unwrap_or(0.0),
                category: self
                    .meta
                    .and_then(|m| m.category)
                    .filter(|c| !c.trim().is_empty()),
            });
        }

        let message = [self.error, self.message]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty());
        SubmitOutcome::Failed { message }
    }
}

/// Sends one log entry to the backend.
#[allow(async_fn_in_trait)]
pub trait LogClient {
    async fn submit(&self, entry: &str) -> Result<LogResponse, HttpError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpLogClient {
    endpoint: String,
}

impl HttpLogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpLogClient {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_ENDPOINT)
    }
}

impl LogClient for HttpLogClient {
    async fn submit(&self, entry: &str) -> Result<LogResponse, HttpError> {
        post_json(&self.endpoint, &LogRequest { entry }).await
    }
}

/// Submit `entry` and fold every failure mode into a displayable outcome.
pub async fn submit_entry<C: LogClient + ?Sized>(client: &C, entry: &str) -> SubmitOutcome {
    match client.submit(entry).await {
        Ok(response) => {
            let outcome = response.into_outcome();
            match &outcome {
                SubmitOutcome::Saved(saved) => tracing::info!(
                    kg = saved.co2_saved_kg,
                    category = saved.category.as_deref().unwrap_or("-"),
                    "log entry saved"
                ),
                SubmitOutcome::Failed { message } => tracing::warn!(
                    reason = message.as_deref().unwrap_or("-"),
                    "log entry rejected"
                ),
            }
            outcome
        }
        Err(err) => {
            tracing::warn!("log submission failed: {err}");
            SubmitOutcome::Failed { message: None }
        }
    }
}
