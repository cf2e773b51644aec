//! Backend calls made from the dashboard.

pub mod http;
pub mod log;

pub use http::{post_json, HttpError};
pub use log::{submit_entry, HttpLogClient, LogClient, LogResponse, SavedEntry, SubmitOutcome};
