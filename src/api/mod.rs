/// Remote generation service client module
///
/// This module handles:
/// - JSON wire types and response parsing for the try-on endpoint (types.rs)
/// - The reqwest client performing the single POST (client.rs)
///
/// The service itself is a black box: one request per submission, no
/// retries, no cancellation.

pub mod client;
pub mod types;

pub use client::Client;

use thiserror::Error;

/// Failures surfaced by a generation request
///
/// `Clone` because the error rides inside an iced message back to the
/// update loop. The `Service` display is the service's message verbatim,
/// since that is exactly what the failure banner should show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service rejected the request with a non-success status
    #[error("{0}")]
    Service(String),
    /// The request never completed cleanly (network, body read, bad JSON)
    #[error("Request failed: {0}")]
    Transport(String),
    /// HTTP success without the expected success marker in the body
    #[error("The service returned an unexpected response")]
    UnexpectedResponse,
}
