/// JSON wire types for the try-on generation endpoint
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::state::options::{AspectRatio, ShotType};

/// Response `status` value marking a completed generation
pub const SUCCESS_MARKER: &str = "success";

/// Body of the generation POST
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Base64 payload of the person image, without the data-URI prefix
    pub person_image_b64: String,
    /// Base64 payload of the garment image, without the data-URI prefix
    pub clothes_image_b64: String,
    pub shot_type: ShotType,
    pub aspect_ratio: AspectRatio,
    pub api_key: String,
}

/// Success-path response body
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    status: String,
    generated_image_b64: Option<String>,
}

/// Failure-path response body; the message is optional
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Turn a raw HTTP response into a displayable data URI or an error.
///
/// Pure over the status code and body bytes so every branch is testable
/// without a server:
/// - non-success status: the body's `message` field, falling back to the
///   status' canonical reason text
/// - success status without the success marker (or without an image):
///   `UnexpectedResponse`, so the state machine still reaches a terminal
///   state
/// - success marker: the image payload wrapped as a PNG data URI
pub fn parse_response(status: StatusCode, body: &[u8]) -> Result<String, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| status_text(status));
        return Err(ApiError::Service(message));
    }

    let response: GenerateResponse = serde_json::from_slice(body)
        .map_err(|e| ApiError::Transport(format!("Unreadable response body: {}", e)))?;

    match response.generated_image_b64 {
        Some(payload) if response.status == SUCCESS_MARKER => {
            Ok(format!("data:image/png;base64,{}", payload))
        }
        _ => Err(ApiError::UnexpectedResponse),
    }
}

/// Human-readable fallback when a failure body carries no message
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}
