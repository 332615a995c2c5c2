/// HTTP client for the remote generation service
use super::types::{parse_response, GenerateRequest};
use super::ApiError;

/// Path of the try-on endpoint under the configured base URL
const GENERATE_PATH: &str = "/v1/tryon";

/// Environment variable overriding the service base URL
const BASE_URL_ENV: &str = "TRYON_API_BASE";

/// Base URL used when no override is configured
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Shared reqwest client plus the base URL resolved at startup
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Resolve the base URL from the environment and build the client
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Client::new(base_url)
    }

    pub fn new(base_url: String) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the try-on endpoint
    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), GENERATE_PATH)
    }

    /// Send one generation request and wait for its outcome.
    /// A single attempt: no retry, no client-imposed timeout.
    pub async fn generate(&self, request: GenerateRequest) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        parse_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_fixed_path() {
        let client = Client::new("http://localhost:8000".to_string());
        assert_eq!(client.endpoint(), "http://localhost:8000/v1/tryon");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = Client::new("http://localhost:8000/".to_string());
        assert_eq!(client.endpoint(), "http://localhost:8000/v1/tryon");
    }
}
