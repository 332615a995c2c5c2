/// The submission state machine for the generation workflow
///
/// This is the single authoritative container for the request lifecycle.
/// Views read it; only `update` transitions it.
use crate::api::ApiError;
use crate::preview::Preview;

/// Lifecycle of one generation request
#[derive(Debug, Clone, Default)]
pub enum SubmissionState {
    /// Nothing outstanding; also the state after a dismissed failure
    #[default]
    Idle,
    /// A request is outstanding; no new submission may start
    InFlight,
    /// The service returned a generated image
    Succeeded(Preview),
    /// The request failed with a user-facing message
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }

    /// Enter `InFlight`, discarding any previous terminal result.
    /// Refused while a request is already outstanding.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = SubmissionState::InFlight;
        true
    }

    /// Record the outcome of the outstanding request.
    /// Unconditionally replaces `InFlight`, so a completed request can
    /// never leave the machine stuck there.
    pub fn finish(&mut self, outcome: Result<Preview, ApiError>) {
        *self = match outcome {
            Ok(image) => SubmissionState::Succeeded(image),
            Err(error) => SubmissionState::Failed(error.to_string()),
        };
    }

    /// Message for the failure banner, if any
    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Dismissing the failure banner returns the machine to `Idle`
    pub fn dismiss_failure(&mut self) {
        if matches!(self, SubmissionState::Failed(_)) {
            *self = SubmissionState::Idle;
        }
    }
}
