/// Result presenter: a pure view over the submission state
use iced::widget::{column, container, image, text};
use iced::{Alignment, Element, Length};

use crate::state::submission::SubmissionState;
use crate::Message;

/// Render the result panel for the current submission state.
/// A failure is communicated by the banner above, so `Failed` falls
/// back to the same placeholder as `Idle`.
pub fn result_panel(state: &SubmissionState) -> Element<'_, Message> {
    let content = match state {
        SubmissionState::InFlight => column![
            text("Generating your look...").size(24),
            text("The service is working; this can take a little while.").size(14),
        ],
        SubmissionState::Succeeded(generated) => column![
            text("Resulting look").size(24),
            image(generated.handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(420.0)),
        ],
        SubmissionState::Idle | SubmissionState::Failed(_) => column![
            text("Resulting look").size(24),
            text("The final render of your styled outfit will appear here.").size(14),
        ],
    };

    container(content.spacing(12).align_x(Alignment::Center))
        .width(Length::Fill)
        .padding(24)
        .into()
}
