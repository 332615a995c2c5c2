/// Upload panel for one image slot
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use crate::state::slot::{ImageSlot, SlotRole};
use crate::Message;

/// Render the panel for one slot: the encoded preview when available,
/// otherwise a browse prompt
pub fn upload_panel(role: SlotRole, slot: &ImageSlot) -> Element<'_, Message> {
    let mut content = column![text(role.title()).size(20)]
        .spacing(12)
        .align_x(Alignment::Center);

    match slot.preview() {
        Some(preview) => {
            content = content.push(
                image(preview.handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(220.0)),
            );
            content = content.push(
                row![
                    button("Browse...").on_press(Message::PickImage(role)).padding(8),
                    button("Clear").on_press(Message::ClearImage(role)).padding(8),
                ]
                .spacing(10),
            );
        }
        None => {
            // A path without a preview means the encode is still running
            // (or failed silently); either way there is nothing to show yet
            let prompt = if slot.path().is_some() {
                "Encoding preview..."
            } else {
                role.hint()
            };
            content = content.push(text(prompt).size(14));
            content = content.push(button("Browse...").on_press(Message::PickImage(role)).padding(8));
        }
    }

    container(content)
        .width(Length::Fill)
        .padding(20)
        .into()
}
