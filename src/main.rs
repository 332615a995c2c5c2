use iced::widget::{button, column, radio, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;

// Declare the application modules
mod api;
mod preview;
mod state;
mod ui;

use api::types::GenerateRequest;
use api::ApiError;
use preview::{base64_payload, encode_preview, Preview};
use state::options::{AspectRatio, ShotType, StyleOptions};
use state::slot::{ImageSlot, SlotRole};
use state::submission::SubmissionState;

/// Id of the main scrollable, used to snap toward the result panel
/// when a submission starts
fn result_scroll_id() -> scrollable::Id {
    scrollable::Id::new("result")
}

/// Main application state
struct TryOnStudio {
    /// Upload slot for the person photo
    person: ImageSlot,
    /// Upload slot for the garment photo
    garment: ImageSlot,
    /// Styling options for the next request
    options: StyleOptions,
    /// API key typed by the user; held in memory only, never logged
    api_key: String,
    /// The authoritative submission state machine
    submission: SubmissionState,
    /// Status message to display to the user
    status: String,
    /// Shared HTTP client with the base URL resolved at startup
    client: api::Client,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the API key field
    ApiKeyChanged(String),
    /// User clicked browse for one of the slots
    PickImage(SlotRole),
    /// User cleared one of the slots
    ClearImage(SlotRole),
    /// A background preview encode finished for (role, sequence token)
    PreviewReady(SlotRole, u64, Result<Preview, String>),
    /// User picked an output aspect ratio
    AspectRatioPicked(AspectRatio),
    /// User picked a shot framing
    ShotTypePicked(ShotType),
    /// User clicked the submit button
    Submit,
    /// The generation request completed, success or failure
    GenerationFinished(Result<Preview, ApiError>),
    /// User dismissed the failure banner
    DismissNotice,
}

impl TryOnStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let client = api::Client::from_env();
        println!("👗 Try-On Studio ready. Service base: {}", client.base_url());

        (
            TryOnStudio {
                person: ImageSlot::default(),
                garment: ImageSlot::default(),
                options: StyleOptions::default(),
                api_key: String::new(),
                submission: SubmissionState::default(),
                status: String::from("Pick a person photo and a garment photo to begin."),
                client,
            },
            Task::none(),
        )
    }

    fn slot_mut(&mut self, role: SlotRole) -> &mut ImageSlot {
        match role {
            SlotRole::Person => &mut self.person,
            SlotRole::Garment => &mut self.garment,
        }
    }

    /// Submit eligibility: both previews encoded (not merely files picked),
    /// a key entered, and no request outstanding
    fn can_submit(&self) -> bool {
        self.person.is_ready()
            && self.garment.is_ready()
            && !self.api_key.trim().is_empty()
            && !self.submission.is_in_flight()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ApiKeyChanged(value) => {
                self.api_key = value;
                Task::none()
            }

            Message::PickImage(role) => {
                // Native picker, filtered to image extensions at UI level only
                let picked = FileDialog::new()
                    .set_title(role.title())
                    .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                    .pick_file();

                if let Some(path) = picked {
                    let token = self.slot_mut(role).select(path.clone());
                    self.status = format!("Encoding {}...", path.display());

                    // Launch the async encode, tagged so a stale completion
                    // is dropped if the user re-selects quickly
                    return Task::perform(encode_preview(path), move |result| {
                        Message::PreviewReady(role, token, result)
                    });
                }

                Task::none()
            }

            Message::ClearImage(role) => {
                self.slot_mut(role).clear();
                Task::none()
            }

            Message::PreviewReady(role, token, Ok(preview)) => {
                self.slot_mut(role).preview_ready(token, preview);
                self.status = if self.person.is_ready() && self.garment.is_ready() {
                    String::from("Both images ready. Enter your API key and submit.")
                } else {
                    format!("{} ready.", role.title())
                };
                Task::none()
            }

            Message::PreviewReady(_, _, Err(error)) => {
                // The slot keeps its prior state; submit stays gated on the
                // missing preview, so no incomplete payload can be sent
                eprintln!("⚠️  Preview encode failed: {}", error);
                self.status = error;
                Task::none()
            }

            Message::AspectRatioPicked(value) => {
                self.options.set_aspect_ratio(value);
                Task::none()
            }

            Message::ShotTypePicked(value) => {
                self.options.set_shot_type(value);
                Task::none()
            }

            Message::Submit => {
                // The button is disabled in the same conditions; a stray
                // message while ineligible or in flight is a no-op
                if !self.can_submit() {
                    return Task::none();
                }
                let (Some(person), Some(garment)) =
                    (self.person.preview(), self.garment.preview())
                else {
                    return Task::none();
                };

                let request = GenerateRequest {
                    person_image_b64: base64_payload(&person.data_uri).to_string(),
                    clothes_image_b64: base64_payload(&garment.data_uri).to_string(),
                    shot_type: self.options.shot_type,
                    aspect_ratio: self.options.aspect_ratio,
                    api_key: self.api_key.clone(),
                };

                if !self.submission.begin() {
                    return Task::none();
                }

                self.status = String::from("Styling in progress...");
                println!(
                    "🚀 Submitting generation request ({}, {})",
                    self.options.shot_type.as_str(),
                    self.options.aspect_ratio.as_str()
                );

                let client = self.client.clone();
                Task::batch([
                    // Presentation cue: bring the result panel into view
                    scrollable::snap_to(result_scroll_id(), scrollable::RelativeOffset::END),
                    Task::perform(
                        async move {
                            let data_uri = client.generate(request).await?;
                            Preview::from_data_uri(data_uri).map_err(ApiError::Transport)
                        },
                        Message::GenerationFinished,
                    ),
                ])
            }

            Message::GenerationFinished(outcome) => {
                match &outcome {
                    Ok(_) => {
                        self.status = String::from("Done. Your styled look is ready.");
                        println!("✅ Generation complete");
                    }
                    Err(error) => {
                        self.status = format!("Generation failed: {}", error);
                        eprintln!("❌ Generation failed: {}", error);
                    }
                }

                // The single completion point: always exits InFlight
                self.submission.finish(outcome);
                Task::none()
            }

            Message::DismissNotice => {
                self.submission.dismiss_failure();
                Task::none()
            }
        }
    }

    /// Build the styling option radio groups
    fn options_panel(&self) -> Element<'_, Message> {
        let aspect = AspectRatio::ALL.iter().fold(
            column![text("Aspect ratio").size(16)].spacing(6),
            |group, &value| {
                group.push(radio(
                    value.to_string(),
                    value,
                    Some(self.options.aspect_ratio),
                    Message::AspectRatioPicked,
                ))
            },
        );

        let shot = ShotType::ALL.iter().fold(
            column![text("Shot framing").size(16)].spacing(6),
            |group, &value| {
                group.push(radio(
                    value.to_string(),
                    value,
                    Some(self.options.shot_type),
                    Message::ShotTypePicked,
                ))
            },
        );

        row![aspect, shot].spacing(40).into()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Try-On Studio").size(40),
            text("Fuse a person photo and a garment photo into one styled look.").size(16),
        ]
        .spacing(8);

        let key_row = row![
            text_input("sk-live-xxxxxxxx", &self.api_key)
                .on_input(Message::ApiKeyChanged)
                .secure(true)
                .padding(10),
            button("Initiate styling")
                .on_press_maybe(self.can_submit().then_some(Message::Submit))
                .padding(10),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let slots = row![
            ui::upload::upload_panel(SlotRole::Person, &self.person),
            ui::upload::upload_panel(SlotRole::Garment, &self.garment),
        ]
        .spacing(20);

        let mut content = column![header, key_row, self.options_panel(), slots]
            .spacing(24)
            .padding(30);

        // Transient failure banner; dismissing returns to Idle
        if let Some(message) = self.submission.failure() {
            content = content.push(
                row![
                    text(message).size(14),
                    button("Dismiss").on_press(Message::DismissNotice).padding(6),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            );
        }

        content = content.push(ui::result::result_panel(&self.submission));
        content = content.push(text(&self.status).size(14));

        scrollable(content.width(Length::Fill))
            .id(result_scroll_id())
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Try-On Studio", TryOnStudio::update, TryOnStudio::view)
        .theme(TryOnStudio::theme)
        .centered()
        .run_with(TryOnStudio::new)
}
