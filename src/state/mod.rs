/// State management module
///
/// This module handles all application state, including:
/// - Upload slots for the person and garment images (slot.rs)
/// - Styling options for the generation request (options.rs)
/// - The submission state machine (submission.rs)

pub mod options;
pub mod slot;
pub mod submission;
