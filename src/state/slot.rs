/// Upload slots for the person and garment images
///
/// Each slot pairs the selected file with its encoded preview. Preview
/// encoding is asynchronous, so completions carry the sequence token the
/// encode was started under; a completion for a superseded selection is
/// dropped, which keeps the pair consistent under rapid re-selection.
use std::path::PathBuf;

use crate::preview::Preview;

/// The two image roles a submission needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    Person,
    Garment,
}

impl SlotRole {
    pub fn title(&self) -> &'static str {
        match self {
            SlotRole::Person => "Person photo",
            SlotRole::Garment => "Garment photo",
        }
    }

    /// Prompt shown in an empty slot
    pub fn hint(&self) -> &'static str {
        match self {
            SlotRole::Person => "Browse for a portrait. Lighting and posture are preserved.",
            SlotRole::Garment => "Browse for an outfit flat, catalog snap, or lookbook shot.",
        }
    }
}

/// Paired file-and-preview holder for one image role
#[derive(Debug, Default)]
pub struct ImageSlot {
    path: Option<PathBuf>,
    preview: Option<Preview>,
    /// Sequence token; only the matching encode completion may install
    seq: u64,
}

impl ImageSlot {
    /// Store a newly selected file, dropping any preview of the previous
    /// one. Returns the token the encoder completion must present.
    pub fn select(&mut self, path: PathBuf) -> u64 {
        self.seq += 1;
        self.path = Some(path);
        self.preview = None;
        self.seq
    }

    /// Install an encoded preview, unless the slot has moved on since
    /// the encode was started (last-write-wins)
    pub fn preview_ready(&mut self, token: u64, preview: Preview) {
        if token == self.seq {
            self.preview = Some(preview);
        }
    }

    /// Unconditionally reset to empty, invalidating pending encodes
    pub fn clear(&mut self) {
        self.seq += 1;
        self.path = None;
        self.preview = None;
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// A slot counts toward submission only once its preview is encoded,
    /// so an unreadable file can never produce an incomplete payload
    pub fn is_ready(&self) -> bool {
        self.preview.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(tag: u8) -> Preview {
        Preview::from_bytes(vec![tag, tag, tag])
    }

    #[test]
    fn test_select_then_preview_ready() {
        let mut slot = ImageSlot::default();
        let token = slot.select(PathBuf::from("person.png"));
        assert!(!slot.is_ready());

        slot.preview_ready(token, preview(1));
        assert!(slot.is_ready());
        assert_eq!(slot.path(), Some(&PathBuf::from("person.png")));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut slot = ImageSlot::default();
        let first = slot.select(PathBuf::from("first.png"));
        let second = slot.select(PathBuf::from("second.png"));

        // First encode finishes late; it must not attach to second.png
        slot.preview_ready(first, preview(1));
        assert!(!slot.is_ready());

        slot.preview_ready(second, preview(2));
        assert!(slot.is_ready());
        assert_eq!(slot.path(), Some(&PathBuf::from("second.png")));
    }

    #[test]
    fn test_reselect_drops_previous_preview() {
        let mut slot = ImageSlot::default();
        let first = slot.select(PathBuf::from("first.png"));
        slot.preview_ready(first, preview(1));
        assert!(slot.is_ready());

        slot.select(PathBuf::from("second.png"));
        assert!(!slot.is_ready());
    }

    #[test]
    fn test_clear_always_empties() {
        let mut slot = ImageSlot::default();
        let token = slot.select(PathBuf::from("person.png"));
        slot.preview_ready(token, preview(1));

        slot.clear();
        assert!(slot.path().is_none());
        assert!(slot.preview().is_none());

        // Clearing an already-empty slot is fine too
        slot.clear();
        assert!(slot.path().is_none());
        assert!(slot.preview().is_none());
    }

    #[test]
    fn test_clear_invalidates_pending_encode() {
        let mut slot = ImageSlot::default();
        let token = slot.select(PathBuf::from("person.png"));
        slot.clear();

        slot.preview_ready(token, preview(1));
        assert!(slot.preview().is_none());
    }
}
