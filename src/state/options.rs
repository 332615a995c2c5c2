/// Styling options attached to every generation request
///
/// Both fields are closed enumerations picked from radio groups,
/// so no validation is needed beyond the type itself.
use serde::Serialize;
use std::fmt;

/// Output aspect ratio of the generated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 2] = [AspectRatio::Square, AspectRatio::Portrait];

    /// Wire value sent to the generation service
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "9:16",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::Square => write!(f, "Square (1:1)"),
            AspectRatio::Portrait => write!(f, "Portrait (9:16)"),
        }
    }
}

/// How much of the person the generated shot should frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    CloseUp,
    FullBody,
}

impl ShotType {
    pub const ALL: [ShotType; 2] = [ShotType::CloseUp, ShotType::FullBody];

    /// Wire value sent to the generation service
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotType::CloseUp => "close_up",
            ShotType::FullBody => "full_body",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotType::CloseUp => write!(f, "Close-up"),
            ShotType::FullBody => write!(f, "Full body"),
        }
    }
}

/// The pair of mutually-exclusive styling choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOptions {
    pub aspect_ratio: AspectRatio,
    pub shot_type: ShotType,
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            aspect_ratio: AspectRatio::Portrait,
            shot_type: ShotType::FullBody,
        }
    }
}

impl StyleOptions {
    /// Unconditional overwrite; never cleared
    pub fn set_aspect_ratio(&mut self, value: AspectRatio) {
        self.aspect_ratio = value;
    }

    /// Unconditional overwrite; never cleared
    pub fn set_shot_type(&mut self, value: ShotType) {
        self.shot_type = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = StyleOptions::default();
        assert_eq!(options.aspect_ratio, AspectRatio::Portrait);
        assert_eq!(options.shot_type, ShotType::FullBody);
    }

    #[test]
    fn test_no_cross_field_interference() {
        let mut options = StyleOptions::default();
        options.set_aspect_ratio(AspectRatio::Square);
        options.set_shot_type(ShotType::CloseUp);
        assert_eq!(options.aspect_ratio, AspectRatio::Square);
        assert_eq!(options.shot_type, ShotType::CloseUp);
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(AspectRatio::Square.as_str(), "1:1");
        assert_eq!(AspectRatio::Portrait.as_str(), "9:16");
        assert_eq!(ShotType::CloseUp.as_str(), "close_up");
        assert_eq!(ShotType::FullBody.as_str(), "full_body");
    }

    #[test]
    fn test_serialized_wire_values_match_as_str() {
        for ratio in AspectRatio::ALL {
            let json = serde_json::to_value(ratio).unwrap();
            assert_eq!(json, ratio.as_str());
        }
        for shot in ShotType::ALL {
            let json = serde_json::to_value(shot).unwrap();
            assert_eq!(json, shot.as_str());
        }
    }
}
