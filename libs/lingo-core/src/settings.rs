//! User preference types.

use crate::language::{DEFAULT_TARGET_LANGUAGE, PRIMARY_LANGUAGE};
use serde::{Deserialize, Serialize};

/// Color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

pub const DEFAULT_VOLUME: f32 = 0.7;

/// Scalar preference bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub audio_enabled: bool,
    pub volume: f32,
    pub source_language: String,
    pub target_language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            audio_enabled: true,
            volume: DEFAULT_VOLUME,
            source_language: PRIMARY_LANGUAGE.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}

impl Settings {
    /// Clamp a volume into [0, 1]. NaN maps to the default volume.
    pub fn clamp_volume(volume: f32) -> f32 {
        if volume.is_nan() {
            DEFAULT_VOLUME
        } else {
            volume.clamp(0.0, 1.0)
        }
    }

    /// Whether a pronunciation clip for this entry may be played.
    pub fn can_play(&self, has_audio: bool) -> bool {
        has_audio && self.audio_enabled
    }
}
