//! Emotion presets: static mapping from a mood label to generation settings.
//!
//! The table is configuration, not algorithm — each emotion fixes a scale
//! mode, a default tempo, and a chord-degree progression. Everything musical
//! happens downstream in [`crate::compose`].

use serde::{Deserialize, Serialize};

use crate::theory::ScaleKind;

/// Mood label selecting a generation preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Epic,
    Chill,
    Dark,
}

/// Generation settings for one emotion.
#[derive(Debug, Clone, Copy)]
pub struct EmotionConfig {
    /// Scale mode used to derive the diatonic scale.
    pub scale: ScaleKind,
    /// Default tempo in beats per minute.
    pub tempo: u32,
    /// Chord progression as zero-based scale degrees.
    pub progression: &'static [usize],
}

impl Emotion {
    /// All emotions, in presentation order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Epic,
        Emotion::Chill,
        Emotion::Dark,
    ];

    /// Look up the static generation settings for this emotion.
    pub fn config(self) -> EmotionConfig {
        match self {
            Emotion::Happy => EmotionConfig {
                scale: ScaleKind::Major,
                tempo: 120,
                progression: &[0, 4, 5, 3],
            },
            Emotion::Sad => EmotionConfig {
                scale: ScaleKind::Minor,
                tempo: 70,
                progression: &[0, 5, 2, 6],
            },
            Emotion::Epic => EmotionConfig {
                scale: ScaleKind::Major,
                tempo: 90,
                progression: &[0, 5, 3, 4],
            },
            Emotion::Chill => EmotionConfig {
                scale: ScaleKind::Major,
                tempo: 85,
                progression: &[0, 2, 4, 5],
            },
            Emotion::Dark => EmotionConfig {
                scale: ScaleKind::Minor,
                tempo: 100,
                progression: &[0, 3, 4],
            },
        }
    }
}
