//! Diatonic scale derivation over the 12-tone chromatic table.

use serde::{Deserialize, Serialize};

/// Chromatic note names indexed 0-11 starting at C, sharps only.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Number of degrees in a diatonic scale.
pub const SCALE_LEN: usize = 7;

/// Scale mode selecting the diatonic interval pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// Major scale (ionian).
    Major,
    /// Natural minor scale (aeolian).
    Minor,
}

impl ScaleKind {
    /// Semitone offsets of each scale degree from the root.
    pub fn intervals(self) -> [usize; SCALE_LEN] {
        match self {
            ScaleKind::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleKind::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }
}

/// Derive the 7-name diatonic scale for a root and mode.
///
/// The root is looked up in [`NOTE_NAMES`] (exact match, sharps spelling);
/// an unknown root is treated as chromatic index 0, so the scale degrades to
/// C-rooted rather than failing.
///
/// # Examples
/// ```
/// use moodtrack::theory::{get_scale, ScaleKind};
///
/// assert_eq!(
///     get_scale("C", ScaleKind::Major),
///     ["C", "D", "E", "F", "G", "A", "B"]
/// );
/// ```
pub fn get_scale(root: &str, kind: ScaleKind) -> [&'static str; SCALE_LEN] {
    let root_index = NOTE_NAMES.iter().position(|n| *n == root).unwrap_or(0);
    let intervals = kind.intervals();

    let mut scale = [""; SCALE_LEN];
    for (degree, offset) in intervals.iter().enumerate() {
        scale[degree] = NOTE_NAMES[(root_index + offset) % NOTE_NAMES.len()];
    }
    scale
}
