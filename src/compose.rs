//! Composition generation: random melodies, degree-stacked triads, and the
//! emotion-driven entry point.
//!
//! A [`Composition`] is an immutable snapshot of one generated piece. The
//! exporters consume snapshots by value with no back-references, so edits in
//! a surrounding layer always produce a fresh snapshot rather than mutating
//! one in flight.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;
use crate::rng::{create_rng, derive_component_seed};
use crate::theory::{get_scale, SCALE_LEN};

/// Number of melody steps generated for an emotion preset (one bar of 16ths
/// in the sequencer grid).
pub const MELODY_STEPS: usize = 16;

/// One melody step: a note name without octave, or `None` for a rest.
pub type MelodyStep = Option<String>;

/// A triad as note names without octave (root, third, fifth).
pub type Chord = Vec<String>;

/// One immutable composition snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// The 7-name diatonic scale the piece was generated over.
    pub scale: Vec<String>,
    /// Melody steps; `None` marks a rest.
    pub melody: Vec<MelodyStep>,
    /// Chord progression, one triad per progression degree.
    pub chords: Vec<Chord>,
    /// Tempo in beats per minute (quarter note = one beat).
    pub tempo: u32,
}

/// Generate a melody of `length` steps by uniform random picks from `scale`.
///
/// The generator never emits rests; rests enter melodies only through later
/// editing, which is why consumers still accept `None` steps.
pub fn generate_melody<R: Rng>(scale: &[&str], length: usize, rng: &mut R) -> Vec<MelodyStep> {
    (0..length)
        .map(|_| Some(scale[rng.gen_range(0..scale.len())].to_string()))
        .collect()
}

/// Build the triad on a zero-based scale degree: degrees d, d+2, d+4 mod 7.
pub fn generate_chord(scale: &[&str], degree: usize) -> Chord {
    vec![
        scale[degree % SCALE_LEN].to_string(),
        scale[(degree + 2) % SCALE_LEN].to_string(),
        scale[(degree + 4) % SCALE_LEN].to_string(),
    ]
}

/// Build a chord progression by stacking a triad on each degree.
pub fn generate_progression(scale: &[&str], degrees: &[usize]) -> Vec<Chord> {
    degrees.iter().map(|&d| generate_chord(scale, d)).collect()
}

/// Generate a full composition snapshot from a root note and emotion preset.
///
/// The emotion fixes the scale mode, tempo, and chord-degree progression;
/// the melody is 16 random steps over the derived scale. Melody randomness
/// comes from a PCG32 seeded via [`derive_component_seed`], so the same
/// `(root, emotion, seed)` triple always yields the same snapshot.
pub fn generate_from_emotion(root: &str, emotion: Emotion, seed: u32) -> Composition {
    let config = emotion.config();
    let scale = get_scale(root, config.scale);

    let mut melody_rng = create_rng(derive_component_seed(seed, "melody"));
    let melody = generate_melody(&scale, MELODY_STEPS, &mut melody_rng);
    let chords = generate_progression(&scale, config.progression);

    Composition {
        scale: scale.iter().map(|n| n.to_string()).collect(),
        melody,
        chords,
        tempo: config.tempo,
    }
}
