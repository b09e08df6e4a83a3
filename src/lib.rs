//! moodtrack - Deterministic Emotion-Driven Composition Engine
//!
//! This crate generates short melodies and chord progressions from emotion
//! presets and encodes them as Standard MIDI Files or 16-bit PCM WAV audio.
//! It is the encoding/rendering core of a step-sequencer composition tool;
//! UI, state history, and playback live elsewhere and consume this crate
//! through immutable composition snapshots.
//!
//! # Determinism
//!
//! Given the same root, emotion, and seed, generation is byte-identical:
//!
//! - Melody randomness flows through a PCG32 seeded via BLAKE3 derivation
//! - Encoders and the renderer are RNG-free pure functions
//! - Export results carry a BLAKE3 hash of the output bytes
//!
//! All operations are synchronous, allocation-only computations with no
//! shared state, safe to offload to any worker thread without locking.
//!
//! # Example
//!
//! ```
//! use moodtrack::compose::generate_from_emotion;
//! use moodtrack::emotion::Emotion;
//! use moodtrack::export::{export_midi, export_wav};
//!
//! let snapshot = generate_from_emotion("C", Emotion::Happy, 42);
//! assert_eq!(snapshot.tempo, 120);
//!
//! let midi = export_midi(&snapshot).unwrap();
//! assert_eq!(midi.mime, "audio/midi");
//!
//! let wav = export_wav(&snapshot, 44100).unwrap();
//! assert_eq!(wav.mime, "audio/wav");
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: note-name to MIDI/frequency resolution (lenient)
//! - [`theory`]: chromatic table and diatonic scale derivation
//! - [`emotion`]: static emotion presets
//! - [`compose`]: melody/chord generation and the snapshot type
//! - [`midi`]: Standard MIDI File (format 0) encoder
//! - [`render`]: offline additive-sine PCM renderer
//! - [`wav`]: 16-bit mono PCM WAV container writer
//! - [`export`]: validated entry points producing tagged artifacts

pub mod compose;
pub mod emotion;
pub mod export;
pub mod midi;
pub mod note;
pub mod render;
pub mod rng;
pub mod theory;
pub mod wav;

// Re-export the main surface.
pub use compose::{generate_from_emotion, Chord, Composition, MelodyStep};
pub use emotion::Emotion;
pub use export::{export_midi, export_wav, ExportError, ExportResult};
pub use note::{midi_to_freq, note_name_to_freq, note_name_to_midi};
pub use theory::{get_scale, ScaleKind, NOTE_NAMES};

/// Crate version for artifact identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
