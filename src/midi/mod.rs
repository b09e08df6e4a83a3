//! Standard MIDI File (format 0) encoder.
//!
//! Serializes a composition snapshot into a single-track SMF byte buffer:
//! an `MThd` chunk (format 0, 1 track, 480 ticks per quarter) followed by
//! one `MTrk` chunk holding a tempo meta-event, interleaved melody/chord
//! note on/off pairs, and an end-of-track marker. All multi-byte integers
//! are big-endian, the opposite of the WAV container.
//!
//! Module layout:
//! - [`vlq`]: variable-length quantity (delta-time) encoding
//! - [`track`]: track event-stream builder
//! - [`writer`]: chunk assembly, top-level [`encode_midi`], validation

pub mod track;
pub mod vlq;
pub mod writer;

pub use track::MidiTrack;
pub use vlq::{encode_vlq, write_vlq};
pub use writer::{encode_midi, validate_midi_bytes, MidiFile, MidiValidationError};

/// SMF header chunk magic.
pub const MTHD_MAGIC: &[u8; 4] = b"MThd";

/// SMF track chunk magic.
pub const MTRK_MAGIC: &[u8; 4] = b"MTrk";

/// Ticks per quarter note (the SMF division).
pub const TICKS_PER_QUARTER: u16 = 480;

/// Note-on status byte, channel 0.
pub const NOTE_ON: u8 = 0x90;

/// Note-off status byte, channel 0.
pub const NOTE_OFF: u8 = 0x80;

/// Meta-event status byte.
pub const META: u8 = 0xFF;

/// Set-tempo meta-event type.
pub const META_TEMPO: u8 = 0x51;

/// End-of-track meta-event type.
pub const META_END_OF_TRACK: u8 = 0x2F;

/// Velocity for melody note-on events.
pub const MELODY_VELOCITY: u8 = 0x64;

/// Velocity for chord-tone note-on events.
pub const CHORD_VELOCITY: u8 = 0x60;

/// Velocity for all note-off events.
pub const RELEASE_VELOCITY: u8 = 0x40;
