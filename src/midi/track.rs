//! Track event-stream builder.
//!
//! Builds the raw `MTrk` payload: tempo meta-event, note on/off pairs for
//! melody steps and chord tones, and the end-of-track marker. The builder
//! appends events in the exact order and delta-time layout required for
//! byte-for-byte compatible output (see the note on [`MidiTrack::push_chord`]).

use std::io::{self, Write};

use byteorder::{BigEndian, WriteBytesExt};

use super::vlq::write_vlq;
use super::{
    CHORD_VELOCITY, MELODY_VELOCITY, META, META_END_OF_TRACK, META_TEMPO, NOTE_OFF, NOTE_ON,
    RELEASE_VELOCITY, TICKS_PER_QUARTER,
};
use crate::note::note_name_to_midi;

/// Duration of one melody step in ticks (eighth note).
pub const MELODY_STEP_TICKS: u32 = TICKS_PER_QUARTER as u32 / 2;

/// Duration of one chord in ticks (quarter note).
pub const CHORD_TICKS: u32 = TICKS_PER_QUARTER as u32;

/// Octave appended to octave-less melody note names.
pub const MELODY_OCTAVE: u8 = 4;

/// Octave appended to octave-less chord-tone names.
pub const CHORD_OCTAVE: u8 = 3;

/// Accumulates track events as raw bytes.
#[derive(Debug, Clone, Default)]
pub struct MidiTrack {
    events: Vec<u8>,
}

impl MidiTrack {
    /// Create an empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw event bytes accumulated so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.events
    }

    /// Append the set-tempo meta-event (`FF 51 03` + 24-bit big-endian
    /// microseconds per quarter note).
    ///
    /// The microsecond value is masked to 24 bits. Tempos of 3 bpm and below
    /// overflow the field; the reference encoder keeps only the low three
    /// bytes, so this writer does the same rather than panic or error.
    pub fn push_tempo(&mut self, bpm: u32) -> io::Result<()> {
        let micros_per_quarter = ((60_000_000.0 / bpm as f64).round() as u32) & 0xFF_FFFF;
        write_vlq(&mut self.events, 0)?;
        self.events.write_all(&[META, META_TEMPO, 0x03])?;
        self.events.write_u24::<BigEndian>(micros_per_quarter)?;
        Ok(())
    }

    /// Append a melody note: note-on at delta 0, note-off an eighth note
    /// later. The octave digit is appended before pitch resolution since
    /// generator note names carry no octave.
    pub fn push_melody_note(&mut self, name: &str) -> io::Result<()> {
        let pitch = note_name_to_midi(&format!("{name}{MELODY_OCTAVE}"));
        write_vlq(&mut self.events, 0)?;
        self.events.write_all(&[NOTE_ON, pitch, MELODY_VELOCITY])?;
        write_vlq(&mut self.events, MELODY_STEP_TICKS)?;
        self.events.write_all(&[NOTE_OFF, pitch, RELEASE_VELOCITY])?;
        Ok(())
    }

    /// Append a chord: note-on for every tone at delta 0, then note-off for
    /// every tone a quarter note later.
    ///
    /// The chord group's delta clock restarts at 0 even when melody events in
    /// the same step already consumed ticks, so the resulting timeline is not
    /// strictly monotonic. Downstream players accept the overlap and the
    /// layout is part of the output contract; do not merge the groups into
    /// one sorted event stream.
    pub fn push_chord(&mut self, tones: &[String]) -> io::Result<()> {
        if tones.is_empty() {
            return Ok(());
        }
        // One delta byte covers the whole on-group; the remaining tones
        // follow with no delta at all (not even a running 0) in the
        // reference layout.
        write_vlq(&mut self.events, 0)?;
        for name in tones {
            let pitch = note_name_to_midi(&format!("{name}{CHORD_OCTAVE}"));
            self.events.write_all(&[NOTE_ON, pitch, CHORD_VELOCITY])?;
        }
        write_vlq(&mut self.events, CHORD_TICKS)?;
        for name in tones {
            let pitch = note_name_to_midi(&format!("{name}{CHORD_OCTAVE}"));
            self.events.write_all(&[NOTE_OFF, pitch, RELEASE_VELOCITY])?;
        }
        Ok(())
    }

    /// Append the end-of-track meta-event.
    pub fn push_end_of_track(&mut self) -> io::Result<()> {
        write_vlq(&mut self.events, 0)?;
        self.events
            .write_all(&[META, META_END_OF_TRACK, 0x00])?;
        Ok(())
    }
}
