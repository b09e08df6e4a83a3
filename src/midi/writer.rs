//! MIDI file assembly: MThd/MTrk chunk layout and byte-level validation.

use std::io::{self, Write};

use byteorder::{BigEndian, WriteBytesExt};

use super::track::MidiTrack;
use super::{MTHD_MAGIC, MTRK_MAGIC, TICKS_PER_QUARTER};
use crate::compose::{Chord, MelodyStep};

/// SMF format number (0: single track).
pub const MIDI_FORMAT: u16 = 0;

/// Number of tracks (always 1 in format 0).
pub const MIDI_NUM_TRACKS: u16 = 1;

/// A complete single-track MIDI file.
#[derive(Debug, Clone)]
pub struct MidiFile {
    /// Ticks per quarter note.
    pub division: u16,
    /// The single track.
    pub track: MidiTrack,
}

impl MidiFile {
    /// Create a file around an already-built track, using the standard
    /// division of 480 ticks per quarter.
    pub fn new(track: MidiTrack) -> Self {
        Self {
            division: TICKS_PER_QUARTER,
            track,
        }
    }

    /// Write the complete file to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        // Header chunk: length 6, format 0, one track, division.
        writer.write_all(MTHD_MAGIC)?;
        writer.write_u32::<BigEndian>(6)?;
        writer.write_u16::<BigEndian>(MIDI_FORMAT)?;
        writer.write_u16::<BigEndian>(MIDI_NUM_TRACKS)?;
        writer.write_u16::<BigEndian>(self.division)?;

        // Track chunk: length-prefixed event stream.
        let events = self.track.as_bytes();
        writer.write_all(MTRK_MAGIC)?;
        writer.write_u32::<BigEndian>(events.len() as u32)?;
        writer.write_all(events)?;

        Ok(())
    }

    /// Write the file to a byte vector.
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Compute the BLAKE3 hash of the file bytes.
    pub fn compute_hash(&self) -> io::Result<String> {
        let bytes = self.to_bytes()?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}

/// Encode a melody/chords/tempo triple as a format-0 Standard MIDI File.
///
/// The step loop runs to the longer of the two sequences; rests (`None`
/// melody steps) and missing/empty chords emit no events but still advance
/// the step grid. An all-rest melody with no chords therefore still yields a
/// valid file holding only the tempo meta-event and end-of-track.
pub fn encode_midi(melody: &[MelodyStep], chords: &[Chord], tempo: u32) -> io::Result<Vec<u8>> {
    let mut track = MidiTrack::new();
    track.push_tempo(tempo)?;

    let steps = melody.len().max(chords.len());
    for i in 0..steps {
        if let Some(Some(note)) = melody.get(i) {
            track.push_melody_note(note)?;
        }
        if let Some(chord) = chords.get(i) {
            track.push_chord(chord)?;
        }
    }

    track.push_end_of_track()?;
    MidiFile::new(track).to_bytes()
}

/// Validate that a buffer carries a plausible format-0 SMF produced by this
/// encoder: header magic, header length, format/track counts, and a track
/// chunk whose declared length matches the remaining bytes.
pub fn validate_midi_bytes(data: &[u8]) -> Result<(), MidiValidationError> {
    if data.len() < 22 {
        return Err(MidiValidationError::FileTooSmall(data.len()));
    }
    if &data[0..4] != MTHD_MAGIC {
        return Err(MidiValidationError::InvalidHeaderMagic);
    }

    let header_len = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    if header_len != 6 {
        return Err(MidiValidationError::InvalidHeaderLength(header_len));
    }

    let format = u16::from_be_bytes([data[8], data[9]]);
    if format != MIDI_FORMAT {
        return Err(MidiValidationError::UnsupportedFormat(format));
    }

    let num_tracks = u16::from_be_bytes([data[10], data[11]]);
    if num_tracks != MIDI_NUM_TRACKS {
        return Err(MidiValidationError::UnsupportedTrackCount(num_tracks));
    }

    if &data[14..18] != MTRK_MAGIC {
        return Err(MidiValidationError::InvalidTrackMagic);
    }

    let track_len = u32::from_be_bytes([data[18], data[19], data[20], data[21]]) as usize;
    if data.len() != 22 + track_len {
        return Err(MidiValidationError::TrackLengthMismatch {
            declared: track_len,
            actual: data.len() - 22,
        });
    }

    Ok(())
}

/// MIDI validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MidiValidationError {
    /// File is too small to hold the header and track chunk prefix.
    FileTooSmall(usize),
    /// Missing `MThd` magic.
    InvalidHeaderMagic,
    /// Header chunk length is not 6.
    InvalidHeaderLength(u32),
    /// Format is not 0.
    UnsupportedFormat(u16),
    /// Track count is not 1 (format 0 carries exactly one track).
    UnsupportedTrackCount(u16),
    /// Missing `MTrk` magic.
    InvalidTrackMagic,
    /// Track chunk length does not match the remaining bytes.
    TrackLengthMismatch {
        /// Length declared in the track chunk prefix.
        declared: usize,
        /// Bytes actually present after the prefix.
        actual: usize,
    },
}

impl std::fmt::Display for MidiValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MidiValidationError::FileTooSmall(size) => {
                write!(f, "File too small: {} bytes", size)
            }
            MidiValidationError::InvalidHeaderMagic => {
                write!(f, "Invalid MThd magic")
            }
            MidiValidationError::InvalidHeaderLength(len) => {
                write!(f, "Invalid header chunk length: {}", len)
            }
            MidiValidationError::UnsupportedFormat(format) => {
                write!(f, "Unsupported SMF format: {}", format)
            }
            MidiValidationError::UnsupportedTrackCount(count) => {
                write!(f, "Unsupported track count: {}", count)
            }
            MidiValidationError::InvalidTrackMagic => {
                write!(f, "Invalid MTrk magic")
            }
            MidiValidationError::TrackLengthMismatch { declared, actual } => {
                write!(
                    f,
                    "Track length mismatch: declared {} bytes, found {}",
                    declared, actual
                )
            }
        }
    }
}

impl std::error::Error for MidiValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let bytes = encode_midi(&[], &[], 120).unwrap();
        assert_eq!(&bytes[0..4], b"MThd");
        assert_eq!(&bytes[4..8], &[0, 0, 0, 6]);
        assert_eq!(&bytes[8..10], &[0, 0]); // format 0
        assert_eq!(&bytes[10..12], &[0, 1]); // one track
        assert_eq!(&bytes[12..14], &[0x01, 0xE0]); // division 480
        assert_eq!(&bytes[14..18], b"MTrk");
    }

    #[test]
    fn test_empty_composition_still_valid() {
        let melody: Vec<MelodyStep> = vec![None; 16];
        let bytes = encode_midi(&melody, &[], 90).unwrap();
        assert!(validate_midi_bytes(&bytes).is_ok());
        // Only tempo meta + end of track in the event stream.
        let track_len = u32::from_be_bytes([bytes[18], bytes[19], bytes[20], bytes[21]]);
        assert_eq!(track_len, 7 + 4);
    }

    #[test]
    fn test_validation_rejects_truncation() {
        let bytes = encode_midi(&[Some("C".to_string())], &[], 120).unwrap();
        let truncated = &bytes[..bytes.len() - 1];
        assert!(matches!(
            validate_midi_bytes(truncated),
            Err(MidiValidationError::TrackLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_bad_magic() {
        let mut bytes = encode_midi(&[], &[], 120).unwrap();
        bytes[0] = b'X';
        assert_eq!(
            validate_midi_bytes(&bytes),
            Err(MidiValidationError::InvalidHeaderMagic)
        );
    }

    #[test]
    fn test_hash_determinism() {
        let melody = vec![Some("C".to_string()), None, Some("E".to_string())];
        let chords = vec![vec!["C".to_string(), "E".to_string(), "G".to_string()]];
        let a = encode_midi(&melody, &chords, 100).unwrap();
        let b = encode_midi(&melody, &chords, 100).unwrap();
        assert_eq!(blake3::hash(&a), blake3::hash(&b));
    }
}
