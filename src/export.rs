//! Export entry points: composition snapshot in, tagged binary artifact out.
//!
//! This is the crate's validation boundary. The encoders and renderer treat
//! out-of-range tempo or sample rate as undefined behavior, so both are
//! checked here before any synthesis or encoding starts.

use thiserror::Error;

use crate::compose::Composition;
use crate::midi::encode_midi;
use crate::render::render_composition;
use crate::wav::encode_wav;

/// Default sample rate for WAV export.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Error type for export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Tempo must be a positive number of beats per minute.
    #[error("invalid tempo: {0} bpm")]
    InvalidTempo(u32),

    /// Sample rate must be positive.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    /// IO error during encoding.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An encoded artifact: immutable bytes plus identification metadata.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Encoded file bytes.
    pub data: Vec<u8>,
    /// BLAKE3 hash of `data`, for verifying byte-identical output across
    /// runs or worker boundaries.
    pub hash: String,
    /// MIME type tag.
    pub mime: &'static str,
    /// File extension without dot.
    pub extension: &'static str,
}

impl ExportResult {
    fn new(data: Vec<u8>, mime: &'static str, extension: &'static str) -> Self {
        let hash = blake3::hash(&data).to_hex().to_string();
        Self {
            data,
            hash,
            mime,
            extension,
        }
    }
}

/// Export a composition as a format-0 Standard MIDI File.
pub fn export_midi(composition: &Composition) -> Result<ExportResult, ExportError> {
    if composition.tempo == 0 {
        return Err(ExportError::InvalidTempo(composition.tempo));
    }

    let data = encode_midi(&composition.melody, &composition.chords, composition.tempo)?;
    Ok(ExportResult::new(data, "audio/midi", "mid"))
}

/// Render a composition and export it as a 16-bit mono PCM WAV file.
pub fn export_wav(
    composition: &Composition,
    sample_rate: u32,
) -> Result<ExportResult, ExportError> {
    if composition.tempo == 0 {
        return Err(ExportError::InvalidTempo(composition.tempo));
    }
    if sample_rate == 0 {
        return Err(ExportError::InvalidSampleRate(sample_rate));
    }

    let samples = render_composition(
        &composition.melody,
        &composition.chords,
        composition.tempo,
        sample_rate,
    );
    let data = encode_wav(&samples, sample_rate)?;
    Ok(ExportResult::new(data, "audio/wav", "wav"))
}
