//! Offline PCM rendering: additive sine synthesis of a composition snapshot.
//!
//! Produces an `f32` sample buffer suitable for the WAV encoder. Rendering
//! is fully deterministic — identical input yields a byte-identical buffer
//! whether invoked inline or from an offloaded worker.

use crate::compose::{Chord, MelodyStep};
use crate::note::note_name_to_freq;

/// Linear gain applied to each melody note.
pub const MELODY_GAIN: f32 = 0.25;

/// Linear gain applied to each individual chord tone.
pub const CHORD_GAIN: f32 = 0.18;

/// Octave appended to octave-less melody note names.
const MELODY_OCTAVE: u8 = 4;

/// Octave appended to octave-less chord-tone names.
const CHORD_OCTAVE: u8 = 3;

/// Additively synthesize one sine tone into `buffer`.
///
/// Writes `len` samples starting at `start`, clipping at the buffer end.
/// Envelope over local time `t` seconds: `(1 - e^{-5t}) * (1 - t/note_len)`,
/// a fast exponential attack with a linear release reaching zero exactly at
/// the note boundary.
pub fn synth_note(
    buffer: &mut [f32],
    start: usize,
    len: usize,
    freq: f32,
    sample_rate: u32,
    gain: f32,
) {
    let note_len_secs = len as f32 / sample_rate as f32;
    for i in 0..len {
        let idx = start + i;
        if idx >= buffer.len() {
            break;
        }
        let t = i as f32 / sample_rate as f32;
        let env = (1.0 - (-5.0 * t).exp()) * (1.0 - t / note_len_secs);
        buffer[idx] += (2.0 * std::f32::consts::PI * freq * t).sin() * gain * env;
    }
}

/// Render a composition to a mono float sample buffer.
///
/// Melody steps are eighth notes (`30/tempo` seconds); chords last a full
/// quarter note but are placed on the same eighth-note grid as the melody
/// (`i * melody_step` seconds), so each chord deliberately overlaps the
/// following step. That overlap is part of the output contract; do not move
/// chord onsets to the quarter-note grid. The buffer carries one second of
/// padding past the last step, then a peak-normalization pass divides every
/// sample by the peak magnitude when it exceeds 1.0.
pub fn render_composition(
    melody: &[MelodyStep],
    chords: &[Chord],
    tempo: u32,
    sample_rate: u32,
) -> Vec<f32> {
    let quarter = 60.0 / tempo as f32;
    let melody_dur = quarter / 2.0;
    let chord_dur = quarter;

    let steps = melody.len().max(chords.len());
    let total_secs = steps as f32 * melody_dur + 1.0;
    let mut buffer = vec![0.0f32; (total_secs * sample_rate as f32).ceil() as usize];

    let melody_len = (melody_dur * sample_rate as f32).floor() as usize;
    let chord_len = (chord_dur * sample_rate as f32).floor() as usize;

    for i in 0..steps {
        let start = (i as f32 * melody_dur * sample_rate as f32).floor() as usize;

        if let Some(Some(note)) = melody.get(i) {
            let freq = note_name_to_freq(&format!("{note}{MELODY_OCTAVE}")) as f32;
            synth_note(&mut buffer, start, melody_len, freq, sample_rate, MELODY_GAIN);
        }

        if let Some(chord) = chords.get(i) {
            for tone in chord {
                let freq = note_name_to_freq(&format!("{tone}{CHORD_OCTAVE}")) as f32;
                synth_note(&mut buffer, start, chord_len, freq, sample_rate, CHORD_GAIN);
            }
        }
    }

    normalize_peak(&mut buffer);
    buffer
}

/// Divide every sample by the peak magnitude when it exceeds 1.0.
///
/// No-op for buffers already within [-1, 1], preserving relative dynamics of
/// quiet renders instead of boosting them.
fn normalize_peak(buffer: &mut [f32]) {
    let peak = buffer.iter().fold(0.0f32, |max, s| max.max(s.abs()));
    if peak > 1.0 {
        for sample in buffer.iter_mut() {
            *sample /= peak;
        }
    }
}
