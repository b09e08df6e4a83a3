//! Tests for the PCM renderer and WAV writer working together.

use pretty_assertions::assert_eq;

use moodtrack::compose::{generate_from_emotion, Chord, MelodyStep};
use moodtrack::emotion::Emotion;
use moodtrack::render::render_composition;
use moodtrack::wav::{compute_pcm_hash, encode_wav, extract_pcm_data, WAV_HEADER_SIZE};

// =============================================================================
// Helper Functions
// =============================================================================

const SAMPLE_RATE: u32 = 8000;

fn melody_of(names: &[&str]) -> Vec<MelodyStep> {
    names.iter().map(|n| Some(n.to_string())).collect()
}

fn triad(names: &[&str]) -> Chord {
    names.iter().map(|n| n.to_string()).collect()
}

// =============================================================================
// Renderer
// =============================================================================

#[test]
fn test_buffer_length_formula() {
    // steps * (30/tempo) + 1 second tail, ceiling at the sample rate.
    let melody = melody_of(&["C", "D", "E", "F", "G", "A", "B", "C"]);
    let buffer = render_composition(&melody, &[], 120, SAMPLE_RATE);
    let expected = ((8.0 * 0.25 + 1.0) * SAMPLE_RATE as f64).ceil() as usize;
    assert_eq!(buffer.len(), expected);
}

#[test]
fn test_chord_only_composition_renders() {
    let chords = vec![triad(&["C", "E", "G"]), triad(&["F", "A", "C"])];
    let buffer = render_composition(&[], &chords, 100, SAMPLE_RATE);
    assert!(buffer.iter().any(|s| *s != 0.0));
}

#[test]
fn test_normalization_bounds_stacked_steps() {
    let melody = melody_of(&["C"; 32]);
    let chords = vec![triad(&["C", "E", "G"]); 32];
    let buffer = render_composition(&melody, &chords, 140, SAMPLE_RATE);
    assert!(buffer.iter().all(|s| s.abs() <= 1.0));
}

#[test]
fn test_render_idempotent_end_to_end() {
    let snapshot = generate_from_emotion("E", Emotion::Epic, 5);
    let a = render_composition(&snapshot.melody, &snapshot.chords, snapshot.tempo, SAMPLE_RATE);
    let b = render_composition(&snapshot.melody, &snapshot.chords, snapshot.tempo, SAMPLE_RATE);
    assert_eq!(a, b);
}

// =============================================================================
// WAV container
// =============================================================================

#[test]
fn test_wav_size_invariant_for_rendered_buffers() {
    let snapshot = generate_from_emotion("C", Emotion::Happy, 11);
    let samples =
        render_composition(&snapshot.melody, &snapshot.chords, snapshot.tempo, SAMPLE_RATE);
    let bytes = encode_wav(&samples, SAMPLE_RATE).unwrap();
    assert_eq!(bytes.len(), WAV_HEADER_SIZE + 2 * samples.len());
}

#[test]
fn test_encoded_pcm_matches_sample_conversion() {
    let samples = vec![0.0f32, 0.5, -0.5, 1.0, -1.0];
    let bytes = encode_wav(&samples, SAMPLE_RATE).unwrap();
    let pcm = extract_pcm_data(&bytes).unwrap();

    let decoded: Vec<i16> = pcm
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(decoded, vec![0, 16383, -16384, 32767, -32768]);
}

#[test]
fn test_byte_identical_export_across_calls() {
    // Offloading renders to a worker must not change the output bytes.
    let snapshot = generate_from_emotion("A", Emotion::Dark, 21);
    let render = |s: &moodtrack::Composition| {
        let samples = render_composition(&s.melody, &s.chords, s.tempo, SAMPLE_RATE);
        encode_wav(&samples, SAMPLE_RATE).unwrap()
    };
    let a = render(&snapshot);
    let b = render(&snapshot.clone());
    assert_eq!(a, b);
    assert_eq!(compute_pcm_hash(&a), compute_pcm_hash(&b));
}

#[test]
fn test_silent_composition_encodes_to_zero_pcm() {
    let melody: Vec<MelodyStep> = vec![None; 4];
    let samples = render_composition(&melody, &[], 120, SAMPLE_RATE);
    let bytes = encode_wav(&samples, SAMPLE_RATE).unwrap();
    let pcm = extract_pcm_data(&bytes).unwrap();
    assert!(pcm.iter().all(|b| *b == 0));
}
