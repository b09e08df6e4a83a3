//! Note name resolution: textual pitch names to MIDI numbers and frequencies.
//!
//! Note names have the form `<letter A-G>[#|b][octave digit]`, with a
//! case-insensitive letter and an optional single-digit octave that defaults
//! to 4. Parsing is deliberately lenient: malformed names resolve to a fixed
//! default pitch instead of an error, so callers never handle a resolver
//! failure. Generator output is always well-formed; the fallback only matters
//! for externally edited note data, where one wrong-sounding note beats a
//! failed export.

/// Default MIDI note for unparseable names (middle C).
pub const DEFAULT_MIDI_NOTE: u8 = 60;

/// Default frequency for unparseable names (A4).
pub const DEFAULT_FREQUENCY: f64 = 440.0;

/// Semitone offsets for note letters (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
const SEMITONE_MAP: [(char, i32); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// Convert a note name (e.g. "C4", "A#3", "Bb5") to a MIDI note number.
///
/// The octave defaults to 4 when absent. Callers that hold octave-less
/// generator output (e.g. "C", "F#") append the intended octave digit before
/// calling. Names that do not match the grammar resolve to
/// [`DEFAULT_MIDI_NOTE`].
///
/// The result is clamped to 0..=127. Octave-9 names above G9 evaluate past
/// 127 under the raw `12*(octave+1) + semitone` formula (the reference
/// implementation emits the out-of-range number as-is); clamping is an
/// intentional divergence so the value is always a legal MIDI data byte.
///
/// # Examples
/// ```
/// use moodtrack::note::note_name_to_midi;
///
/// assert_eq!(note_name_to_midi("C4"), 60);
/// assert_eq!(note_name_to_midi("A4"), 69);
/// assert_eq!(note_name_to_midi("C#4"), 61);
/// assert_eq!(note_name_to_midi("not a note"), 60);
/// ```
pub fn note_name_to_midi(name: &str) -> u8 {
    parse_note_name(name)
        .map(|(semitone, octave)| {
            let midi = 12 * (octave + 1) + semitone;
            midi.clamp(0, 127) as u8
        })
        .unwrap_or(DEFAULT_MIDI_NOTE)
}

/// Convert a MIDI note number to frequency in Hz (A4 = 440 Hz reference).
///
/// Uses the standard formula `f = 440 * 2^((n - 69) / 12)`.
pub fn midi_to_freq(midi_note: u8) -> f64 {
    440.0 * 2.0_f64.powf((midi_note as f64 - 69.0) / 12.0)
}

/// Convert a note name directly to frequency in Hz.
///
/// Malformed names resolve to [`DEFAULT_FREQUENCY`] (440 Hz), not to the
/// frequency of the default MIDI note. The two fallbacks differ on purpose:
/// the MIDI path substitutes middle C while the audio path substitutes the
/// tuning reference, matching the reference behavior of each consumer.
pub fn note_name_to_freq(name: &str) -> f64 {
    parse_note_name(name)
        .map(|(semitone, octave)| {
            let midi = (12 * (octave + 1) + semitone).clamp(0, 127) as u8;
            midi_to_freq(midi)
        })
        .unwrap_or(DEFAULT_FREQUENCY)
}

/// Parse a note name into (semitone-with-accidental, octave).
///
/// Grammar: one letter A-G (any case), optional `#` or `b`, optional single
/// octave digit (default 4). Interior whitespace is stripped first. Returns
/// `None` when the input has anything else.
fn parse_note_name(name: &str) -> Option<(i32, i32)> {
    let cleaned: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    let mut chars = cleaned.chars();

    let letter = chars.next()?.to_ascii_uppercase();
    let base = SEMITONE_MAP
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, s)| *s)?;

    let mut semitone = base;
    let mut next = chars.next();
    match next {
        Some('#') => {
            semitone += 1;
            next = chars.next();
        }
        Some('b') => {
            semitone -= 1;
            next = chars.next();
        }
        _ => {}
    }

    let octave = match next {
        Some(d) if d.is_ascii_digit() => {
            // Exactly one digit; trailing characters invalidate the name.
            if chars.next().is_some() {
                return None;
            }
            d.to_digit(10).unwrap() as i32
        }
        Some(_) => return None,
        None => 4,
    };

    Some((semitone, octave))
}
