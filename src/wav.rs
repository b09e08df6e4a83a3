//! Deterministic WAV file writer.
//!
//! Writes canonical 44-byte-header, 16-bit mono PCM WAV files with no
//! timestamps or variable metadata, so the same sample buffer always encodes
//! to identical bytes. All header fields are little-endian (RIFF byte
//! order) — intentionally not sharing the MIDI writer's big-endian path.

use std::io::{self, Write};

/// Size of the canonical WAV header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// PCM format tag in the `fmt ` chunk.
pub const WAV_FORMAT_PCM: u16 = 1;

/// Bits per sample (always 16 in this writer).
pub const WAV_BITS_PER_SAMPLE: u16 = 16;

/// Channel count (always mono).
pub const WAV_CHANNELS: u16 = 1;

/// Convert a float sample to a 16-bit signed PCM value.
///
/// Clamps to [-1, 1], then scales asymmetrically: negative values by 32768,
/// non-negative by 32767. The asymmetry matches the full two's-complement
/// range on each side and is part of the output contract.
pub fn sample_to_i16(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0) as i16
    } else {
        (s * 32767.0) as i16
    }
}

/// Write a complete mono 16-bit PCM WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, samples: &[f32], sample_rate: u32) -> io::Result<()> {
    let data_size = (samples.len() * 2) as u32;
    let block_align = WAV_CHANNELS * (WAV_BITS_PER_SAMPLE / 8);
    let byte_rate = sample_rate * block_align as u32;

    // RIFF header.
    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_size).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk.
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&WAV_FORMAT_PCM.to_le_bytes())?;
    writer.write_all(&WAV_CHANNELS.to_le_bytes())?;
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&WAV_BITS_PER_SAMPLE.to_le_bytes())?;

    // data chunk.
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    for &sample in samples {
        writer.write_all(&sample_to_i16(sample).to_le_bytes())?;
    }

    Ok(())
}

/// Encode a float sample buffer to a complete WAV byte vector.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_SIZE + samples.len() * 2);
    write_wav(&mut buffer, samples, sample_rate)?;
    Ok(buffer)
}

/// Extract the PCM payload from a WAV buffer produced by this writer.
///
/// Returns `None` when the RIFF/WAVE framing or declared data size does not
/// hold. Useful for comparing files by audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < WAV_HEADER_SIZE {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" || &wav_data[36..40] != b"data" {
        return None;
    }

    let data_size = u32::from_le_bytes([wav_data[40], wav_data[41], wav_data[42], wav_data[43]])
        as usize;
    let data_end = WAV_HEADER_SIZE + data_size;
    if data_end > wav_data.len() {
        return None;
    }
    Some(&wav_data[WAV_HEADER_SIZE..data_end])
}

/// Compute the BLAKE3 hash of a WAV file's PCM payload.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_invariant() {
        for n in [0usize, 1, 7, 1000] {
            let samples = vec![0.0f32; n];
            let bytes = encode_wav(&samples, 44100).unwrap();
            assert_eq!(bytes.len(), WAV_HEADER_SIZE + 2 * n);
        }
    }

    #[test]
    fn test_header_fields() {
        let bytes = encode_wav(&[0.0; 4], 44100).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 36 + 8);
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(u32::from_le_bytes(bytes[16..20].try_into().unwrap()), 16);
        assert_eq!(u16::from_le_bytes(bytes[20..22].try_into().unwrap()), 1); // PCM
        assert_eq!(u16::from_le_bytes(bytes[22..24].try_into().unwrap()), 1); // mono
        assert_eq!(u32::from_le_bytes(bytes[24..28].try_into().unwrap()), 44100);
        assert_eq!(u32::from_le_bytes(bytes[28..32].try_into().unwrap()), 88200);
        assert_eq!(u16::from_le_bytes(bytes[32..34].try_into().unwrap()), 2);
        assert_eq!(u16::from_le_bytes(bytes[34..36].try_into().unwrap()), 16);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(u32::from_le_bytes(bytes[40..44].try_into().unwrap()), 8);
    }

    #[test]
    fn test_asymmetric_scaling() {
        assert_eq!(sample_to_i16(1.0), 32767);
        assert_eq!(sample_to_i16(-1.0), -32768);
        assert_eq!(sample_to_i16(0.0), 0);
        assert_eq!(sample_to_i16(0.5), 16383);
        assert_eq!(sample_to_i16(-0.5), -16384);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(sample_to_i16(2.5), 32767);
        assert_eq!(sample_to_i16(-3.0), -32768);
    }

    #[test]
    fn test_pcm_extraction_round_trip() {
        let samples = [0.0f32, 0.25, -0.25, 1.0, -1.0];
        let bytes = encode_wav(&samples, 8000).unwrap();
        let pcm = extract_pcm_data(&bytes).unwrap();
        assert_eq!(pcm.len(), samples.len() * 2);
        let first = i16::from_le_bytes([pcm[6], pcm[7]]);
        assert_eq!(first, 32767);
    }

    #[test]
    fn test_extraction_rejects_bad_framing() {
        let bytes = encode_wav(&[0.0; 4], 8000).unwrap();
        let mut corrupt = bytes.clone();
        corrupt[0] = b'X';
        assert!(extract_pcm_data(&corrupt).is_none());
        assert!(extract_pcm_data(&bytes[..20]).is_none());
    }

    #[test]
    fn test_pcm_hash_ignores_sample_rate_field() {
        let samples = [0.1f32, -0.1, 0.2];
        let a = encode_wav(&samples, 22050).unwrap();
        let b = encode_wav(&samples, 44100).unwrap();
        assert_ne!(a, b);
        assert_eq!(compute_pcm_hash(&a), compute_pcm_hash(&b));
    }
}
