//! MIDI variable-length quantity encoding.
//!
//! Delta-times are stored 7 bits per byte, most-significant byte first, with
//! the continuation bit (0x80) set on every byte except the last.

use std::io::{self, Write};

/// Encode a value as a VLQ byte sequence.
pub fn encode_vlq(value: u32) -> Vec<u8> {
    let mut bytes = vec![(value & 0x7F) as u8];
    let mut rest = value >> 7;
    while rest > 0 {
        bytes.insert(0, ((rest & 0x7F) as u8) | 0x80);
        rest >>= 7;
    }
    bytes
}

/// Write a value as a VLQ to a writer.
pub fn write_vlq<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&encode_vlq(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_values() {
        assert_eq!(encode_vlq(0), vec![0x00]);
        assert_eq!(encode_vlq(0x40), vec![0x40]);
        assert_eq!(encode_vlq(0x7F), vec![0x7F]);
    }

    #[test]
    fn test_multi_byte_values() {
        // Reference vectors from the SMF specification.
        assert_eq!(encode_vlq(0x80), vec![0x81, 0x00]);
        assert_eq!(encode_vlq(0x2000), vec![0xC0, 0x00]);
        assert_eq!(encode_vlq(0x3FFF), vec![0xFF, 0x7F]);
        assert_eq!(encode_vlq(0x4000), vec![0x81, 0x80, 0x00]);
        assert_eq!(encode_vlq(0x0FFFFFFF), vec![0xFF, 0xFF, 0xFF, 0x7F]);
    }

    #[test]
    fn test_note_duration_deltas() {
        // The eighth- and quarter-note deltas used by the track builder.
        assert_eq!(encode_vlq(240), vec![0x81, 0x70]);
        assert_eq!(encode_vlq(480), vec![0x83, 0x60]);
    }

    #[test]
    fn test_continuation_bits() {
        for value in [0u32, 1, 127, 128, 255, 16384, 1_000_000] {
            let bytes = encode_vlq(value);
            let (last, rest) = bytes.split_last().unwrap();
            assert_eq!(last & 0x80, 0);
            assert!(rest.iter().all(|b| b & 0x80 != 0));
        }
    }
}
