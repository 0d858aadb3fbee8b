//! Conversion between raw payload bytes and signed 16-bit PCM samples.
//!
//! Byte pairs are always given as `(low, high)`: the first byte of a pair in
//! the payload is the low byte. Bit 7 of the high byte is the sign, the other
//! 15 bits are the magnitude. The one pattern that would be negative zero,
//! `(0x00, 0x80)`, stands for [`MIN_16_BIT`] instead, which makes the mapping
//! a bijection between byte pairs and `i16`.

use crate::{AudioReader, AudioWriter};

pub const MIN_8_BIT: u8 = 0;
pub const MID_8_BIT: u8 = 128;
pub const MAX_8_BIT: u8 = 255;
pub const MIN_16_BIT: i16 = -0x8000;
pub const MID_16_BIT: i16 = 0;
pub const MAX_16_BIT: i16 = 0x7fff;

const SIGN_BIT: u8 = 0b1000_0000;

/// Decodes one sample from its low and high byte.
pub fn bytes_to_sample(low: u8, high: u8) -> i16 {
    if high == SIGN_BIT && low == 0 {
        return MIN_16_BIT;
    }

    let magnitude = i16::from_le_bytes([low, high & !SIGN_BIT]);
    if high & SIGN_BIT != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Encodes one sample as `(low, high)`. Inverse of [`bytes_to_sample`].
pub fn sample_to_bytes(value: i16) -> (u8, u8) {
    if value == MIN_16_BIT {
        return (0, SIGN_BIT);
    }

    let [low, high] = value.unsigned_abs().to_le_bytes();
    if value < 0 {
        (low, high | SIGN_BIT)
    } else {
        (low, high)
    }
}

/// Iterates over the samples of a payload. A trailing odd byte is ignored.
pub fn samples(payload: &[u8]) -> impl Iterator<Item = i16> + '_ {
    payload
        .chunks_exact(2)
        .map(|pair| bytes_to_sample(pair[0], pair[1]))
}

pub fn payload_to_pcm(payload: &[u8]) -> Vec<i16> {
    samples(payload).collect()
}

pub fn pcm_to_payload(pcm: &[i16]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(pcm.len() * 2);
    for &sample in pcm {
        let (low, high) = sample_to_bytes(sample);
        payload.push(low);
        payload.push(high);
    }
    payload
}

/// Interprets the payload of `reader` as 16-bit signed PCM.
pub fn get_pcm<R: AudioReader + ?Sized>(reader: &R) -> Vec<i16> {
    payload_to_pcm(reader.bytes())
}

/// Replaces the payload of `writer` with the encoded samples.
pub fn set_pcm<W: AudioWriter + ?Sized>(writer: &mut W, pcm: &[i16]) {
    writer.set_bytes(pcm_to_payload(pcm));
}
