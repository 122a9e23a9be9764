//! Primitive codec
//!
//! Big-endian (and a few little-endian) encode/decode helpers shared by
//! the random-access views and the sequential streams.
//!
//! Decoding combines bytes most-significant first:
//! ```text
//! USHORT   b0 << 8  | b1
//! UINT24   b0 << 16 | b1 << 8  | b2
//! ULONG    b0 << 24 | b1 << 16 | b2 << 8 | b3
//! LONGDATETIME  ULONG(b0..b4) << 32 | ULONG(b4..b8)
//! ```

use crate::error::{FontDataError, Result};

// =============================================================================
// Decoding
// =============================================================================

pub(crate) fn decode_ushort(b: [u8; 2]) -> u16 {
    (u16::from(b[0]) << 8) | u16::from(b[1])
}

pub(crate) fn decode_ushort_le(b: [u8; 2]) -> u16 {
    u16::from(b[0]) | (u16::from(b[1]) << 8)
}

pub(crate) fn decode_uint24(b: [u8; 3]) -> u32 {
    (u32::from(b[0]) << 16) | (u32::from(b[1]) << 8) | u32::from(b[2])
}

pub(crate) fn decode_ulong(b: [u8; 4]) -> u32 {
    (u32::from(b[0]) << 24) | (u32::from(b[1]) << 16) | (u32::from(b[2]) << 8) | u32::from(b[3])
}

pub(crate) fn decode_ulong_le(b: [u8; 4]) -> u32 {
    u32::from(b[0]) | (u32::from(b[1]) << 8) | (u32::from(b[2]) << 16) | (u32::from(b[3]) << 24)
}

pub(crate) fn decode_date_time(b: [u8; 8]) -> i64 {
    let high = decode_ulong([b[0], b[1], b[2], b[3]]);
    let low = decode_ulong([b[4], b[5], b[6], b[7]]);
    ((u64::from(high) << 32) | u64::from(low)) as i64
}

/// Reinterpret a ULONG as a signed 32-bit value, refusing values with the high bit set
pub(crate) fn ulong_as_int(value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        FontDataError::Overflow(format!("ULONG 0x{:08x} does not fit in a signed 32-bit int", value))
    })
}

// =============================================================================
// Encoding
// =============================================================================

pub(crate) fn encode_ushort(v: u16) -> [u8; 2] {
    [(v >> 8) as u8, v as u8]
}

pub(crate) fn encode_ushort_le(v: u16) -> [u8; 2] {
    [v as u8, (v >> 8) as u8]
}

/// Low 24 bits of `v`, most significant first
pub(crate) fn encode_uint24(v: u32) -> [u8; 3] {
    [(v >> 16) as u8, (v >> 8) as u8, v as u8]
}

pub(crate) fn encode_ulong(v: u32) -> [u8; 4] {
    [(v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8]
}

pub(crate) fn encode_ulong_le(v: u32) -> [u8; 4] {
    [v as u8, (v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8]
}

pub(crate) fn encode_date_time(v: i64) -> [u8; 8] {
    let v = v as u64;
    let high = encode_ulong((v >> 32) as u32);
    let low = encode_ulong(v as u32);
    [high[0], high[1], high[2], high[3], low[0], low[1], low[2], low[3]]
}
