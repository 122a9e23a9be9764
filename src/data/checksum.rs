//! OpenType table checksum
//!
//! Sum of the data as big-endian ULONGs, truncated to 32 bits. A range
//! whose length is not a multiple of four contributes one extra word whose
//! missing low-order bytes are zero:
//!
//! ```text
//! 00 00 00 01 | ff          →  0x00000001 + 0xff000000
//! ```

use crate::codec::decode_ulong;
use crate::error::{check_span, FontDataError, Result};
use crate::store::ByteArray;

use super::FontData;

/// Cached checksum plus the caller-supplied ranges it covers
#[derive(Debug, Clone, Default)]
pub(crate) struct ChecksumState {
    /// Flat `[low, high, low, high, ...]` list; a trailing `low` runs to the end
    ranges: Option<Vec<usize>>,
    cached: Option<Cached>,
}

#[derive(Debug, Clone, Copy)]
struct Cached {
    value: u32,
    /// Store generation the value was computed at
    generation: u64,
}

impl ChecksumState {
    pub(crate) fn ranges(&self) -> Option<&[usize]> {
        self.ranges.as_deref()
    }

    pub(crate) fn set_ranges(&mut self, bounds: &[usize]) {
        self.ranges = if bounds.is_empty() {
            None
        } else {
            Some(bounds.to_vec())
        };
        self.invalidate();
    }

    pub(crate) fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Cached value if nothing was written since it was computed, otherwise recompute
    pub(crate) fn checksum(&mut self, data: &FontData, array: &ByteArray) -> Result<u32> {
        if array.is_closed() {
            return Err(FontDataError::Closed);
        }
        let generation = array.generation();
        if let Some(cached) = self.cached {
            if cached.generation == generation {
                return Ok(cached.value);
            }
        }

        let value = compute(data, array, self.ranges.as_deref())?;
        tracing::debug!(
            checksum = value,
            offset = data.data_offset(),
            length = data.length_in(array),
            "Computed checksum"
        );
        self.cached = Some(Cached { value, generation });
        Ok(value)
    }
}

fn compute(data: &FontData, array: &ByteArray, ranges: Option<&[usize]>) -> Result<u32> {
    let length = data.length_in(array);
    match ranges {
        None => sum_range(data, array, 0, length),
        Some(bounds) => {
            let mut sum = 0u32;
            for pair in bounds.chunks(2) {
                let low = pair[0];
                let high = pair.get(1).copied().unwrap_or(length);
                sum = sum.wrapping_add(sum_range(data, array, low, high)?);
            }
            Ok(sum)
        }
    }
}

fn sum_range(data: &FontData, array: &ByteArray, low: usize, high: usize) -> Result<u32> {
    if low > high {
        return Err(FontDataError::out_of_bounds(low, 0, high));
    }
    check_span(low, high - low, data.length_in(array))?;

    let mut sum = 0u32;
    let mut word = [0u8; 4];
    let mut index = low;
    while high - index >= 4 {
        data.read_exact_in(array, index, &mut word)?;
        sum = sum.wrapping_add(decode_ulong(word));
        index += 4;
    }
    if index < high {
        let mut tail = [0u8; 4];
        data.read_exact_in(array, index, &mut tail[..high - index])?;
        sum = sum.wrapping_add(decode_ulong(tail));
    }
    Ok(sum)
}
