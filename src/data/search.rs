//! Range search
//!
//! Binary search over sorted, non-overlapping `[start, end]` pairs stored
//! in place, e.g. the segment arrays of a `cmap` format 4 subtable:
//!
//! ```text
//! start_index + i * start_stride  →  start_i
//! end_index   + i * end_stride    →  end_i
//! ```

use crate::error::{FontDataError, Result};

use super::ReadableFontData;

impl ReadableFontData {
    /// Index of the USHORT `[start, end]` pair containing `key`
    pub fn search_ushort(
        &self,
        start_index: usize,
        start_stride: usize,
        end_index: usize,
        end_stride: usize,
        count: usize,
        key: u16,
    ) -> Result<Option<usize>> {
        search_ranges(
            count,
            key,
            |i| self.read_ushort(element_offset(start_index, i, start_stride)?),
            |i| self.read_ushort(element_offset(end_index, i, end_stride)?),
        )
    }

    /// Index of the ULONG `[start, end]` pair containing `key`
    pub fn search_ulong(
        &self,
        start_index: usize,
        start_stride: usize,
        end_index: usize,
        end_stride: usize,
        count: usize,
        key: u32,
    ) -> Result<Option<usize>> {
        search_ranges(
            count,
            key,
            |i| self.read_ulong(element_offset(start_index, i, start_stride)?),
            |i| self.read_ulong(element_offset(end_index, i, end_stride)?),
        )
    }

    /// Index of the USHORT equal to `key` in a sorted single column
    pub fn search_ushort_exact(
        &self,
        start_index: usize,
        stride: usize,
        count: usize,
        key: u16,
    ) -> Result<Option<usize>> {
        let mut bottom = 0;
        let mut top = count;
        while bottom < top {
            let location = bottom + (top - bottom) / 2;
            let value = self.read_ushort(element_offset(start_index, location, stride)?)?;
            if key < value {
                top = location;
            } else if key > value {
                bottom = location + 1;
            } else {
                return Ok(Some(location));
            }
        }
        Ok(None)
    }
}

fn search_ranges<T, S, E>(count: usize, key: T, start_at: S, end_at: E) -> Result<Option<usize>>
where
    T: Ord + Copy,
    S: Fn(usize) -> Result<T>,
    E: Fn(usize) -> Result<T>,
{
    let mut bottom = 0;
    let mut top = count;
    while bottom < top {
        let location = bottom + (top - bottom) / 2;
        if key < start_at(location)? {
            top = location;
        } else if key <= end_at(location)? {
            return Ok(Some(location));
        } else {
            bottom = location + 1;
        }
    }
    Ok(None)
}

fn element_offset(base: usize, index: usize, stride: usize) -> Result<usize> {
    index
        .checked_mul(stride)
        .and_then(|delta| base.checked_add(delta))
        .ok_or_else(|| {
            FontDataError::Overflow(format!(
                "element offset {} + {} * {} overflows",
                base, index, stride
            ))
        })
}
