//! Bounded view over a shared ByteArray

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{check_span, FontDataError, Result};
use crate::store::ByteArray;

/// Offset/length window onto a shared `ByteArray`
///
/// Visible range is
/// `[bound_offset, bound_offset + min(bound_length, array.length() - bound_offset))`.
/// A `None` bound length means "until the end of the store".
#[derive(Debug, Clone)]
pub struct FontData {
    array: Arc<RwLock<ByteArray>>,
    bound_offset: usize,
    bound_length: Option<usize>,
}

impl FontData {
    pub(crate) fn new(array: ByteArray) -> Self {
        Self {
            array: Arc::new(RwLock::new(array)),
            bound_offset: 0,
            bound_length: None,
        }
    }

    pub(crate) fn array(&self) -> &Arc<RwLock<ByteArray>> {
        &self.array
    }

    // =========================================================================
    // Bounds
    // =========================================================================

    /// Readable bytes in this view
    pub fn length(&self) -> usize {
        self.length_in(&self.array.read())
    }

    /// Writable extent of this view
    pub fn size(&self) -> usize {
        self.size_in(&self.array.read())
    }

    /// Absolute offset of this view within the store
    pub fn data_offset(&self) -> usize {
        self.bound_offset
    }

    pub fn is_bounded(&self) -> bool {
        self.bound_length.is_some()
    }

    pub(crate) fn length_in(&self, array: &ByteArray) -> usize {
        self.cap(array.length().saturating_sub(self.bound_offset))
    }

    pub(crate) fn size_in(&self, array: &ByteArray) -> usize {
        self.cap(array.size().saturating_sub(self.bound_offset))
    }

    fn cap(&self, available: usize) -> usize {
        match self.bound_length {
            Some(bound) => bound.min(available),
            None => available,
        }
    }

    /// Narrow the view to `[offset, offset + length)` of its current window
    pub fn bound(&mut self, offset: usize, length: usize) -> Result<()> {
        check_span(offset, length, self.size())?;
        self.bound_offset = self.shifted(offset)?;
        self.bound_length = Some(length);
        Ok(())
    }

    /// Move the start of the view forward by `offset`, keeping its end
    pub fn bound_from(&mut self, offset: usize) -> Result<()> {
        let size = self.size();
        if offset > size {
            return Err(FontDataError::out_of_bounds(offset, 0, size));
        }
        self.bound_offset = self.shifted(offset)?;
        self.bound_length = self.bound_length.map(|length| length - offset);
        Ok(())
    }

    fn shifted(&self, offset: usize) -> Result<usize> {
        self.bound_offset.checked_add(offset).ok_or_else(|| {
            FontDataError::Overflow(format!(
                "bound offset {} + {} overflows",
                self.bound_offset, offset
            ))
        })
    }

    pub(crate) fn sliced(&self, offset: usize, length: usize) -> Result<Self> {
        let mut slice = self.clone();
        slice.bound(offset, length)?;
        Ok(slice)
    }

    pub(crate) fn sliced_from(&self, offset: usize) -> Result<Self> {
        let mut slice = self.clone();
        slice.bound_from(offset)?;
        Ok(slice)
    }

    /// True when both views alias the same store
    pub fn shares_store_with(&self, other: &FontData) -> bool {
        Arc::ptr_eq(&self.array, &other.array)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Exactly `N` bytes at `index`, or `OutOfBounds` if any of them is outside the view
    pub(crate) fn read_array<const N: usize>(&self, index: usize) -> Result<[u8; N]> {
        let array = self.array.read();
        let mut out = [0u8; N];
        self.read_exact_in(&array, index, &mut out)?;
        Ok(out)
    }

    pub(crate) fn read_exact_in(&self, array: &ByteArray, index: usize, dst: &mut [u8]) -> Result<()> {
        if array.is_closed() {
            return Err(FontDataError::Closed);
        }
        check_span(index, dst.len(), self.length_in(array))?;
        array.read_exact_at(self.bound_offset + index, dst)
    }

    /// Up to `dst.len()` bytes at `index`; the count is short only at the end of the view
    pub(crate) fn read_into(&self, index: usize, dst: &mut [u8]) -> Result<usize> {
        let array = self.array.read();
        if array.is_closed() {
            return Err(FontDataError::Closed);
        }
        let length = self.length_in(&array);
        if index > length {
            return Err(FontDataError::out_of_bounds(index, dst.len(), length));
        }
        let n = dst.len().min(length - index);
        array.read_exact_at(self.bound_offset + index, &mut dst[..n])?;
        Ok(n)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Write all of `src` at `index`, or nothing if the span leaves the view
    pub(crate) fn write_at(&self, index: usize, src: &[u8]) -> Result<usize> {
        let mut array = self.array.write();
        if array.is_closed() {
            return Err(FontDataError::Closed);
        }
        check_span(index, src.len(), self.size_in(&array))?;
        array.put_bytes(self.bound_offset + index, src)
    }

    /// Write `src` at `index` followed by `pad` up to `length` bytes total
    ///
    /// `src` beyond `length` is ignored. The whole span is reserved up front,
    /// so on error nothing is written.
    pub(crate) fn write_padded_at(
        &self,
        index: usize,
        src: &[u8],
        length: usize,
        pad: u8,
    ) -> Result<usize> {
        let mut array = self.array.write();
        if array.is_closed() {
            return Err(FontDataError::Closed);
        }
        check_span(index, length, self.size_in(&array))?;
        if length == 0 {
            return Ok(0);
        }
        let start = self.bound_offset + index;
        let copied = src.len().min(length);
        array.fill(start, length, pad)?;
        array.put_bytes(start, &src[..copied])?;
        Ok(length)
    }

    /// Release the underlying store for every view that shares it
    pub fn close(&self) {
        self.array.write().close();
    }
}
