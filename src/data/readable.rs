//! Readable font data
//!
//! Bounds-checked, big-endian decoding at view-relative offsets.

use std::fmt;
use std::io::Write;
use std::time::SystemTime;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::codec;
use crate::error::{FontDataError, Result};
use crate::store::ByteArray;

use super::checksum::ChecksumState;
use super::{FontData, WritableFontData};

/// Read-only view over font bytes
///
/// ## Concurrency
/// - Reads take a shared lock on the store for the duration of one primitive
/// - `checksum()` is serialized per view: one caller computes, the rest
///   wait on the mutex and get the cached value
pub struct ReadableFontData {
    pub(crate) data: FontData,
    checksum: Mutex<ChecksumState>,
}

impl ReadableFontData {
    // =========================================================================
    // Construction
    // =========================================================================

    pub(crate) fn from_data(data: FontData) -> Self {
        Self {
            data,
            checksum: Mutex::new(ChecksumState::default()),
        }
    }

    /// View over an existing store
    pub fn from_array(array: ByteArray) -> Self {
        Self::from_data(FontData::new(array))
    }

    /// View that takes ownership of `bytes`
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::from_array(ByteArray::from_vec(bytes))
    }

    /// View over the contents of a `Bytes` buffer, copying only if it is shared
    pub fn from_bytes(bytes: Bytes) -> Self {
        Self::from_vec(Vec::from(bytes))
    }

    /// Read-only copy of the visible bytes of `source`, keeping its checksum ranges
    pub fn copy_of(source: &ReadableFontData) -> Result<Self> {
        let copy = Self::from_vec(source.to_vec()?);
        if let Some(ranges) = source.checksum_ranges() {
            copy.set_checksum_ranges(&ranges);
        }
        Ok(copy)
    }

    // =========================================================================
    // Bounds and Slicing
    // =========================================================================

    pub fn length(&self) -> usize {
        self.data.length()
    }

    pub fn size(&self) -> usize {
        self.data.size()
    }

    pub fn data_offset(&self) -> usize {
        self.data.data_offset()
    }

    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Restrict this view to `[offset, offset + length)`
    pub fn bound(&mut self, offset: usize, length: usize) -> Result<()> {
        self.data.bound(offset, length)?;
        self.checksum.get_mut().invalidate();
        Ok(())
    }

    /// Drop the first `offset` bytes of this view
    pub fn bound_from(&mut self, offset: usize) -> Result<()> {
        self.data.bound_from(offset)?;
        self.checksum.get_mut().invalidate();
        Ok(())
    }

    /// New view of `[offset, offset + length)` sharing this view's store
    pub fn slice(&self, offset: usize, length: usize) -> Result<ReadableFontData> {
        Ok(Self::from_data(self.data.sliced(offset, length)?))
    }

    /// New view from `offset` to the end, sharing this view's store
    pub fn slice_from(&self, offset: usize) -> Result<ReadableFontData> {
        Ok(Self::from_data(self.data.sliced_from(offset)?))
    }

    pub fn shares_store_with(&self, other: &ReadableFontData) -> bool {
        self.data.shares_store_with(&other.data)
    }

    /// Release the store for this view and every view sharing it
    pub fn close(&self) {
        self.data.close();
    }

    // =========================================================================
    // Integer Reads
    // =========================================================================

    pub fn read_ubyte(&self, index: usize) -> Result<u8> {
        Ok(self.data.read_array::<1>(index)?[0])
    }

    pub fn read_byte(&self, index: usize) -> Result<i8> {
        Ok(self.read_ubyte(index)? as i8)
    }

    /// Signed 8-bit CHAR
    pub fn read_char(&self, index: usize) -> Result<i8> {
        self.read_byte(index)
    }

    pub fn read_ushort(&self, index: usize) -> Result<u16> {
        Ok(codec::decode_ushort(self.data.read_array(index)?))
    }

    pub fn read_ushort_le(&self, index: usize) -> Result<u16> {
        Ok(codec::decode_ushort_le(self.data.read_array(index)?))
    }

    pub fn read_short(&self, index: usize) -> Result<i16> {
        Ok(self.read_ushort(index)? as i16)
    }

    pub fn read_uint24(&self, index: usize) -> Result<u32> {
        Ok(codec::decode_uint24(self.data.read_array(index)?))
    }

    pub fn read_ulong(&self, index: usize) -> Result<u32> {
        Ok(codec::decode_ulong(self.data.read_array(index)?))
    }

    /// ULONG as a signed int; `Overflow` if the high bit is set
    pub fn read_ulong_as_int(&self, index: usize) -> Result<i32> {
        codec::ulong_as_int(self.read_ulong(index)?)
    }

    pub fn read_ulong_le(&self, index: usize) -> Result<u32> {
        Ok(codec::decode_ulong_le(self.data.read_array(index)?))
    }

    pub fn read_long(&self, index: usize) -> Result<i32> {
        Ok(self.read_ulong(index)? as i32)
    }

    /// 16.16 fixed-point value in its raw 32-bit form
    pub fn read_fixed(&self, index: usize) -> Result<i32> {
        self.read_long(index)
    }

    pub fn read_fword(&self, index: usize) -> Result<i16> {
        self.read_short(index)
    }

    pub fn read_ufword(&self, index: usize) -> Result<u16> {
        self.read_ushort(index)
    }

    /// LONGDATETIME as raw seconds since 1904-01-01T00:00:00
    pub fn read_date_time_as_long(&self, index: usize) -> Result<i64> {
        Ok(codec::decode_date_time(self.data.read_array(index)?))
    }

    // =========================================================================
    // Semantic Reads (raw forms only)
    // =========================================================================

    pub fn read_f2dot14(&self, _index: usize) -> Result<f32> {
        Err(FontDataError::Unsupported("F2DOT14 decoding; read the raw value with read_short"))
    }

    pub fn read_long_date_time(&self, _index: usize) -> Result<SystemTime> {
        Err(FontDataError::Unsupported(
            "LONGDATETIME decoding; read the raw value with read_date_time_as_long",
        ))
    }

    pub fn read_funit(&self, _index: usize) -> Result<f32> {
        Err(FontDataError::Unsupported("FUNIT decoding; read the raw value with read_fword"))
    }

    // =========================================================================
    // Bulk Reads
    // =========================================================================

    /// Copy up to `dst.len()` bytes from `index`; returns the count copied
    ///
    /// The count is short only when the view ends first. Starting past
    /// the end of the view is `OutOfBounds`.
    pub fn read_bytes(&self, index: usize, dst: &mut [u8]) -> Result<usize> {
        self.data.read_into(index, dst)
    }

    /// Visible bytes as an owned vector
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let array = self.data.array().read();
        let mut out = vec![0u8; self.data.length_in(&array)];
        self.data.read_exact_in(&array, 0, &mut out)?;
        Ok(out)
    }

    pub fn to_bytes(&self) -> Result<Bytes> {
        Ok(Bytes::from(self.to_vec()?))
    }

    /// Write the visible bytes into `dst` starting at its offset 0
    pub fn copy_to(&self, dst: &WritableFontData) -> Result<usize> {
        // Buffer first: `dst` may share this view's store
        let bytes = self.to_vec()?;
        dst.write_bytes(0, &bytes)
    }

    /// Stream the visible bytes to `writer`
    pub fn copy_to_writer<W: Write>(&self, writer: &mut W) -> Result<usize> {
        let array = self.data.array().read();
        if array.is_closed() {
            return Err(FontDataError::Closed);
        }
        let length = self.data.length_in(&array);
        array.copy_range_to_writer(self.data.data_offset(), length, writer)
    }

    // =========================================================================
    // Checksum
    // =========================================================================

    /// OpenType checksum of the configured ranges (default: the whole view)
    pub fn checksum(&self) -> Result<u32> {
        let mut state = self.checksum.lock();
        let array = self.data.array().read();
        state.checksum(&self.data, &array)
    }

    /// Restrict the checksum to `[low, high)` pairs given as a flat list
    ///
    /// An odd trailing bound runs to the end of the view. An empty list
    /// restores whole-view checksumming. Invalidates the cached value.
    pub fn set_checksum_ranges(&self, bounds: &[usize]) {
        self.checksum.lock().set_ranges(bounds);
    }

    pub fn checksum_ranges(&self) -> Option<Vec<usize>> {
        self.checksum.lock().ranges().map(<[usize]>::to_vec)
    }
}

impl Clone for ReadableFontData {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            checksum: Mutex::new(self.checksum.lock().clone()),
        }
    }
}

impl fmt::Debug for ReadableFontData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadableFontData")
            .field("offset", &self.data.data_offset())
            .field("length", &self.data.length())
            .field("bounded", &self.data.is_bounded())
            .finish()
    }
}
