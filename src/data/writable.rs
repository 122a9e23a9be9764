//! Writable font data
//!
//! Extends `ReadableFontData` with big-endian encoders. Writes go through
//! the shared store, so they are visible in every overlapping view.

use std::fmt;
use std::io::Read;
use std::ops::{Deref, DerefMut};

use bytes::Bytes;

use crate::codec;
use crate::config::StoreConfig;
use crate::error::{check_span, Result};
use crate::store::ByteArray;

use super::{FontData, ReadableFontData};

/// Read/write view over font bytes
#[derive(Clone)]
pub struct WritableFontData {
    inner: ReadableFontData,
}

impl WritableFontData {
    // =========================================================================
    // Construction
    // =========================================================================

    fn from_array(array: ByteArray) -> Self {
        Self {
            inner: ReadableFontData::from_array(array),
        }
    }

    /// Non-growable buffer of exactly `size` bytes
    pub fn fixed(size: usize) -> Self {
        Self::from_array(ByteArray::fixed(size))
    }

    /// Growable buffer with `size_hint` bytes preallocated (0 starts empty)
    pub fn growable(size_hint: usize) -> Self {
        Self::from_array(ByteArray::growable_with_capacity(size_hint))
    }

    /// Growable buffer whose strategy comes from `config`
    pub fn with_config(config: &StoreConfig) -> Result<Self> {
        Ok(Self::from_array(ByteArray::with_config(config)?))
    }

    /// Non-growable buffer that takes ownership of `bytes`
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::from_array(ByteArray::from_vec(bytes))
    }

    /// Takes over the buffer; copies only when `bytes` is shared
    pub fn from_bytes(bytes: Bytes) -> Self {
        Self::from_vec(Vec::from(bytes))
    }

    /// Writable copy of the visible bytes of `source`
    ///
    /// The copy is growable when the source store is, and keeps the
    /// source's checksum ranges. Nothing is shared with `source`.
    pub fn copy_of(source: &ReadableFontData) -> Result<Self> {
        let bytes = source.to_vec()?;
        let growable = source.data.array().read().growable();
        let copy = if growable {
            Self::from_array(ByteArray::growable_from_vec(bytes))
        } else {
            Self::from_vec(bytes)
        };
        if let Some(ranges) = source.checksum_ranges() {
            copy.set_checksum_ranges(&ranges);
        }
        Ok(copy)
    }

    fn from_data(data: FontData) -> Self {
        Self {
            inner: ReadableFontData::from_data(data),
        }
    }

    /// Writable view of `[offset, offset + length)` sharing this store
    pub fn slice(&self, offset: usize, length: usize) -> Result<WritableFontData> {
        Ok(Self::from_data(self.inner.data.sliced(offset, length)?))
    }

    /// Writable view from `offset` to the end, sharing this store
    pub fn slice_from(&self, offset: usize) -> Result<WritableFontData> {
        Ok(Self::from_data(self.inner.data.sliced_from(offset)?))
    }

    /// Read-only view over the same store (no copy)
    pub fn as_readable(&self) -> ReadableFontData {
        self.inner.clone()
    }

    // =========================================================================
    // Byte Writes
    // =========================================================================

    pub fn write_byte(&self, index: usize, value: u8) -> Result<usize> {
        self.inner.data.write_at(index, &[value])
    }

    pub fn write_char(&self, index: usize, value: i8) -> Result<usize> {
        self.write_byte(index, value as u8)
    }

    /// Write all of `src` at `index`; nothing is written if it does not fit
    pub fn write_bytes(&self, index: usize, src: &[u8]) -> Result<usize> {
        self.inner.data.write_at(index, src)
    }

    /// Write `length` bytes: as much of `src` as fits, then `pad` for the rest
    pub fn write_bytes_pad(&self, index: usize, src: &[u8], length: usize, pad: u8) -> Result<usize> {
        self.inner.data.write_padded_at(index, src, length, pad)
    }

    /// Write `count` zero bytes
    pub fn write_padding(&self, index: usize, count: usize) -> Result<usize> {
        self.write_padding_with(index, count, 0)
    }

    pub fn write_padding_with(&self, index: usize, count: usize, pad: u8) -> Result<usize> {
        self.inner.data.write_padded_at(index, &[], count, pad)
    }

    // =========================================================================
    // Integer Writes
    // =========================================================================

    pub fn write_ushort(&self, index: usize, value: u16) -> Result<usize> {
        self.write_bytes(index, &codec::encode_ushort(value))
    }

    pub fn write_ushort_le(&self, index: usize, value: u16) -> Result<usize> {
        self.write_bytes(index, &codec::encode_ushort_le(value))
    }

    pub fn write_short(&self, index: usize, value: i16) -> Result<usize> {
        self.write_ushort(index, value as u16)
    }

    /// Low 24 bits of `value`
    pub fn write_uint24(&self, index: usize, value: u32) -> Result<usize> {
        self.write_bytes(index, &codec::encode_uint24(value))
    }

    pub fn write_ulong(&self, index: usize, value: u32) -> Result<usize> {
        self.write_bytes(index, &codec::encode_ulong(value))
    }

    pub fn write_ulong_le(&self, index: usize, value: u32) -> Result<usize> {
        self.write_bytes(index, &codec::encode_ulong_le(value))
    }

    pub fn write_long(&self, index: usize, value: i32) -> Result<usize> {
        self.write_ulong(index, value as u32)
    }

    pub fn write_fixed(&self, index: usize, value: i32) -> Result<usize> {
        self.write_long(index, value)
    }

    /// LONGDATETIME from raw seconds since 1904-01-01T00:00:00
    pub fn write_date_time(&self, index: usize, value: i64) -> Result<usize> {
        self.write_bytes(index, &codec::encode_date_time(value))
    }

    // =========================================================================
    // Bulk Copy
    // =========================================================================

    /// Fill from `reader` starting at `index`, up to `length` bytes or end of input
    pub fn copy_from_reader<R: Read>(&self, reader: &mut R, index: usize, length: usize) -> Result<usize> {
        check_span(index, length, self.size())?;
        let absolute = self.data_offset() + index;
        self.inner
            .data
            .array()
            .write()
            .copy_from_reader(reader, absolute, length)
    }
}

impl Deref for WritableFontData {
    type Target = ReadableFontData;

    fn deref(&self) -> &ReadableFontData {
        &self.inner
    }
}

impl DerefMut for WritableFontData {
    fn deref_mut(&mut self) -> &mut ReadableFontData {
        &mut self.inner
    }
}

impl fmt::Debug for WritableFontData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WritableFontData")
            .field("offset", &self.data_offset())
            .field("length", &self.length())
            .field("size", &self.size())
            .finish()
    }
}
