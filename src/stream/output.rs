//! Font output stream
//!
//! Sequential big-endian encoding over a `Write`.

use std::io::{self, Write};

use crate::codec;
use crate::error::{check_span, Result};

const PAD_CHUNK: usize = 4 * 1024;

/// Writer that encodes big-endian primitives and counts accepted bytes
#[derive(Debug)]
pub struct FontOutputStream<W> {
    inner: W,
    position: u64,
}

impl<W: Write> FontOutputStream<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Bytes accepted by the sink so far
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    // =========================================================================
    // Byte Writes
    // =========================================================================

    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.write_all(&[value])?;
        Ok(())
    }

    pub fn write_char(&mut self, value: i8) -> Result<()> {
        self.write_byte(value as u8)
    }

    /// Write all of `buf`; a sink that stops accepting bytes is an `Io` error
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        self.write_all(buf)?;
        Ok(buf.len())
    }

    /// Write `buf[offset..offset + length]`, rejecting spans outside `buf`
    pub fn write_slice(&mut self, buf: &[u8], offset: usize, length: usize) -> Result<usize> {
        let end = check_span(offset, length, buf.len())?;
        self.write_bytes(&buf[offset..end])
    }

    /// Write `count` copies of `pad` without buffering the whole run
    pub fn write_padding(&mut self, count: usize, pad: u8) -> Result<usize> {
        let chunk = [pad; PAD_CHUNK];
        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(PAD_CHUNK);
            self.write_all(&chunk[..n])?;
            remaining -= n;
        }
        Ok(count)
    }

    // =========================================================================
    // Integer Writes
    // =========================================================================

    pub fn write_ushort(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&codec::encode_ushort(value)).map(|_| ())
    }

    pub fn write_ushort_le(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&codec::encode_ushort_le(value)).map(|_| ())
    }

    pub fn write_short(&mut self, value: i16) -> Result<()> {
        self.write_ushort(value as u16)
    }

    pub fn write_uint24(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&codec::encode_uint24(value)).map(|_| ())
    }

    pub fn write_ulong(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&codec::encode_ulong(value)).map(|_| ())
    }

    pub fn write_ulong_le(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&codec::encode_ulong_le(value)).map(|_| ())
    }

    pub fn write_long(&mut self, value: i32) -> Result<()> {
        self.write_ulong(value as u32)
    }

    pub fn write_fixed(&mut self, value: i32) -> Result<()> {
        self.write_long(value)
    }

    pub fn write_date_time(&mut self, value: i64) -> Result<()> {
        self.write_bytes(&codec::encode_date_time(value)).map(|_| ())
    }
}

impl<W: Write> Write for FontOutputStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.position += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
