//! Font input stream
//!
//! Sequential, optionally length-bounded decoding over a `Read`.

use std::io::{self, Read};
use std::time::SystemTime;

use crate::codec;
use crate::error::{FontDataError, Result};

/// Reader that decodes big-endian primitives and counts consumed bytes
#[derive(Debug)]
pub struct FontInputStream<R> {
    inner: R,
    position: u64,
    /// Bytes this stream may hand out in total; `None` reads to end of input
    length: Option<u64>,
}

impl<R: Read> FontInputStream<R> {
    /// Unbounded stream over `inner`
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            position: 0,
            length: None,
        }
    }

    /// Stream that ends after `length` bytes even if `inner` has more
    pub fn bounded(inner: R, length: u64) -> Self {
        Self {
            inner,
            position: 0,
            length: Some(length),
        }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bytes left before the bound, if bounded
    pub fn remaining(&self) -> Option<u64> {
        self.length.map(|length| length - self.position)
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Advance by up to `count` bytes without decoding; returns bytes skipped
    pub fn skip(&mut self, count: u64) -> Result<u64> {
        let skipped = io::copy(&mut self.by_ref().take(count), &mut io::sink())?;
        Ok(skipped)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    // =========================================================================
    // Primitive Reads
    // =========================================================================

    pub fn read_ubyte(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_byte(&mut self) -> Result<i8> {
        Ok(self.read_ubyte()? as i8)
    }

    pub fn read_char(&mut self) -> Result<i8> {
        self.read_byte()
    }

    pub fn read_ushort(&mut self) -> Result<u16> {
        Ok(codec::decode_ushort(self.read_array()?))
    }

    pub fn read_ushort_le(&mut self) -> Result<u16> {
        Ok(codec::decode_ushort_le(self.read_array()?))
    }

    pub fn read_short(&mut self) -> Result<i16> {
        Ok(self.read_ushort()? as i16)
    }

    pub fn read_uint24(&mut self) -> Result<u32> {
        Ok(codec::decode_uint24(self.read_array()?))
    }

    pub fn read_ulong(&mut self) -> Result<u32> {
        Ok(codec::decode_ulong(self.read_array()?))
    }

    pub fn read_ulong_as_int(&mut self) -> Result<i32> {
        codec::ulong_as_int(self.read_ulong()?)
    }

    pub fn read_ulong_le(&mut self) -> Result<u32> {
        Ok(codec::decode_ulong_le(self.read_array()?))
    }

    pub fn read_long(&mut self) -> Result<i32> {
        Ok(self.read_ulong()? as i32)
    }

    pub fn read_fixed(&mut self) -> Result<i32> {
        self.read_long()
    }

    pub fn read_fword(&mut self) -> Result<i16> {
        self.read_short()
    }

    pub fn read_ufword(&mut self) -> Result<u16> {
        self.read_ushort()
    }

    pub fn read_date_time_as_long(&mut self) -> Result<i64> {
        Ok(codec::decode_date_time(self.read_array()?))
    }

    pub fn read_f2dot14(&mut self) -> Result<f32> {
        Err(FontDataError::Unsupported("F2DOT14 decoding; read the raw value with read_short"))
    }

    pub fn read_long_date_time(&mut self) -> Result<SystemTime> {
        Err(FontDataError::Unsupported(
            "LONGDATETIME decoding; read the raw value with read_date_time_as_long",
        ))
    }

    pub fn read_funit(&mut self) -> Result<f32> {
        Err(FontDataError::Unsupported("FUNIT decoding; read the raw value with read_fword"))
    }

    /// Fill as much of `buf` as the input (and bound) allow; returns the count
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut done = 0;
        while done < buf.len() {
            match self.read(&mut buf[done..]) {
                Ok(0) => break,
                Ok(n) => done += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(done)
    }
}

impl<R: Read> Read for FontInputStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let max = match self.length {
            Some(length) => {
                let left = length.saturating_sub(self.position);
                buf.len().min(usize::try_from(left).unwrap_or(usize::MAX))
            }
            None => buf.len(),
        };
        if max == 0 {
            return Ok(0);
        }
        let n = self.inner.read(&mut buf[..max])?;
        self.position += n as u64;
        Ok(n)
    }
}
