//! ByteArray
//!
//! Checked access to a `ByteStore`: filled-length tracking, capacity
//! checks, the closed state and a write generation counter.

use std::io::{Read, Write};

use crate::config::{GrowthStrategy, StoreConfig};
use crate::error::{check_span, FontDataError, Result};

use super::{ByteStore, FixedStore, GrowableStore, SegmentedStore};

/// Chunk size used when streaming bytes in or out of a store
const COPY_CHUNK: usize = 8 * 1024;

/// A byte store plus the bookkeeping every strategy shares
///
/// ## Invariants
/// - `0 <= length() <= size()`
/// - reads past `length()` fail, writes past `size()` fail
/// - after `close()` every access reports `FontDataError::Closed`
#[derive(Debug)]
pub struct ByteArray {
    store: Box<dyn ByteStore>,
    filled_length: usize,
    /// Bumped on every successful write; lets cached checksums detect staleness
    generation: u64,
    closed: bool,
}

impl ByteArray {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wrap any store; the filled length starts at zero
    pub fn from_store(store: Box<dyn ByteStore>) -> Self {
        Self {
            store,
            filled_length: 0,
            generation: 0,
            closed: false,
        }
    }

    /// Fixed store of exactly `size` bytes, initially empty
    pub fn fixed(size: usize) -> Self {
        Self::from_store(Box::new(FixedStore::new(size)))
    }

    /// Doubling growable store with `capacity` bytes allocated up front
    pub fn growable_with_capacity(capacity: usize) -> Self {
        Self::from_store(Box::new(GrowableStore::with_capacity(capacity)))
    }

    /// Segmented growable store whose first segment holds `2^low_bits` bytes
    pub fn segmented(low_bits: u32) -> Result<Self> {
        Ok(Self::from_store(Box::new(SegmentedStore::new(low_bits)?)))
    }

    /// Growable store built from a config
    pub fn with_config(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        match config.growth {
            GrowthStrategy::Doubling => Ok(Self::growable_with_capacity(config.initial_capacity)),
            GrowthStrategy::Segmented => Self::segmented(config.segment_low_bits),
        }
    }

    /// Fixed store that takes ownership of `bytes`, all of them filled
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let filled_length = bytes.len();
        Self {
            store: Box::new(FixedStore::from_vec(bytes)),
            filled_length,
            generation: 0,
            closed: false,
        }
    }

    /// Growable store seeded with `bytes`, all of them filled
    pub fn growable_from_vec(bytes: Vec<u8>) -> Self {
        let filled_length = bytes.len();
        Self {
            store: Box::new(GrowableStore::from_vec(bytes)),
            filled_length,
            generation: 0,
            closed: false,
        }
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Number of bytes written so far (the readable extent)
    pub fn length(&self) -> usize {
        self.filled_length
    }

    /// Maximum size; growable stores report `UNBOUNDED_SIZE`
    pub fn size(&self) -> usize {
        if self.closed {
            0
        } else {
            self.store.max_size()
        }
    }

    /// Bytes currently allocated
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn growable(&self) -> bool {
        self.store.growable()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Set the filled length directly; bytes never written read as zero
    pub fn set_filled_length(&mut self, length: usize) -> Result<()> {
        self.check_open()?;
        check_span(0, length, self.store.max_size())?;
        self.store.ensure_capacity(length)?;
        self.filled_length = length;
        self.generation = self.generation.wrapping_add(1);
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Byte at `index`, or `None` past the filled length
    pub fn get(&self, index: usize) -> Option<u8> {
        if self.closed || index >= self.filled_length {
            return None;
        }
        let mut b = [0u8; 1];
        self.store.read_at(index, &mut b);
        Some(b[0])
    }

    /// Copy up to `dst.len()` bytes starting at `index`
    ///
    /// Returns the number of bytes copied, which is smaller than
    /// `dst.len()` only when the filled length ends first.
    pub fn get_bytes(&self, index: usize, dst: &mut [u8]) -> Result<usize> {
        self.check_open()?;
        if index > self.filled_length {
            return Err(FontDataError::out_of_bounds(index, dst.len(), self.filled_length));
        }
        let n = dst.len().min(self.filled_length - index);
        self.store.read_at(index, &mut dst[..n]);
        Ok(n)
    }

    /// Fill all of `dst` from `index`, failing if any byte is past the filled length
    pub fn read_exact_at(&self, index: usize, dst: &mut [u8]) -> Result<()> {
        self.check_open()?;
        check_span(index, dst.len(), self.filled_length)?;
        self.store.read_at(index, dst);
        Ok(())
    }

    // =========================================================================
    // Writes
    // =========================================================================

    pub fn put(&mut self, index: usize, byte: u8) -> Result<()> {
        self.put_bytes(index, &[byte]).map(|_| ())
    }

    /// Write all of `src` at `index`, growing the store if it can
    ///
    /// Nothing is written unless the whole span fits.
    pub fn put_bytes(&mut self, index: usize, src: &[u8]) -> Result<usize> {
        self.check_open()?;
        let end = check_span(index, src.len(), self.store.max_size())?;
        if src.is_empty() {
            return Ok(0);
        }
        self.store.ensure_capacity(end)?;
        self.store.write_at(index, src);
        self.filled_length = self.filled_length.max(end);
        self.generation = self.generation.wrapping_add(1);
        Ok(src.len())
    }

    /// Write `count` copies of `pad` at `index`
    ///
    /// Capacity for the whole run is reserved before anything is written, so
    /// a request the store cannot hold fails with `Overflow` and leaves it
    /// untouched.
    pub fn fill(&mut self, index: usize, count: usize, pad: u8) -> Result<usize> {
        self.check_open()?;
        let end = check_span(index, count, self.store.max_size())?;
        if count == 0 {
            return Ok(0);
        }
        self.store.ensure_capacity(end)?;
        let chunk = [pad; COPY_CHUNK];
        let mut at = index;
        while at < end {
            let n = (end - at).min(COPY_CHUNK);
            self.store.write_at(at, &chunk[..n]);
            at += n;
        }
        self.filled_length = self.filled_length.max(end);
        self.generation = self.generation.wrapping_add(1);
        Ok(count)
    }

    // =========================================================================
    // Bulk Copy
    // =========================================================================

    /// Copy the filled bytes into `dst` starting at its index 0
    pub fn copy_to(&self, dst: &mut ByteArray) -> Result<usize> {
        self.copy_range_to(0, self.filled_length, dst, 0)
    }

    /// Copy `[src_index, src_index + length)` into `dst` at `dst_index`
    pub fn copy_range_to(
        &self,
        src_index: usize,
        length: usize,
        dst: &mut ByteArray,
        dst_index: usize,
    ) -> Result<usize> {
        self.check_open()?;
        check_span(src_index, length, self.filled_length)?;
        check_span(dst_index, length, dst.size())?;

        let mut buf = vec![0u8; COPY_CHUNK.min(length)];
        let mut done = 0;
        while done < length {
            let n = buf.len().min(length - done);
            self.store.read_at(src_index + done, &mut buf[..n]);
            dst.put_bytes(dst_index + done, &buf[..n])?;
            done += n;
        }
        Ok(done)
    }

    /// Write the filled bytes to `writer`
    pub fn copy_to_writer<W: Write>(&self, writer: &mut W) -> Result<usize> {
        self.copy_range_to_writer(0, self.filled_length, writer)
    }

    /// Write `[index, index + length)` to `writer`
    pub fn copy_range_to_writer<W: Write>(
        &self,
        index: usize,
        length: usize,
        writer: &mut W,
    ) -> Result<usize> {
        self.check_open()?;
        check_span(index, length, self.filled_length)?;

        let mut buf = vec![0u8; COPY_CHUNK.min(length)];
        let mut done = 0;
        while done < length {
            let n = buf.len().min(length - done);
            self.store.read_at(index + done, &mut buf[..n]);
            writer.write_all(&buf[..n])?;
            done += n;
        }
        Ok(done)
    }

    /// Append up to `length` bytes from `reader` at `index`
    ///
    /// Stops early at end of input; returns the number of bytes copied.
    pub fn copy_from_reader<R: Read>(
        &mut self,
        reader: &mut R,
        index: usize,
        length: usize,
    ) -> Result<usize> {
        self.check_open()?;
        check_span(index, length, self.store.max_size())?;

        let mut buf = vec![0u8; COPY_CHUNK.min(length)];
        let mut done = 0;
        while done < length {
            let want = buf.len().min(length - done);
            let n = match reader.read(&mut buf[..want]) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.put_bytes(index + done, &buf[..n])?;
            done += n;
        }
        Ok(done)
    }

    /// Filled bytes as an owned vector
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.filled_length];
        self.read_exact_at(0, &mut out)?;
        Ok(out)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Release the storage; later accesses fail with `Closed`
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        tracing::debug!(
            length = self.filled_length,
            capacity = self.store.capacity(),
            "Closing byte array"
        );
        self.store.release();
        self.filled_length = 0;
        self.closed = true;
    }

    fn check_open(&self) -> Result<()> {
        if self.closed {
            return Err(FontDataError::Closed);
        }
        Ok(())
    }
}
