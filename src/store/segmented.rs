//! Segmented growable store
//!
//! Storage is a chain of segments that double in size:
//!
//! ```text
//! segment:   0            1            2              3
//! covers:    [0, 2^L)     [2^L, 2^L+1) [2^L+1, 2^L+2) [2^L+2, 2^L+3)
//! size:      2^L          2^L          2^(L+1)        2^(L+2)
//! ```
//!
//! so with `k` segments the capacity is `2^(L + k - 1)`. An index below
//! `2^L` lives in segment 0; any other index with bit length `b` lives in
//! segment `b - L` at offset `index - 2^(b - 1)`. Growth appends segments
//! and never moves bytes already written.

use std::fmt;

use crate::config::{MAX_SEGMENT_LOW_BITS, MIN_SEGMENT_LOW_BITS};
use crate::error::{FontDataError, Result};

use super::{ByteStore, UNBOUNDED_SIZE};

/// Growable store made of lazily allocated, ever larger segments
pub struct SegmentedStore {
    low_bits: u32,
    segments: Vec<Box<[u8]>>,
}

impl SegmentedStore {
    /// Empty store whose first segment holds `2^low_bits` bytes
    pub fn new(low_bits: u32) -> Result<Self> {
        if !(MIN_SEGMENT_LOW_BITS..=MAX_SEGMENT_LOW_BITS).contains(&low_bits) {
            return Err(FontDataError::Config(format!(
                "segment_low_bits must be in {}..={}, got {}",
                MIN_SEGMENT_LOW_BITS, MAX_SEGMENT_LOW_BITS, low_bits
            )));
        }
        Ok(Self {
            low_bits,
            segments: Vec::new(),
        })
    }

    /// Number of segments allocated so far
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn segment_len(&self, segment: usize) -> usize {
        if segment == 0 {
            1 << self.low_bits
        } else {
            1 << (segment - 1 + self.low_bits as usize)
        }
    }

    /// Map an absolute index to (segment, offset within segment)
    fn locate(&self, index: usize) -> (usize, usize) {
        if index < (1 << self.low_bits) {
            return (0, index);
        }
        let bits = (usize::BITS - index.leading_zeros()) as usize;
        let segment = bits - self.low_bits as usize;
        (segment, index - (1 << (bits - 1)))
    }

    fn allocate_next(&mut self) -> Result<()> {
        let len = self.segment_len(self.segments.len());
        let mut segment = Vec::new();
        segment
            .try_reserve_exact(len)
            .map_err(|e| FontDataError::Overflow(format!("cannot allocate {}-byte segment: {}", len, e)))?;
        segment.resize(len, 0);
        self.segments.push(segment.into_boxed_slice());

        tracing::trace!(
            segment = self.segments.len() - 1,
            len,
            capacity = self.capacity(),
            "Allocated store segment"
        );
        Ok(())
    }
}

impl ByteStore for SegmentedStore {
    fn capacity(&self) -> usize {
        match self.segments.len() {
            0 => 0,
            n => 1 << (self.low_bits as usize + n - 1),
        }
    }

    fn max_size(&self) -> usize {
        UNBOUNDED_SIZE
    }

    fn growable(&self) -> bool {
        true
    }

    fn ensure_capacity(&mut self, needed: usize) -> Result<()> {
        if needed > UNBOUNDED_SIZE {
            return Err(FontDataError::out_of_bounds(0, needed, UNBOUNDED_SIZE));
        }
        while self.capacity() < needed {
            self.allocate_next()?;
        }
        Ok(())
    }

    fn read_at(&self, index: usize, dst: &mut [u8]) {
        let mut done = 0;
        while done < dst.len() {
            let (segment, offset) = self.locate(index + done);
            let chunk = &self.segments[segment][offset..];
            let n = chunk.len().min(dst.len() - done);
            dst[done..done + n].copy_from_slice(&chunk[..n]);
            done += n;
        }
    }

    fn write_at(&mut self, index: usize, src: &[u8]) {
        let mut done = 0;
        while done < src.len() {
            let (segment, offset) = self.locate(index + done);
            let chunk = &mut self.segments[segment][offset..];
            let n = chunk.len().min(src.len() - done);
            chunk[..n].copy_from_slice(&src[done..done + n]);
            done += n;
        }
    }

    fn release(&mut self) {
        self.segments = Vec::new();
    }
}

impl fmt::Debug for SegmentedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentedStore")
            .field("low_bits", &self.low_bits)
            .field("segments", &self.segments.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_segment_boundaries() {
        let store = SegmentedStore::new(4).unwrap();

        assert_eq!(store.locate(0), (0, 0));
        assert_eq!(store.locate(15), (0, 15));
        assert_eq!(store.locate(16), (1, 0));
        assert_eq!(store.locate(31), (1, 15));
        assert_eq!(store.locate(32), (2, 0));
        assert_eq!(store.locate(63), (2, 31));
        assert_eq!(store.locate(64), (3, 0));
    }

    #[test]
    fn test_capacity_doubles_per_segment() {
        let mut store = SegmentedStore::new(4).unwrap();
        assert_eq!(store.capacity(), 0);

        store.ensure_capacity(1).unwrap();
        assert_eq!(store.capacity(), 16);

        store.ensure_capacity(17).unwrap();
        assert_eq!(store.capacity(), 32);
        assert_eq!(store.segment_count(), 2);

        store.ensure_capacity(100).unwrap();
        assert_eq!(store.capacity(), 128);
        assert_eq!(store.segment_count(), 4);
    }

    #[test]
    fn test_write_spanning_segments() {
        let mut store = SegmentedStore::new(2).unwrap();
        let src: Vec<u8> = (0..40).collect();

        store.ensure_capacity(src.len()).unwrap();
        store.write_at(0, &src);

        let mut dst = vec![0u8; 40];
        store.read_at(0, &mut dst);
        assert_eq!(dst, src);

        let mut mid = [0u8; 6];
        store.read_at(5, &mut mid);
        assert_eq!(mid, [5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_invalid_low_bits() {
        assert!(SegmentedStore::new(0).is_err());
        assert!(SegmentedStore::new(31).is_err());
    }
}
