//! Doubling growable store
//!
//! One contiguous allocation. A write past the end reallocates to
//! `max(needed, 2 * capacity)` and copies the existing bytes, giving
//! amortized O(1) appends.

use std::fmt;

use crate::error::{FontDataError, Result};

use super::{ByteStore, UNBOUNDED_SIZE};

/// Growable store backed by a single `Vec<u8>`
pub struct GrowableStore {
    data: Vec<u8>,
}

impl GrowableStore {
    /// Empty store that allocates on first write
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Store with `capacity` zeroed bytes allocated up front
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
        }
    }

    /// Take ownership of existing bytes as the initial allocation
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { data: bytes }
    }
}

impl Default for GrowableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteStore for GrowableStore {
    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn max_size(&self) -> usize {
        UNBOUNDED_SIZE
    }

    fn growable(&self) -> bool {
        true
    }

    fn ensure_capacity(&mut self, needed: usize) -> Result<()> {
        let current = self.data.len();
        if needed <= current {
            return Ok(());
        }
        if needed > UNBOUNDED_SIZE {
            return Err(FontDataError::out_of_bounds(0, needed, UNBOUNDED_SIZE));
        }

        let new_len = needed.max(current.saturating_mul(2)).min(UNBOUNDED_SIZE);
        self.data
            .try_reserve_exact(new_len - current)
            .map_err(|e| FontDataError::Overflow(format!("cannot grow store to {} bytes: {}", new_len, e)))?;
        self.data.resize(new_len, 0);

        tracing::trace!(from = current, to = new_len, "Reallocated growable store");
        Ok(())
    }

    fn read_at(&self, index: usize, dst: &mut [u8]) {
        dst.copy_from_slice(&self.data[index..index + dst.len()]);
    }

    fn write_at(&mut self, index: usize, src: &[u8]) {
        self.data[index..index + src.len()].copy_from_slice(src);
    }

    fn release(&mut self) {
        self.data = Vec::new();
    }
}

impl fmt::Debug for GrowableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableStore")
            .field("capacity", &self.data.len())
            .finish()
    }
}
