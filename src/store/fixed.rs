//! Fixed-capacity store
//!
//! A single allocation whose size is set at construction.

use std::fmt;

use crate::error::{FontDataError, Result};

use super::ByteStore;

/// Non-growable store backed by one boxed slice
pub struct FixedStore {
    data: Box<[u8]>,
}

impl FixedStore {
    /// Zero-filled store of exactly `size` bytes
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0u8; size].into_boxed_slice(),
        }
    }

    /// Take ownership of existing bytes; capacity is `bytes.len()`
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            data: bytes.into_boxed_slice(),
        }
    }
}

impl ByteStore for FixedStore {
    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn max_size(&self) -> usize {
        self.data.len()
    }

    fn growable(&self) -> bool {
        false
    }

    fn ensure_capacity(&mut self, needed: usize) -> Result<()> {
        if needed > self.data.len() {
            return Err(FontDataError::out_of_bounds(0, needed, self.data.len()));
        }
        Ok(())
    }

    fn read_at(&self, index: usize, dst: &mut [u8]) {
        dst.copy_from_slice(&self.data[index..index + dst.len()]);
    }

    fn write_at(&mut self, index: usize, src: &[u8]) {
        self.data[index..index + src.len()].copy_from_slice(src);
    }

    fn release(&mut self) {
        self.data = Box::default();
    }
}

impl fmt::Debug for FixedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedStore")
            .field("capacity", &self.data.len())
            .finish()
    }
}
