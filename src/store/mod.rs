//! Backing Store Module
//!
//! Raw byte storage behind every font data view.
//!
//! ## Responsibilities
//! - Hold the bytes of a font, a table, or a font under construction
//! - Track the filled length separately from the capacity
//! - Grow on demand, either by reallocation or by chaining segments
//! - Release storage on close
//!
//! ## Strategies
//! ```text
//! Fixed      ┌──────────────────────────────┐
//!            │ one allocation, never grows  │
//!            └──────────────────────────────┘
//! Doubling   ┌──────────┐ → ┌────────────────────┐
//!            │ old      │   │ old (copied) + new │
//!            └──────────┘   └────────────────────┘
//! Segmented  ┌──┐┌──┐┌────┐┌────────┐┌────────────────┐
//!            │s0││s1││ s2 ││   s3   ││       s4       │  (no copies)
//!            └──┘└──┘└────┘└────────┘└────────────────┘
//! ```

mod byte_array;
mod fixed;
mod growable;
mod segmented;

use std::fmt;

use crate::error::Result;

pub use byte_array::ByteArray;
pub use fixed::FixedStore;
pub use growable::GrowableStore;
pub use segmented::SegmentedStore;

/// Logical size reported by growable stores ("unbounded")
pub const UNBOUNDED_SIZE: usize = isize::MAX as usize;

/// Storage strategy behind a `ByteArray`
///
/// Implementations only move bytes. Bounds, filled length and the
/// closed state are enforced by `ByteArray`, so `read_at`/`write_at`
/// may assume the span lies within `capacity()`.
pub trait ByteStore: Send + Sync + fmt::Debug {
    /// Bytes currently allocated
    fn capacity(&self) -> usize;

    /// Largest size this store can ever reach
    fn max_size(&self) -> usize;

    /// Whether capacity can increase after construction
    fn growable(&self) -> bool;

    /// Make `[0, needed)` addressable
    fn ensure_capacity(&mut self, needed: usize) -> Result<()>;

    /// Copy `dst.len()` bytes starting at `index` into `dst`
    fn read_at(&self, index: usize, dst: &mut [u8]);

    /// Copy `src` into the store starting at `index`
    fn write_at(&mut self, index: usize, src: &[u8]);

    /// Drop all allocated storage
    fn release(&mut self);
}
