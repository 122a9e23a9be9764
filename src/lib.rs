//! # fontdata
//!
//! Binary data access for TrueType/OpenType font tables:
//! - Big-endian primitive codec at arbitrary byte offsets
//! - Zero-copy bounded slices that share one backing store
//! - Fixed, doubling and segmented growable stores
//! - The OpenType table checksum, cached per view
//! - Sequential read/write streams over `std::io`
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │      ReadableFontData / WritableFontData (views)            │
//! │   primitive codec · checksum · range search · slicing       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Arc<RwLock<..>> (shared by slices)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      ByteArray                              │
//! │          (filled length, generation, closed state)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Box<dyn ByteStore>
//!          ┌────────────┼────────────────┐
//!          ▼            ▼                ▼
//!   ┌────────────┐ ┌────────────┐ ┌─────────────┐
//!   │   Fixed    │ │  Doubling  │ │  Segmented  │
//!   └────────────┘ └────────────┘ └─────────────┘
//!
//!   FontInputStream / FontOutputStream: same codec over Read / Write
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

mod codec;
pub mod types;
pub mod store;
pub mod data;
pub mod stream;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FontDataError, Result};
pub use config::{GrowthStrategy, StoreConfig};
pub use types::DataSize;
pub use store::{ByteArray, ByteStore, UNBOUNDED_SIZE};
pub use data::{FontData, ReadableFontData, WritableFontData};
pub use stream::{FontInputStream, FontOutputStream};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fontdata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
