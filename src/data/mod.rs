//! Font Data Module
//!
//! Bounded, shareable views over a `ByteArray`.
//!
//! ## Responsibilities
//! - Restrict access to an offset/length window without copying
//! - Decode and encode OpenType primitives at view-relative offsets
//! - Compute and cache the OpenType table checksum
//! - Binary-search range tables in place
//!
//! ## Sharing Model
//! ```text
//!        Arc<RwLock<ByteArray>>
//!   ┌──────────────────────────────────────────┐
//!   │ 00 01 00 00 │ 00 0c 00 80 │ 00 03 00 70   │
//!   └──────────────────────────────────────────┘
//!   ▲ view (offset 0, unbounded)
//!                 ▲ slice (offset 4, length 4)
//! ```
//! Every view holds an `Arc` to the same store; a slice is just a new
//! offset/length pair, so writes through one view are visible in all
//! overlapping views.

mod checksum;
mod font_data;
mod readable;
mod search;
mod writable;

pub use font_data::FontData;
pub use readable::ReadableFontData;
pub use writable::WritableFontData;
