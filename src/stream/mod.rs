//! Stream Module
//!
//! Sequential companions to the random-access views.
//!
//! ## Responsibilities
//! - Decode OpenType primitives from any `Read`, tracking position
//! - Optionally stop at a length bound even if the source has more
//! - Encode OpenType primitives to any `Write`, tracking position
//! - Surface short writes and source failures as `FontDataError::Io`

mod input;
mod output;

pub use input::FontInputStream;
pub use output::FontOutputStream;
