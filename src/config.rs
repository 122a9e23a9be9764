//! Configuration for growable backing stores
//!
//! Centralized configuration with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::error::{FontDataError, Result};

/// Smallest allowed segment exponent (2-byte first segment)
pub const MIN_SEGMENT_LOW_BITS: u32 = 1;

/// Largest allowed segment exponent (1 GiB first segment)
pub const MAX_SEGMENT_LOW_BITS: u32 = 30;

/// Configuration for stores created through `ByteArray::with_config`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    // -------------------------------------------------------------------------
    // Growth Configuration
    // -------------------------------------------------------------------------
    /// How the store extends its capacity when a write lands past the end
    pub growth: GrowthStrategy,

    /// Bytes allocated up front (doubling store only; 0 starts empty)
    pub initial_capacity: usize,

    // -------------------------------------------------------------------------
    // Segmented Store Configuration
    // -------------------------------------------------------------------------
    /// Exponent of the first segment size: segment 0 holds `2^low_bits` bytes,
    /// segment i (i >= 1) holds `2^(i - 1 + low_bits)` bytes
    pub segment_low_bits: u32,
}

/// Growth strategy for growable stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStrategy {
    /// One contiguous allocation, reallocated to at least twice its size on overflow
    Doubling,

    /// A chain of ever larger segments; existing bytes never move
    Segmented,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            growth: GrowthStrategy::Doubling,
            initial_capacity: 0,
            segment_low_bits: 8, // 256-byte first segment
        }
    }
}

impl StoreConfig {
    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Check that the config describes a store that can be built
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SEGMENT_LOW_BITS..=MAX_SEGMENT_LOW_BITS).contains(&self.segment_low_bits) {
            return Err(FontDataError::Config(format!(
                "segment_low_bits must be in {}..={}, got {}",
                MIN_SEGMENT_LOW_BITS, MAX_SEGMENT_LOW_BITS, self.segment_low_bits
            )));
        }
        if self.initial_capacity > crate::store::UNBOUNDED_SIZE {
            return Err(FontDataError::Config(format!(
                "initial_capacity {} exceeds addressable range",
                self.initial_capacity
            )));
        }
        Ok(())
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the growth strategy
    pub fn growth(mut self, growth: GrowthStrategy) -> Self {
        self.config.growth = growth;
        self
    }

    /// Set the initial capacity hint (in bytes)
    pub fn initial_capacity(mut self, bytes: usize) -> Self {
        self.config.initial_capacity = bytes;
        self
    }

    /// Set the first segment exponent for segmented stores
    pub fn segment_low_bits(mut self, bits: u32) -> Self {
        self.config.segment_low_bits = bits;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
