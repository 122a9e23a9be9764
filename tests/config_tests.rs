//! Config Tests
//!
//! Tests verify:
//! - Defaults and builder overrides
//! - Validation of segment exponents
//! - Config survives serialization

use fontdata::{FontDataError, GrowthStrategy, StoreConfig, WritableFontData};

#[test]
fn test_default_config() {
    let config = StoreConfig::default();

    assert_eq!(config.growth, GrowthStrategy::Doubling);
    assert_eq!(config.initial_capacity, 0);
    assert_eq!(config.segment_low_bits, 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_overrides() {
    let config = StoreConfig::builder()
        .growth(GrowthStrategy::Segmented)
        .initial_capacity(1024)
        .segment_low_bits(12)
        .build();

    assert_eq!(config.growth, GrowthStrategy::Segmented);
    assert_eq!(config.initial_capacity, 1024);
    assert_eq!(config.segment_low_bits, 12);
}

#[test]
fn test_validate_rejects_out_of_range_bits() {
    for bits in [0, 31, 64] {
        let config = StoreConfig::builder().segment_low_bits(bits).build();
        assert!(matches!(config.validate(), Err(FontDataError::Config(_))));
        assert!(WritableFontData::with_config(&config).is_err());
    }
}

#[test]
fn test_config_serialization() {
    let config = StoreConfig::builder()
        .growth(GrowthStrategy::Segmented)
        .segment_low_bits(10)
        .build();

    let encoded = bincode::serialize(&config).unwrap();
    let decoded: StoreConfig = bincode::deserialize(&encoded).unwrap();

    assert_eq!(decoded, config);
}
