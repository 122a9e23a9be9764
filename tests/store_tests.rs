//! Backing Store Tests
//!
//! Tests verify:
//! - Filled length vs size semantics
//! - Fixed stores reject writes past their size
//! - Doubling and segmented stores grow transparently
//! - Identical contents regardless of strategy
//! - Close releases storage and blocks further access

use std::io::Cursor;

use fontdata::{ByteArray, FontDataError, GrowthStrategy, StoreConfig, UNBOUNDED_SIZE};

// =============================================================================
// Helper Functions
// =============================================================================

/// One store of each strategy, all starting empty
fn all_strategies() -> Vec<(&'static str, ByteArray)> {
    vec![
        ("fixed", ByteArray::fixed(4096)),
        ("doubling", ByteArray::growable_with_capacity(0)),
        ("segmented", ByteArray::segmented(3).unwrap()),
    ]
}

/// Deterministic, non-repeating-looking test payload
fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

// =============================================================================
// Fixed Store Tests
// =============================================================================

#[test]
fn test_fixed_store_starts_empty() {
    let array = ByteArray::fixed(16);

    assert_eq!(array.length(), 0);
    assert_eq!(array.size(), 16);
    assert!(!array.growable());
    assert_eq!(array.get(0), None);
}

#[test]
fn test_fixed_store_put_extends_length() {
    let mut array = ByteArray::fixed(16);

    array.put(3, 0xAB).unwrap();

    assert_eq!(array.length(), 4);
    assert_eq!(array.get(3), Some(0xAB));
    assert_eq!(array.get(0), Some(0));
    assert_eq!(array.get(4), None);
}

#[test]
fn test_fixed_store_rejects_put_past_size() {
    let mut array = ByteArray::fixed(8);

    let err = array.put(8, 1).unwrap_err();
    assert!(err.is_out_of_bounds());

    let err = array.put_bytes(6, &[1, 2, 3]).unwrap_err();
    assert!(err.is_out_of_bounds());

    // Nothing partially written
    assert_eq!(array.length(), 0);
    assert_eq!(array.size(), 8);
}

#[test]
fn test_from_vec_is_filled() {
    let array = ByteArray::from_vec(vec![1, 2, 3]);

    assert_eq!(array.length(), 3);
    assert_eq!(array.size(), 3);
    assert_eq!(array.to_vec().unwrap(), vec![1, 2, 3]);
}

// =============================================================================
// Growable Store Tests
// =============================================================================

#[test]
fn test_doubling_store_grows() {
    let mut array = ByteArray::growable_with_capacity(4);
    assert!(array.growable());
    assert_eq!(array.size(), UNBOUNDED_SIZE);
    assert_eq!(array.capacity(), 4);

    array.put_bytes(0, &[1, 2, 3, 4, 5]).unwrap();

    assert_eq!(array.length(), 5);
    assert_eq!(array.capacity(), 8);

    array.put(100, 9).unwrap();
    assert_eq!(array.capacity(), 101);
    assert_eq!(array.length(), 101);
    assert_eq!(array.get(100), Some(9));
    assert_eq!(array.get(50), Some(0));
}

#[test]
fn test_segmented_store_never_moves_written_bytes() {
    let mut array = ByteArray::segmented(2).unwrap();
    let data = pattern(1000);

    for (i, chunk) in data.chunks(7).enumerate() {
        array.put_bytes(i * 7, chunk).unwrap();
    }

    assert_eq!(array.length(), 1000);
    assert_eq!(array.capacity(), 1024);
    assert_eq!(array.to_vec().unwrap(), data);
}

#[test]
fn test_with_config_selects_strategy() {
    let config = StoreConfig::builder()
        .growth(GrowthStrategy::Segmented)
        .segment_low_bits(4)
        .build();
    let mut array = ByteArray::with_config(&config).unwrap();
    array.put(0, 1).unwrap();
    assert_eq!(array.capacity(), 16);

    let config = StoreConfig::builder().initial_capacity(64).build();
    let array = ByteArray::with_config(&config).unwrap();
    assert_eq!(array.capacity(), 64);
}

#[test]
fn test_with_config_rejects_bad_low_bits() {
    let config = StoreConfig::builder()
        .growth(GrowthStrategy::Segmented)
        .segment_low_bits(0)
        .build();

    assert!(matches!(
        ByteArray::with_config(&config),
        Err(FontDataError::Config(_))
    ));
}

// =============================================================================
// Strategy Transparency Tests
// =============================================================================

#[test]
fn test_all_strategies_read_back_identical_bytes() {
    let data = pattern(3000);

    for (name, mut array) in all_strategies() {
        let mut index = 0;
        for (step, chunk_len) in [1usize, 2, 3, 5, 8, 13, 21, 34].iter().cycle().enumerate() {
            if index >= data.len() {
                break;
            }
            let end = (index + chunk_len).min(data.len());
            if step % 2 == 0 {
                array.put_bytes(index, &data[index..end]).unwrap();
            } else {
                for (i, b) in data[index..end].iter().enumerate() {
                    array.put(index + i, *b).unwrap();
                }
            }
            index = end;
        }

        assert_eq!(array.length(), data.len(), "{} length", name);
        assert_eq!(array.to_vec().unwrap(), data, "{} contents", name);
    }
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_get_bytes_stops_at_filled_length() {
    let mut array = ByteArray::growable_with_capacity(0);
    array.put_bytes(0, &[1, 2, 3, 4]).unwrap();

    let mut buf = [0u8; 10];
    assert_eq!(array.get_bytes(2, &mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], &[3, 4]);

    assert_eq!(array.get_bytes(4, &mut buf).unwrap(), 0);
    assert!(array.get_bytes(5, &mut buf).unwrap_err().is_out_of_bounds());
}

#[test]
fn test_read_exact_at_fails_without_partial_read() {
    let array = ByteArray::from_vec(vec![1, 2, 3]);

    let mut buf = [0xEEu8; 4];
    assert!(array.read_exact_at(0, &mut buf).unwrap_err().is_out_of_bounds());
    assert_eq!(buf, [0xEE; 4]);
}

#[test]
fn test_set_filled_length() {
    let mut array = ByteArray::growable_with_capacity(0);
    array.set_filled_length(10).unwrap();

    assert_eq!(array.length(), 10);
    assert_eq!(array.to_vec().unwrap(), vec![0u8; 10]);

    let mut fixed = ByteArray::fixed(4);
    assert!(fixed.set_filled_length(5).unwrap_err().is_out_of_bounds());
}

#[test]
fn test_generation_advances_on_write() {
    let mut array = ByteArray::fixed(4);
    let before = array.generation();

    array.put(0, 1).unwrap();
    assert!(array.generation() > before);

    let after_write = array.generation();
    let _ = array.get(0);
    assert_eq!(array.generation(), after_write);
}

#[test]
fn test_fill_all_strategies() {
    for (name, mut array) in all_strategies() {
        array.put(0, 1).unwrap();
        assert_eq!(array.fill(2, 4000, 0xEE).unwrap(), 4000, "{}", name);

        assert_eq!(array.length(), 4002, "{}", name);
        assert_eq!(array.get(1), Some(0), "{}", name);
        assert_eq!(array.get(2), Some(0xEE), "{}", name);
        assert_eq!(array.get(4001), Some(0xEE), "{}", name);
    }
}

#[test]
fn test_fill_past_fixed_size_writes_nothing() {
    let mut array = ByteArray::fixed(8);
    let generation = array.generation();

    assert!(array.fill(4, 5, 0xFF).unwrap_err().is_out_of_bounds());
    assert_eq!(array.length(), 0);
    assert_eq!(array.generation(), generation);
}

// =============================================================================
// Copy Tests
// =============================================================================

#[test]
fn test_copy_to_other_strategy() {
    let source = ByteArray::from_vec(pattern(20_000));
    let mut target = ByteArray::segmented(8).unwrap();

    assert_eq!(source.copy_to(&mut target).unwrap(), 20_000);
    assert_eq!(target.to_vec().unwrap(), source.to_vec().unwrap());
}

#[test]
fn test_copy_to_fixed_too_small_fails() {
    let source = ByteArray::from_vec(pattern(10));
    let mut target = ByteArray::fixed(5);

    assert!(source.copy_to(&mut target).unwrap_err().is_out_of_bounds());
}

#[test]
fn test_copy_through_io() {
    let source = ByteArray::from_vec(pattern(100));
    let mut out = Vec::new();
    assert_eq!(source.copy_to_writer(&mut out).unwrap(), 100);

    let mut target = ByteArray::growable_with_capacity(0);
    let copied = target
        .copy_from_reader(&mut Cursor::new(out.clone()), 0, 1000)
        .unwrap();

    assert_eq!(copied, 100);
    assert_eq!(target.to_vec().unwrap(), out);
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_close_blocks_access() {
    for (name, mut array) in all_strategies() {
        array.put_bytes(0, &[1, 2, 3]).unwrap();
        array.close();

        assert!(array.is_closed(), "{}", name);
        assert_eq!(array.length(), 0);
        assert_eq!(array.size(), 0);
        assert_eq!(array.capacity(), 0);
        assert_eq!(array.get(0), None);
        assert!(matches!(array.put(0, 1), Err(FontDataError::Closed)));
        assert!(matches!(array.to_vec(), Err(FontDataError::Closed)));
    }
}
