//! Range Search Tests
//!
//! Tests verify:
//! - Pair search over interleaved and split start/end columns
//! - Keys on, between, below and above the ranges
//! - ULONG variant and exact single-column search

use fontdata::{DataSize, ReadableFontData, WritableFontData};

// =============================================================================
// Helper Functions
// =============================================================================

const RANGES: [(u16, u16); 5] = [(10, 20), (30, 30), (40, 55), (100, 200), (1000, 65535)];

/// cmap format 4 style layout: all end codes, then all start codes
fn split_columns() -> ReadableFontData {
    let data = WritableFontData::growable(0);
    let stride = DataSize::UShort.size();
    for (i, (start, end)) in RANGES.iter().enumerate() {
        data.write_ushort(i * stride, *end).unwrap();
        data.write_ushort(RANGES.len() * stride + i * stride, *start).unwrap();
    }
    data.as_readable()
}

/// Interleaved `[start, end]` records behind a 6-byte header
fn interleaved_ulong() -> ReadableFontData {
    let data = WritableFontData::growable(0);
    data.write_padding(0, 6).unwrap();
    for (i, (start, end)) in RANGES.iter().enumerate() {
        data.write_ulong(6 + i * 8, u32::from(*start) << 8).unwrap();
        data.write_ulong(6 + i * 8 + 4, u32::from(*end) << 8).unwrap();
    }
    data.as_readable()
}

fn search(data: &ReadableFontData, key: u16) -> Option<usize> {
    data.search_ushort(10, 2, 0, 2, RANGES.len(), key).unwrap()
}

// =============================================================================
// USHORT Search Tests
// =============================================================================

#[test]
fn test_key_equal_to_start_finds_pair() {
    let data = split_columns();

    for (i, (start, _)) in RANGES.iter().enumerate() {
        assert_eq!(search(&data, *start), Some(i));
    }
}

#[test]
fn test_key_equal_to_end_finds_pair() {
    let data = split_columns();

    for (i, (_, end)) in RANGES.iter().enumerate() {
        assert_eq!(search(&data, *end), Some(i));
    }
}

#[test]
fn test_key_inside_range() {
    let data = split_columns();

    assert_eq!(search(&data, 15), Some(0));
    assert_eq!(search(&data, 150), Some(3));
    assert_eq!(search(&data, 40000), Some(4));
}

#[test]
fn test_key_outside_all_ranges() {
    let data = split_columns();

    assert_eq!(search(&data, 0), None);
    assert_eq!(search(&data, 9), None);
    assert_eq!(search(&data, 21), None);
    assert_eq!(search(&data, 31), None);
    assert_eq!(search(&data, 99), None);
    assert_eq!(search(&data, 999), None);
}

#[test]
fn test_empty_table() {
    let data = split_columns();

    assert_eq!(data.search_ushort(10, 2, 0, 2, 0, 15).unwrap(), None);
}

#[test]
fn test_count_past_data_fails() {
    let data = split_columns();

    let err = data.search_ushort(10, 2, 0, 2, 50, 65535).unwrap_err();
    assert!(err.is_out_of_bounds());
}

// =============================================================================
// ULONG Search Tests
// =============================================================================

#[test]
fn test_search_ulong() {
    let data = interleaved_ulong();
    let find = |key: u32| data.search_ulong(6, 8, 10, 8, RANGES.len(), key).unwrap();

    assert_eq!(find(10 << 8), Some(0));
    assert_eq!(find(55 << 8), Some(2));
    assert_eq!(find(65535 << 8), Some(4));
    assert_eq!(find((10 << 8) - 1), None);
    assert_eq!(find((20 << 8) + 1), None);
    assert_eq!(find(u32::MAX), None);
}

// =============================================================================
// Exact Search Tests
// =============================================================================

#[test]
fn test_search_exact() {
    let data = split_columns();

    // End-code column: 20, 30, 55, 200, 65535
    assert_eq!(data.search_ushort_exact(0, 2, 5, 55).unwrap(), Some(2));
    assert_eq!(data.search_ushort_exact(0, 2, 5, 65535).unwrap(), Some(4));
    assert_eq!(data.search_ushort_exact(0, 2, 5, 20).unwrap(), Some(0));
    assert_eq!(data.search_ushort_exact(0, 2, 5, 21).unwrap(), None);
    assert_eq!(data.search_ushort_exact(0, 2, 5, 0).unwrap(), None);
}
