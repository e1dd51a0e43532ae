//! Basic test - just to prove the filters work

use bloomset::prelude::*;

#[test]
fn test_basic_add_and_find() {
    let mut filter = StandardBloomFilter::new(100, 0.01, "FNV32").unwrap();

    filter.add("test-item").unwrap();

    assert!(
        filter.contains("test-item").unwrap(),
        "Should find the item we just added"
    );
}

#[test]
fn test_multiple_items() {
    let mut filter = StandardBloomFilter::new(1000, 0.01, "FNV32").unwrap();

    let items = ["apple", "banana", "cherry"];
    for item in items {
        filter.add(item).unwrap();
    }

    for item in items {
        assert!(filter.contains(item).unwrap(), "Should find {}", item);
    }
    assert_eq!(filter.current_count(), 3);
}

#[test]
fn test_no_false_negatives() {
    let mut filter = StandardBloomFilter::new(1000, 0.01, "FNV32").unwrap();

    for i in 0..100u64 {
        filter.add(&i).unwrap();
    }

    // All inserted items MUST be found (no false negatives allowed)
    for i in 0..100u64 {
        assert!(filter.contains(&i).unwrap(), "False negative for {}", i);
    }
}

#[test]
fn test_integer_slices_and_arrays() {
    let mut filter = CountingBloomFilter::new(100, 0.01, "FNV32").unwrap();

    filter.add(&[1i32, 2, 3][..]).unwrap();
    filter.add(&vec![7u16, 8]).unwrap();
    filter.add(&[0xffu8, 0x00]).unwrap();

    assert!(filter.contains(&[1i32, 2, 3]).unwrap());
    assert!(filter.contains(&[7u16, 8][..]).unwrap());
    assert!(filter.contains(&vec![0xffu8, 0x00]).unwrap());

    let empty: [i32; 0] = [];
    assert!(filter.add(&empty).is_err());
    assert_eq!(filter.current_count(), 3);
}

#[test]
fn test_counting_round_trip() {
    let mut filter = CountingBloomFilter::new(1000, 0.01, "FNV32").unwrap();

    filter.add("keep").unwrap();
    filter.add("drop").unwrap();
    filter.delete("drop").unwrap();

    assert!(filter.contains("keep").unwrap());
    assert!(!filter.contains("drop").unwrap());
    assert_eq!(filter.current_count(), 1);
}

#[test]
fn test_unknown_hash_function_rejected() {
    let err = StandardBloomFilter::new(100, 0.01, "SHA1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = CountingBloomFilter::new(100, 0.01, "").unwrap_err();
    assert!(err.is_invalid_argument());
}
