//! Shared data generators and constants for all benchmarks
#![allow(dead_code)]
use bloomset::StandardBloomFilter;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Generate random alphanumeric string of specified length
#[inline]
pub fn random_string(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generate batch of random strings with specified length
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    (0..count).map(|_| random_string(len)).collect()
}

/// Generate random u64 values
pub fn generate_u64s(count: usize) -> Vec<u64> {
    let mut rng = thread_rng();
    (0..count).map(|_| rng.gen()).collect()
}

/// Filter capacities under test
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Target false positive rates under test
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001];

/// Standard filter holding `count` random 32-byte strings
pub fn filled_filter(capacity: usize, count: usize) -> (StandardBloomFilter, Vec<String>) {
    let mut filter = StandardBloomFilter::new(capacity, 0.01, "FNV32").unwrap();
    let items = generate_strings(count, 32);
    for item in &items {
        filter.add(item).unwrap();
    }
    (filter, items)
}
