use bloomset::prelude::*;
use bloomset::{FilterParameters, DEFAULT_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn no_false_negatives(items in prop::collection::vec(".{1,32}", 0..200)) {
        let mut filter = StandardBloomFilter::new(1000, 0.01, DEFAULT_HASH).unwrap();

        for item in &items {
            filter.add(item).unwrap();
        }

        for item in &items {
            prop_assert!(filter.contains(item).unwrap());
        }
        prop_assert_eq!(filter.current_count(), items.len());
    }

    #[test]
    fn counting_no_false_negatives(items in prop::collection::vec(any::<u64>(), 0..200)) {
        let mut filter = CountingBloomFilter::new(1000, 0.01, DEFAULT_HASH).unwrap();

        for item in &items {
            filter.add(item).unwrap();
        }

        for item in &items {
            prop_assert!(filter.contains(item).unwrap());
        }
    }

    #[test]
    fn counters_stay_in_nibble_range(
        items in prop::collection::vec(0u8..8, 1..100),
        deletes in prop::collection::vec(0u8..8, 0..100),
    ) {
        let mut filter = CountingBloomFilter::new(100, 0.01, DEFAULT_HASH).unwrap();

        for item in &items {
            filter.add(item).unwrap();
        }
        for item in &deletes {
            filter.delete(item).unwrap();
        }

        prop_assert!(filter.counters().iter().all(|c| c <= 15));
        prop_assert!(filter.current_count() <= items.len());
    }

    #[test]
    fn add_then_delete_restores_counters(
        base in prop::collection::vec(any::<u32>(), 0..50),
        extra in any::<u32>(),
    ) {
        let mut filter = CountingBloomFilter::new(100, 0.01, DEFAULT_HASH).unwrap();
        for item in &base {
            filter.add(item).unwrap();
        }
        let before = filter.counters().clone();
        prop_assume!(before.saturated_count() == 0);

        filter.add(&extra).unwrap();
        filter.delete(&extra).unwrap();

        prop_assert_eq!(filter.counters(), &before);
        prop_assert_eq!(filter.current_count(), base.len());
    }

    #[test]
    fn optimizer_meets_target(capacity in 1usize..20_000, rate in 0.0001f64..0.5) {
        let params = FilterParameters::with_defaults(capacity, rate).unwrap();

        prop_assert!(params.size().is_power_of_two());
        prop_assert!(params.size() >= DEFAULT_SIZE);
        prop_assert!(params.hash_count() >= 1);
        prop_assert!(params.achieved_error_rate() <= rate);
    }

    #[test]
    fn union_contains_both_inputs(
        left in prop::collection::vec(any::<i64>(), 1..50),
        right in prop::collection::vec(any::<i64>(), 1..50),
    ) {
        let mut a = StandardBloomFilter::new(100, 0.01, DEFAULT_HASH).unwrap();
        let mut b = StandardBloomFilter::new(100, 0.01, DEFAULT_HASH).unwrap();
        for item in &left {
            a.add(item).unwrap();
        }
        for item in &right {
            b.add(item).unwrap();
        }

        let union = a.union(&b).unwrap();
        for (i, word) in union.bits().words().iter().enumerate() {
            prop_assert_eq!(*word, a.bits().words()[i] | b.bits().words()[i]);
        }
        prop_assert_eq!(union.current_count(), left.len() + right.len());
    }
}
