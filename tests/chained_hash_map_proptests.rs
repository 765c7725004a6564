// Public-API properties of ChainedHashMap.
//
// Property 1: put/get round trip for arbitrary keys and capacities.
// Property 2: update never changes len or the key's bucket length.
// Property 3: put then remove leaves the key absent and the rest intact.
// Property 4: bucket_index is always in range and agrees with the plain
//             remainder for non-negative keys.
use chained_hashmap::ChainedHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn prop_put_get_round_trip(capacity in 1usize..64, entries in proptest::collection::vec((any::<i64>(), any::<u32>()), 0..100)) {
        let mut m = ChainedHashMap::with_capacity(capacity).unwrap();
        let mut model = HashMap::new();
        for (k, v) in entries {
            m.put(k, v);
            model.insert(k, v);
            prop_assert_eq!(m.get(k), Some(&v));
        }
        prop_assert_eq!(m.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(m.get(*k), Some(v));
        }
        let total: usize = (0..capacity).map(|b| m.bucket_len(b)).sum();
        prop_assert_eq!(total, model.len());
    }

    #[test]
    fn prop_update_not_duplicate(capacity in 1usize..16, keys in proptest::collection::vec(-50i64..50, 1..40), k in -50i64..50) {
        let mut m = ChainedHashMap::with_capacity(capacity).unwrap();
        for key in keys {
            m.put(key, "old");
        }
        m.put(k, "v1");
        let len = m.len();
        let chain = m.bucket_len(m.bucket_index(k));
        prop_assert_eq!(m.put(k, "v2"), Some("v1"));
        prop_assert_eq!(m.get(k), Some(&"v2"));
        prop_assert_eq!(m.len(), len);
        prop_assert_eq!(m.bucket_len(m.bucket_index(k)), chain);
    }

    #[test]
    fn prop_remove_completeness(capacity in 1usize..16, keys in proptest::collection::vec(-50i64..50, 0..40), k in -50i64..50, v in any::<i32>()) {
        let mut m = ChainedHashMap::with_capacity(capacity).unwrap();
        let mut model = HashMap::new();
        for key in keys {
            m.put(key, key as i32);
            model.insert(key, key as i32);
        }
        m.put(k, v);
        model.remove(&k);
        prop_assert_eq!(m.remove(k), Some(v));
        prop_assert_eq!(m.get(k), None);
        prop_assert_eq!(m.remove(k), None);
        prop_assert_eq!(m.len(), model.len());
        for (key, val) in &model {
            prop_assert_eq!(m.get(*key), Some(val));
        }
    }

    #[test]
    fn prop_bucket_index_in_range(capacity in 1usize..1024, key in any::<i64>()) {
        let m: ChainedHashMap<()> = ChainedHashMap::with_capacity(capacity).unwrap();
        let b = m.bucket_index(key);
        prop_assert!(b < capacity);
        prop_assert_eq!(b as i128, (key as i128).rem_euclid(capacity as i128));
        if key >= 0 {
            prop_assert_eq!(b, (key as u64 % capacity as u64) as usize);
        }
    }
}
