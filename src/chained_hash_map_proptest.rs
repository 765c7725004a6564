#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can walk
// the private chains directly.

use crate::chained_hash_map::ChainedHashMap;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{HashMap, HashSet};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    GetOrInsert(usize, i32),
    Remove(usize),
    Get(usize),
    Mutate(usize, i32),
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<i64>, Vec<OpI>)> {
    // Few buckets and a key pool with many multiples of small numbers
    // (including negatives) keep chains long.
    let capacity = 1usize..=8;
    let pool = proptest::collection::vec(prop_oneof![-40i64..40, any::<i64>()], 1..=12);
    (capacity, pool).prop_flat_map(|(capacity, pool)| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::GetOrInsert(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            1 => idx.clone().prop_map(OpI::Get),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (capacity, pool.clone(), ops))
    })
}

// Walk every bucket and compare against the expected per-bucket key order.
fn check_structure(
    sut: &ChainedHashMap<i32>,
    model: &HashMap<i64, i32>,
    order: &[Vec<i64>],
) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    let mut total = 0;
    for (b, expected) in order.iter().enumerate() {
        let keys: Vec<i64> = sut.chain(b).map(|e| e.key).collect();
        prop_assert_eq!(&keys, expected, "bucket {} order", b);
        for e in sut.chain(b) {
            prop_assert_eq!(sut.bucket_index(e.key), b, "key {} in wrong bucket", e.key);
            prop_assert!(seen.insert(e.key), "key {} chained twice", e.key);
            prop_assert_eq!(Some(&e.value), model.get(&e.key));
        }
        prop_assert_eq!(sut.bucket_len(b), keys.len());
        total += keys.len();
    }
    prop_assert_eq!(total, model.len());
    prop_assert_eq!(sut.len(), model.len());
    prop_assert_eq!(sut.is_empty(), model.is_empty());
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap,
// plus a per-bucket model of chain order.
// Invariants exercised across random operation sequences:
// - `put` on a new key appends at the chain tail and returns None; on an
//   existing key it returns the old value and keeps the chain unchanged.
// - `remove` of a present key returns its value and preserves the relative
//   order of the rest of the chain, wherever the key sat (head/middle/tail).
// - `remove` of an absent key returns None and changes nothing.
// - Every chained key hashes to its bucket and appears exactly once.
// - `len`, `bucket_len` and `get` agree with the model after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario()) {
        let mut sut: ChainedHashMap<i32> = ChainedHashMap::with_capacity(capacity).unwrap();
        let mut model: HashMap<i64, i32> = HashMap::new();
        let mut order: Vec<Vec<i64>> = vec![Vec::new(); capacity];

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    let k = pool[i];
                    let prev = sut.put(k, v);
                    prop_assert_eq!(prev, model.insert(k, v));
                    if prev.is_none() {
                        order[sut.bucket_index(k)].push(k);
                    }
                }
                OpI::GetOrInsert(i, v) => {
                    let k = pool[i];
                    let mut ran = false;
                    let got = *sut.get_or_insert_with(k, || { ran = true; v });
                    prop_assert_eq!(ran, !model.contains_key(&k), "closure runs only on insert");
                    if ran {
                        order[sut.bucket_index(k)].push(k);
                    }
                    prop_assert_eq!(got, *model.entry(k).or_insert(v));
                }
                OpI::Remove(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(&k));
                    order[sut.bucket_index(k)].retain(|&x| x != k);
                    prop_assert!(sut.get(k).is_none());
                    prop_assert!(!sut.contains_key(k));
                }
                OpI::Get(i) => {
                    let k = pool[i];
                    prop_assert_eq!(sut.get(k), model.get(&k));
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
                }
                OpI::Mutate(i, d) => {
                    let k = pool[i];
                    match (sut.get_mut(k), model.get_mut(&k)) {
                        (Some(sv), Some(mv)) => {
                            *sv = sv.wrapping_add(d);
                            *mv = mv.wrapping_add(d);
                        }
                        (None, None) => {}
                        (s, m) => prop_assert!(false, "get_mut mismatch: {:?} vs {:?}", s, m),
                    }
                }
            }

            check_structure(&sut, &model, &order)?;
        }
    }
}

// Property: with one bucket every key collides; the map must still behave
// exactly like the model.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_single_bucket_collisions(ops in proptest::collection::vec((any::<bool>(), -20i64..20, any::<i32>()), 1..100)) {
        let mut sut: ChainedHashMap<i32> = ChainedHashMap::with_capacity(1).unwrap();
        let mut model: HashMap<i64, i32> = HashMap::new();
        let mut order: Vec<Vec<i64>> = vec![Vec::new()];

        for (insert, k, v) in ops {
            if insert {
                if sut.put(k, v).is_none() {
                    order[0].push(k);
                }
                model.insert(k, v);
            } else {
                prop_assert_eq!(sut.remove(k), model.remove(&k));
                order[0].retain(|&x| x != k);
            }
            check_structure(&sut, &model, &order)?;
        }
    }
}
