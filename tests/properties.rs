//! Container-level properties checked over generated workloads.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_word_trie::{TrieMap, TrieSet};

#[derive(Clone, Debug)]
enum Op {
    Insert(u32),
    Erase(u32),
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    let key = prop_oneof![0u32..512, any::<u32>()];
    let op = prop_oneof![
        3 => key.clone().prop_map(Op::Insert),
        2 => key.prop_map(Op::Erase),
    ];
    prop::collection::vec(op, 0..800)
}

proptest! {
    #[test]
    fn prop_len_and_emptiness_agree(ops in ops()) {
        let mut set = TrieSet::<u32>::new();
        prop_assert!(set.is_empty());

        for op in ops {
            match op {
                Op::Insert(k) => {
                    set.insert(k);
                }
                Op::Erase(k) => {
                    set.erase(k);
                }
            }
            prop_assert_eq!(set.is_empty(), set.len() == 0);
        }
    }

    #[test]
    fn prop_iteration_is_strictly_ascending(ops in ops()) {
        let mut set = TrieSet::<u32>::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    set.insert(k);
                    model.insert(k);
                }
                Op::Erase(k) => {
                    set.erase(k);
                    model.remove(&k);
                }
            }
        }

        let keys: Vec<u32> = set.iter().collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(keys, model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_find_is_exact(keys in prop::collection::btree_set(0u32..10_000, 0..300), probe in 0u32..10_000) {
        let set: TrieSet<u32> = keys.iter().copied().collect();
        let cursor = set.find(probe);

        if keys.contains(&probe) {
            prop_assert_eq!(cursor.key(), Some(probe));
        } else {
            prop_assert!(cursor.is_end());
            prop_assert_eq!(cursor, set.cursor_end());
        }
    }

    #[test]
    fn prop_cursor_steps_are_symmetric(keys in prop::collection::btree_set(any::<u64>(), 3..300), pick in any::<prop::sample::Index>()) {
        let set: TrieSet<u64> = keys.iter().copied().collect();
        let sorted: Vec<u64> = keys.into_iter().collect();
        // Interior position: neither the first nor the last key
        let at = 1 + pick.index(sorted.len() - 2);

        let start = set.find(sorted[at]);

        let mut it = start;
        it.move_prev();
        it.move_next();
        prop_assert_eq!(it, start);

        let mut it = start;
        it.move_next();
        it.move_prev();
        prop_assert_eq!(it, start);
    }

    #[test]
    fn prop_erase_round_trip(keys in prop::collection::btree_set(any::<u16>(), 1..400), absent in any::<u16>()) {
        let mut map: TrieMap<u16, u16> = keys.iter().map(|&k| (k, k)).collect();

        for &k in &keys {
            let before = map.len();
            prop_assert_eq!(map.erase(k), 1);
            prop_assert!(!map.contains_key(k));
            prop_assert_eq!(map.get(k), None);
            prop_assert_eq!(map.len(), before - 1);
        }

        let before = map.len();
        prop_assert_eq!(map.erase(absent), 0);
        prop_assert_eq!(map.len(), before);
    }
}

#[test]
fn test_duplicate_put_aliases_slot() {
    let mut map: TrieMap<u64, u32> = TrieMap::new();
    for k in 0..1000u64 {
        *map.put(k * 31) = k as u32;
    }

    let first = map.put(31 * 500) as *mut u32;
    let second = map.put(31 * 500) as *mut u32;

    assert_eq!(first, second);
    assert_eq!(map.len(), 1000);
}

#[test]
fn test_copy_independence() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut a = TrieSet::<u64>::new();
    for _ in 0..5000 {
        a.insert(rng.gen_range(0..1u64 << 48));
    }

    let mut b = a.clone();
    assert_eq!(a.len(), b.len());
    assert_eq!(a, b);

    let removed = a.first().expect("set is populated");
    a.remove(removed);
    a.insert(u64::MAX);
    assert!(b.contains(removed));
    assert!(!b.contains(u64::MAX));
    assert_eq!(b.len(), a.len());

    b.clear();
    assert!(a.contains(u64::MAX));
    assert!(!a.is_empty());
}

#[test]
fn test_clone_from_overwrites_target() {
    let source: TrieSet<u32> = (0..2000u32).map(|k| k * 7).collect();
    let mut target: TrieSet<u32> = (0..50u32).collect();

    target.clone_from(&source);

    assert_eq!(target, source);
    assert!(!target.contains(1));
}

#[test]
fn test_count_range_tracks_len_under_churn() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut set = TrieSet::<u64>::new();

    for round in 0..20_000u64 {
        let key = rng.gen_range(0..4096u64) << (rng.gen_range(0..5u32) * 12);
        if round % 3 == 0 {
            set.remove(key);
        } else {
            set.insert(key);
        }
        if round % 997 == 0 {
            assert_eq!(set.count_range(..), set.len());
        }
    }
    assert_eq!(set.count_range(..), set.len());
}
