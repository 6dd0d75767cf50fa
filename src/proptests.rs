use std::collections::{BTreeMap, BTreeSet};
use std::vec::Vec;

use proptest::prelude::*;

use crate::constants::{
    BRANCH_BITMAP_MIN, BRANCH_FULL_MIN, BRANCH_FULL_SHRINK, BRANCH_LINEAR_MAX, LEAF_LINEAR_MAX,
    LEAF_MERGE_THRESHOLD,
};
use crate::key::TrieKey;
use crate::trie::{Children, Leaf, Link, Trie};
use crate::TrieSet;

/// Walk every reachable node and check the structural invariants.
fn validate_trie<K: TrieKey, V>(t: &Trie<K, V>) {
    let mut branches = 0usize;
    let mut leaves = 0usize;

    let total = match t.root {
        Some(root) => validate_link(t, root, 0, K::max_value(), 0, &mut branches, &mut leaves),
        None => 0,
    };

    assert_eq!(total, t.len(), "reachable keys must match Trie::len");
    assert_eq!(branches, t.branches.len(), "unreachable branch left in arena");
    assert_eq!(leaves, t.leaves.len(), "unreachable leaf left in arena");
}

/// Returns the number of keys below `link`; every key must lie in `[lo, hi]`.
fn validate_link<K: TrieKey, V>(
    t: &Trie<K, V>,
    link: Link,
    lo: u128,
    hi: u128,
    min_depth: usize,
    branches: &mut usize,
    leaves: &mut usize,
) -> usize {
    match link {
        Link::Branch(idx) => {
            *branches += 1;
            let branch = t.branches.get(idx);
            let depth = branch.depth as usize;

            assert!(depth >= min_depth, "branch depth must grow downwards");
            assert!(depth + 1 < K::BYTES, "branch on the last byte");
            assert!(branch.prefix >= lo && branch.prefix <= hi, "branch prefix out of range");

            let n = branch.children.len();
            assert!(n >= 2, "branch with {n} children");
            match &branch.children {
                Children::Linear { bytes, .. } => {
                    assert!(n <= BRANCH_LINEAR_MAX, "linear table too large: {n}");
                    assert!(bytes.windows(2).all(|w| w[0] < w[1]), "linear table unsorted");
                }
                Children::Bitmap { .. } => {
                    assert!(n > BRANCH_BITMAP_MIN && n <= BRANCH_FULL_MIN, "bitmap table size {n}");
                }
                Children::Full { .. } => {
                    assert!(n > BRANCH_FULL_SHRINK, "full table size {n}");
                }
            }

            let shift = (K::BYTES - 1 - depth) * 8;
            let mut population = 0;
            for (byte, child) in branch.children.iter() {
                let child_lo = branch.prefix | ((byte as u128) << shift);
                let child_hi = child_lo | ((1u128 << shift) - 1);
                population +=
                    validate_link(t, child, child_lo, child_hi, depth + 1, branches, leaves);
            }
            assert_eq!(population, branch.population, "stale branch population");
            population
        }
        Link::Leaf(idx) => {
            *leaves += 1;
            let leaf = t.leaves.get(idx);
            let n = leaf.len();
            assert!(n >= 1, "empty leaf left in trie");

            match leaf {
                Leaf::Linear { keys, values } => {
                    assert!(n <= LEAF_LINEAR_MAX, "linear leaf too large: {n}");
                    assert_eq!(keys.len(), values.len());
                    assert!(
                        keys.windows(2).all(|w| w[0].to_u128() < w[1].to_u128()),
                        "linear leaf keys must be strictly ascending"
                    );
                    for k in keys {
                        let bits = k.to_u128();
                        assert!(bits >= lo && bits <= hi, "leaf key out of range");
                    }
                }
                Leaf::Bitmap { prefix, .. } => {
                    assert!(n > LEAF_MERGE_THRESHOLD, "sparse bitmap leaf: {n}");
                    assert_eq!(*prefix & 0xFF, 0, "bitmap prefix must clear the last byte");
                    assert!(*prefix >= lo & !0xFF && *prefix <= hi, "bitmap prefix out of range");
                    if let (Some((first, _)), Some((last, _))) = (leaf.first(), leaf.last()) {
                        assert!(first >= lo && last <= hi, "bitmap leaf key out of range");
                    }
                }
            }
            n
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u64, u32),
    Remove(u64),
    Get(u64),
    Ceiling(u64),
    Floor(u64),
    Count(u64, u64),
    Clear,
}

/// Keys drawn from a few dense clusters plus uniform noise.
fn key_strategy() -> impl Strategy<Value = u64> + Clone {
    prop_oneof![
        3 => (0u64..4, 0u64..1024).prop_map(|(cluster, offset)| (cluster << 40) | offset),
        1 => (0u64..64).prop_map(|k| k << 56),
        1 => any::<u64>(),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        40 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        30 => key.clone().prop_map(Op::Remove),
        10 => key.clone().prop_map(Op::Get),
        6 => key.clone().prop_map(Op::Ceiling),
        6 => key.clone().prop_map(Op::Floor),
        7 => (key.clone(), key.clone()).prop_map(|(a, b)| Op::Count(a, b)),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=1500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 20_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_btreemap(ops in ops_strategy()) {
        let mut t: Trie<u64, u32> = Trie::new();
        let mut m: BTreeMap<u64, u32> = BTreeMap::new();

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(t.insert(key, value), m.insert(key, value));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(t.remove(key), m.remove(&key));
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(key), m.get(&key));
                }
                Op::Ceiling(key) => {
                    prop_assert_eq!(t.ceiling(key), m.range(key..).next().map(|(&k, _)| k));
                    let succ = key.checked_add(1).and_then(|s| m.range(s..).next().map(|(&k, _)| k));
                    prop_assert_eq!(t.successor(key), succ);
                }
                Op::Floor(key) => {
                    prop_assert_eq!(t.floor(key), m.range(..=key).next_back().map(|(&k, _)| k));
                    prop_assert_eq!(t.predecessor(key), m.range(..key).next_back().map(|(&k, _)| k));
                }
                Op::Count(a, b) => {
                    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                    prop_assert_eq!(t.count_range(lo..=hi), m.range(lo..=hi).count());
                    prop_assert_eq!(t.range(lo..hi).count(), m.range(lo..hi).count());
                }
                Op::Clear => {
                    t.clear();
                    m.clear();
                }
            }

            prop_assert_eq!(t.len(), m.len());
            if step % 64 == 0 {
                validate_trie(&t);
            }
        }

        validate_trie(&t);
        prop_assert!(t.iter().map(|(k, &v)| (k, v)).eq(m.iter().map(|(&k, &v)| (k, v))));
        prop_assert!(t.keys().rev().eq(m.keys().rev().copied()));
        prop_assert_eq!(t.first(), m.keys().next().copied());
        prop_assert_eq!(t.last(), m.keys().next_back().copied());
    }

    #[test]
    fn prop_set_equivalence_u16(
        inserts in prop::collection::vec(any::<u16>(), 0..3000),
        removes in prop::collection::vec(any::<u16>(), 0..3000),
    ) {
        let mut s: TrieSet<u16> = TrieSet::new();
        let mut m: BTreeSet<u16> = BTreeSet::new();

        for &k in &inserts {
            prop_assert_eq!(s.insert(k), m.insert(k));
        }
        validate_trie(s.as_trie());
        for &k in &removes {
            prop_assert_eq!(s.remove(k), m.remove(&k));
        }
        validate_trie(s.as_trie());

        prop_assert_eq!(s.len(), m.len());
        prop_assert!(s.iter().eq(m.iter().copied()));

        let clone = s.clone();
        prop_assert!(clone == s);
        validate_trie(clone.as_trie());
    }

    #[test]
    fn prop_cursor_walk_matches_iteration(
        keys in prop::collection::btree_set(key_strategy(), 0..500),
    ) {
        let t: Trie<u64> = keys.iter().map(|&k| (k, ())).collect();

        let mut forward = Vec::new();
        let mut cursor = t.cursor_front();
        while !cursor.is_end() {
            if let Some(k) = cursor.key() {
                forward.push(k);
            }
            cursor.move_next();
        }
        prop_assert!(forward.iter().eq(keys.iter()));

        if !keys.is_empty() {
            let mut backward = Vec::new();
            let mut cursor = t.cursor_end();
            for _ in 0..keys.len() {
                cursor.move_prev();
                if let Some(k) = cursor.key() {
                    backward.push(k);
                }
            }
            prop_assert!(backward.iter().eq(keys.iter().rev()));
        }
    }

    #[test]
    fn prop_remove_everything_releases_nodes(
        keys in prop::collection::vec(key_strategy(), 0..2000),
    ) {
        let mut t: Trie<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        validate_trie(&t);

        for &k in &keys {
            t.remove(k);
        }

        prop_assert!(t.is_empty());
        prop_assert!(t.root.is_none());
        prop_assert_eq!(t.branches.len() + t.leaves.len(), 0);
    }
}
