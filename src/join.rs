//! The sparse chained-join engine.
//!
//! For each i, expands the (i,j,k) entries of IJK through JKL by (j,k) and
//! KLM by (k,l), emitting the surviving (j,k,l,m) tuples. Runtime is
//! O(|IJK| * avg fanout): driven entirely by the non-zero entries, never
//! by the dense I x J x K x L x M product.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::relation::{GroupedLookup, SparseRelation};

/// The sparse "non-zero index": i -> ordered (j,k,l,m) expansions.
///
/// All components are zero-based. An i with no expansions has no entry at
/// all; the map never holds an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonzeroIndex {
    map: IndexMap<usize, Vec<[usize; 4]>>,
}

impl NonzeroIndex {
    /// Expansions for i, `None` if i has none.
    pub fn get(&self, i: usize) -> Option<&[[usize; 4]]> {
        self.map.get(&i).map(Vec::as_slice)
    }

    /// Check whether i has at least one expansion.
    pub fn contains(&self, i: usize) -> bool {
        self.map.contains_key(&i)
    }

    /// Number of i keys with at least one expansion.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if no i survived the join.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Total number of (j,k,l,m) tuples across all i.
    pub fn total_tuples(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    /// Entries in ascending-i insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[[usize; 4]])> {
        self.map.iter().map(|(&i, tuples)| (i, tuples.as_slice()))
    }
}

/// Compute the non-zero index of the chained join IJK ⋈ JKL ⋈ KLM.
///
/// For each i in `0..i_count`:
/// - every (j,k) with (i,j,k) in IJK is expanded via `jkl` to its l values
///   (a missing (j,k) key contributes nothing);
/// - each l survives only if (k,l) is a key of `klm`, and then pairs with
///   **only the first** m in `klm`'s value list (first-match policy);
/// - surviving tuples are emitted in IJK tuple order, then JKL list order.
///
/// i is omitted from the result when nothing survives.
pub fn compute_nonzero_index(
    i_count: usize,
    ijk: &SparseRelation,
    jkl: &GroupedLookup,
    klm: &GroupedLookup,
) -> NonzeroIndex {
    debug_assert_eq!(ijk.arity, 3);

    // Pre-group IJK by i, keeping the relation's tuple order per bucket.
    let mut by_i: FxHashMap<usize, Vec<(usize, usize)>> = FxHashMap::default();
    for tuple in ijk.iter() {
        by_i.entry(tuple[0]).or_default().push((tuple[1], tuple[2]));
    }

    let mut map: IndexMap<usize, Vec<[usize; 4]>> = IndexMap::new();
    for i in 0..i_count {
        let Some(pairs) = by_i.get(&i) else { continue };

        let mut jklm: Vec<[usize; 4]> = Vec::new();
        for &(j, k) in pairs {
            let Some(ls) = jkl.get(&[j, k]) else { continue };
            for &l in ls {
                if let Some(&m) = klm.get(&[k, l]).and_then(<[usize]>::first) {
                    jklm.push([j, k, l, m]);
                }
            }
        }
        if !jklm.is_empty() {
            map.insert(i, jklm);
        }
    }
    NonzeroIndex { map }
}
