//! Label-to-integer normalization and prefix grouping.
//!
//! The join engine never touches strings: relations are re-keyed to dense
//! zero-based ids once, then re-indexed by tuple prefix into hash lookups.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;

use crate::domain::parse_ordinal;
use crate::error::Result;
use crate::relation::Relation;

/// A sparse relation over zero-based integer ids.
///
/// The integer twin of [`Relation`]; tuple order matches the labeled
/// relation it was normalized from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseRelation {
    /// Number of components per tuple
    pub arity: usize,
    /// Tuples where the relation holds, in insertion order
    pub tuples: IndexSet<Vec<usize>>,
}

impl SparseRelation {
    /// Create a new empty relation with given arity.
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            tuples: IndexSet::new(),
        }
    }

    /// Insert a tuple into the relation.
    pub fn insert(&mut self, tuple: Vec<usize>) {
        debug_assert_eq!(tuple.len(), self.arity);
        self.tuples.insert(tuple);
    }

    /// Check if a tuple is in the relation.
    pub fn contains(&self, tuple: &[usize]) -> bool {
        self.tuples.contains(tuple)
    }

    /// Number of tuples in the relation.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Check if the relation is empty.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Tuples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Vec<usize>> {
        self.tuples.iter()
    }
}

/// Apply [`parse_ordinal`] to every component of every tuple.
///
/// Tuple order is preserved. Fails on the first malformed label.
pub fn normalize_relation(rel: &Relation) -> Result<SparseRelation> {
    let mut out = SparseRelation::new(rel.arity);
    for tuple in rel.iter() {
        let ids = tuple
            .iter()
            .map(|label| parse_ordinal(label))
            .collect::<Result<Vec<usize>>>()?;
        out.insert(ids);
    }
    Ok(out)
}

/// A relation re-indexed by a prefix of its tuples.
///
/// JKL grouped with `key_arity = 2` maps (j, k) to the list of l such that
/// (j, k, l) is in the relation; value lists follow the relation's tuple
/// order. This is the structure the join engine probes, with O(1) expected
/// lookup per composite key.
#[derive(Debug, Clone, Default)]
pub struct GroupedLookup {
    key_arity: usize,
    map: FxHashMap<Vec<usize>, Vec<usize>>,
}

impl GroupedLookup {
    /// Group a relation by its first `key_arity` components.
    ///
    /// `key_arity` must be `arity - 1`: each tuple contributes its single
    /// trailing component to the value list of its prefix.
    pub fn group_by_prefix(rel: &SparseRelation, key_arity: usize) -> Self {
        debug_assert_eq!(key_arity + 1, rel.arity);
        let mut map: FxHashMap<Vec<usize>, Vec<usize>> = FxHashMap::default();
        for tuple in rel.iter() {
            let (key, rest) = tuple.split_at(key_arity);
            map.entry(key.to_vec()).or_default().push(rest[0]);
        }
        Self { key_arity, map }
    }

    /// Arity of the composite key.
    pub fn key_arity(&self) -> usize {
        self.key_arity
    }

    /// Value list for a composite key; `None` when the key never occurred.
    ///
    /// A miss is the normal sparse-data case, not an error.
    pub fn get(&self, key: &[usize]) -> Option<&[usize]> {
        self.map.get(key).map(Vec::as_slice)
    }

    /// Check if a composite key has at least one value.
    pub fn contains_key(&self, key: &[usize]) -> bool {
        self.map.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the lookup is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(rows: &[[usize; 3]]) -> SparseRelation {
        let mut rel = SparseRelation::new(3);
        for row in rows {
            rel.insert(row.to_vec());
        }
        rel
    }

    #[test]
    fn test_normalize_relation() {
        let mut rel = Relation::new(3);
        rel.insert(vec!["j2".into(), "k1".into(), "l7".into()]);
        rel.insert(vec!["j1".into(), "k3".into(), "l1".into()]);

        let ids = normalize_relation(&rel).unwrap();
        let got: Vec<_> = ids.iter().cloned().collect();
        assert_eq!(got, vec![vec![1, 0, 6], vec![0, 2, 0]]);
    }

    #[test]
    fn test_normalize_bad_label() {
        let mut rel = Relation::new(3);
        rel.insert(vec!["j1".into(), "oops".into(), "l1".into()]);
        assert!(normalize_relation(&rel).is_err());
    }

    #[test]
    fn test_group_by_prefix() {
        let rel = triples(&[[0, 0, 2], [0, 0, 5], [1, 3, 0], [0, 1, 1]]);
        let grouped = GroupedLookup::group_by_prefix(&rel, 2);

        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped.get(&[0, 0]), Some(&[2, 5][..]));
        assert_eq!(grouped.get(&[1, 3]), Some(&[0][..]));
        assert_eq!(grouped.get(&[0, 1]), Some(&[1][..]));
        assert_eq!(grouped.get(&[9, 9]), None);
        assert!(grouped.contains_key(&[0, 0]));
        assert!(!grouped.contains_key(&[2, 2]));
    }

    #[test]
    fn test_group_value_order_follows_relation_order() {
        // Same keys, reversed insertion: value lists must flip too.
        let fwd = GroupedLookup::group_by_prefix(&triples(&[[0, 0, 2], [0, 0, 5]]), 2);
        let rev = GroupedLookup::group_by_prefix(&triples(&[[0, 0, 5], [0, 0, 2]]), 2);
        assert_eq!(fwd.get(&[0, 0]), Some(&[2, 5][..]));
        assert_eq!(rev.get(&[0, 0]), Some(&[5, 2][..]));
    }
}
