//! Labeled sparse relations and their Bernoulli generator.

use indexmap::IndexSet;
use rand::Rng;

use crate::domain::Domain;

/// A sparse relation over labels, as an insertion-ordered set of tuples.
///
/// For IJK(i,j,k) we store the set {(i,j,k) : the sampled indicator was 1}.
/// Insertion order is preserved: downstream grouping and joins are defined
/// in terms of the order this relation yields its tuples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relation {
    /// Number of components per tuple (arity of the relation)
    pub arity: usize,
    /// Tuples where the relation holds, in insertion order
    pub tuples: IndexSet<Vec<String>>,
}

impl Relation {
    /// Create a new empty relation with given arity.
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            tuples: IndexSet::new(),
        }
    }

    /// Insert a tuple into the relation.
    pub fn insert(&mut self, tuple: Vec<String>) {
        debug_assert_eq!(tuple.len(), self.arity);
        self.tuples.insert(tuple);
    }

    /// Check if a tuple is in the relation.
    pub fn contains(&self, tuple: &[String]) -> bool {
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
    pub fn iter(&self) -> impl Iterator<Item = &Vec<String>> {
        self.tuples.iter()
    }
}

/// Draw a Bernoulli(`density`) indicator for every (a, b, c) in A x B x C
/// and keep the tuples whose indicator came up 1.
///
/// The product is iterated in (a, b, c) order, so the output relation is
/// fully determined by the RNG seed and the set sizes.
pub fn generate_relation<R: Rng>(
    a: &Domain,
    b: &Domain,
    c: &Domain,
    density: f64,
    rng: &mut R,
) -> Relation {
    let mut rel = Relation::new(3);
    for la in a.labels() {
        for lb in b.labels() {
            for lc in c.labels() {
                if rng.gen_bool(density) {
                    rel.insert(vec![la.clone(), lb.clone(), lc.clone()]);
                }
            }
        }
    }
    rel
}
