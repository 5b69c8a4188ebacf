//! Sparse relations over index sets.
//!
//! Relations are stored as ordered sets of tuples, never as dense
//! indicator arrays; at 5% density almost everything is zero.

mod normalize;
mod store;

pub use normalize::{normalize_relation, GroupedLookup, SparseRelation};
pub use store::{generate_relation, Relation};
