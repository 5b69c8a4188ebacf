//! IJKLM: sparse index-join core for the model-building benchmark.
//!
//! The benchmark times how long it takes to build an LP whose variables
//! live on the chained join IJK ⋈ JKL ⋈ KLM over sparse binary relations.
//!
//! # Key Insight
//!
//! At 5% density the dense I × J × K × L × M product is almost entirely
//! zero. The valid (i,j,k,l,m) indices (the "non-zero index") are computed
//! by walking the non-zero relation entries through grouped hash lookups
//! instead of enumerating and filtering the product.

pub mod domain;
pub mod error;
pub mod harness;
pub mod join;
pub mod model;
pub mod persist;
pub mod relation;

pub use domain::{parse_ordinal, Domain};
pub use error::{IjklmError, Result};
pub use harness::{incremental_range, time_repeat, ResultTable, TimingRecord};
pub use join::{compute_nonzero_index, NonzeroIndex};
pub use model::{ConstraintRow, LpInstance, RowPolicy};
pub use persist::{relation_tuples, save_results, save_to_json};
pub use relation::{
    generate_relation, normalize_relation, GroupedLookup, Relation, SparseRelation,
};
