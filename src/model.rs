//! LP instance assembly from the non-zero index.
//!
//! This is what the benchmarked model builders do with the join output:
//! lay out one nonnegative variable per surviving (i,j,k,l,m) index and one
//! `sum(x) >= 0` row per i, under a constant objective. The instance is a
//! layout only; solving is out of scope.

use crate::join::NonzeroIndex;

/// Which per-i rows make it into the instance.
///
/// The two benchmarked builders disagree here: the intuitive one drops rows
/// with fewer than two terms, the fast one keeps any nonempty row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPolicy {
    /// Keep any row with at least one term
    NonEmpty,
    /// Drop rows with fewer than two terms
    AtLeastTwoTerms,
}

/// One `sum(x[cols]) >= 0` constraint row for a single i.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintRow {
    /// The i this row constrains
    pub i: usize,
    /// Column ids of the variables in the row
    pub cols: Vec<usize>,
}

/// A built model instance over the non-zero index.
///
/// Columns are numbered in non-zero index iteration order; `var_index`
/// records the (i,j,k,l,m) behind each column.
#[derive(Debug, Clone, Default)]
pub struct LpInstance {
    /// Number of nonnegative variables (columns)
    pub num_vars: usize,
    /// (i, j, k, l, m) behind each column, in column order
    pub var_index: Vec<[usize; 5]>,
    /// Retained rows, in ascending i order
    pub rows: Vec<ConstraintRow>,
}

impl LpInstance {
    /// Assemble an instance from a non-zero index.
    ///
    /// Variables exist for every tuple regardless of `policy`; the policy
    /// only decides which rows are kept.
    pub fn build(nnz: &NonzeroIndex, policy: RowPolicy) -> Self {
        let mut var_index = Vec::with_capacity(nnz.total_tuples());
        let mut rows = Vec::with_capacity(nnz.len());

        for (i, tuples) in nnz.iter() {
            let first_col = var_index.len();
            for &[j, k, l, m] in tuples {
                var_index.push([i, j, k, l, m]);
            }
            let cols: Vec<usize> = (first_col..var_index.len()).collect();

            let keep = match policy {
                RowPolicy::NonEmpty => !cols.is_empty(),
                RowPolicy::AtLeastTwoTerms => cols.len() >= 2,
            };
            if keep {
                rows.push(ConstraintRow { i, cols });
            }
        }

        Self {
            num_vars: var_index.len(),
            var_index,
            rows,
        }
    }

    /// Number of retained constraint rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}
