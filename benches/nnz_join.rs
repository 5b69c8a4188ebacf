//! Benchmarks for the sparse non-zero-index join and model assembly.
//!
//! Instance shapes follow the benchmark's defaults: |J|=|K|=|L|=|M|=20,
//! density 0.05, |I| swept.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ijklm::{
    compute_nonzero_index, generate_relation, normalize_relation, Domain, GroupedLookup,
    LpInstance, RowPolicy, SparseRelation,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DENSITY: f64 = 0.05;
const CARD: usize = 20;

/// Fixed JKL and KLM lookups shared by every |I| size.
fn fixed_lookups(rng: &mut StdRng) -> (GroupedLookup, GroupedLookup) {
    let j = Domain::new("j", CARD);
    let k = Domain::new("k", CARD);
    let l = Domain::new("l", CARD);
    let m = Domain::new("m", CARD);

    let jkl = normalize_relation(&generate_relation(&j, &k, &l, DENSITY, rng)).unwrap();
    let klm = normalize_relation(&generate_relation(&k, &l, &m, DENSITY, rng)).unwrap();
    (
        GroupedLookup::group_by_prefix(&jkl, 2),
        GroupedLookup::group_by_prefix(&klm, 2),
    )
}

/// A normalized IJK relation for a given |I|.
fn variable_ijk(n: usize, rng: &mut StdRng) -> SparseRelation {
    let i = Domain::new("i", n);
    let j = Domain::new("j", CARD);
    let k = Domain::new("k", CARD);
    normalize_relation(&generate_relation(&i, &j, &k, DENSITY, rng)).unwrap()
}

fn bench_group_by_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_prefix");
    let mut rng = StdRng::seed_from_u64(13);

    for size in [100, 500, 1000, 5000].iter() {
        let ijk = variable_ijk(*size, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(size), &ijk, |bench, ijk| {
            bench.iter(|| GroupedLookup::group_by_prefix(ijk, 2));
        });
    }

    group.finish();
}

fn bench_nonzero_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("nonzero_index");
    let mut rng = StdRng::seed_from_u64(13);
    let (jkl, klm) = fixed_lookups(&mut rng);

    for size in [100, 500, 1000, 5000].iter() {
        let ijk = variable_ijk(*size, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(size), &ijk, |bench, ijk| {
            bench.iter(|| compute_nonzero_index(*size, ijk, &jkl, &klm));
        });
    }

    group.finish();
}

fn bench_model_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_build");
    let mut rng = StdRng::seed_from_u64(13);
    let (jkl, klm) = fixed_lookups(&mut rng);

    for size in [1000, 5000].iter() {
        let ijk = variable_ijk(*size, &mut rng);
        let nnz = compute_nonzero_index(*size, &ijk, &jkl, &klm);

        group.bench_with_input(BenchmarkId::new("fast", size), &nnz, |bench, nnz| {
            bench.iter(|| LpInstance::build(nnz, RowPolicy::NonEmpty));
        });
        group.bench_with_input(BenchmarkId::new("intuitive", size), &nnz, |bench, nnz| {
            bench.iter(|| LpInstance::build(nnz, RowPolicy::AtLeastTwoTerms));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_group_by_prefix,
    bench_nonzero_index,
    bench_model_build
);
criterion_main!(benches);
