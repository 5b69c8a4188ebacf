//! IJKLM experiment driver.
//!
//! Generates the benchmark instances, computes the sparse non-zero index
//! per experiment size, and times the model builders at growing |I|.
//!
//! Usage: `ijklm [cardinality_of_i] [cardinality_of_j] [--out DIR]`

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use ijklm::{
    compute_nonzero_index, generate_relation, incremental_range, normalize_relation,
    relation_tuples, save_results, save_to_json, time_repeat, Domain, GroupedLookup, LpInstance,
    ResultTable, RowPolicy, TimingRecord,
};

const DENSITY: f64 = 0.05;
const SEED: u64 = 13;
const REPEATS: usize = 3;
const NUMBER: usize = 1;
const TIME_LIMIT_SECS: f64 = 60.0;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut cardinality_of_i = 400_000;
    let mut cardinality_of_j = 20;
    let mut out = PathBuf::from("data/IJKLM");

    let mut positional = 0;
    let mut idx = 1;
    while idx < args.len() {
        match args[idx].as_str() {
            "--out" => {
                idx += 1;
                match args.get(idx) {
                    Some(dir) => out = PathBuf::from(dir),
                    None => {
                        eprintln!("--out needs a directory");
                        process::exit(2);
                    }
                }
            }
            arg => {
                let value = match arg.parse::<usize>() {
                    Ok(v) => v,
                    Err(_) => {
                        eprintln!("unexpected argument: {arg}");
                        eprintln!("usage: ijklm [cardinality_of_i] [cardinality_of_j] [--out DIR]");
                        process::exit(2);
                    }
                };
                match positional {
                    0 => cardinality_of_i = value,
                    1 => cardinality_of_j = value,
                    _ => {
                        eprintln!("too many arguments");
                        process::exit(2);
                    }
                }
                positional += 1;
            }
        }
        idx += 1;
    }

    if let Err(e) = run_experiment(cardinality_of_i, cardinality_of_j, &out) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run_experiment(
    cardinality_of_i: usize,
    cardinality_of_j: usize,
    out: &Path,
) -> ijklm::Result<()> {
    let mut rng = StdRng::seed_from_u64(SEED);

    // Fixed sets and relations, generated once per configuration.
    let j = Domain::new("j", cardinality_of_j);
    let k = Domain::new("k", cardinality_of_j);
    let l = Domain::new("l", cardinality_of_j);
    let m = Domain::new("m", cardinality_of_j);

    let jkl = generate_relation(&j, &k, &l, DENSITY, &mut rng);
    let klm = generate_relation(&k, &l, &m, DENSITY, &mut rng);
    let jkl_grouped = GroupedLookup::group_by_prefix(&normalize_relation(&jkl)?, 2);
    let klm_grouped = GroupedLookup::group_by_prefix(&normalize_relation(&klm)?, 2);

    let axis: Vec<usize> = incremental_range(1, cardinality_of_i + 1, 10, 10).collect();
    save_to_json(&axis, "N", "", out)?;
    save_to_json(&relation_tuples(&jkl), "JKL", "", out)?;
    save_to_json(&relation_tuples(&klm), "KLM", "", out)?;

    let mut intuitive = ResultTable::new();
    let mut fast = ResultTable::new();
    let mut prejoined = ResultTable::new();

    for n in axis {
        // Variable data is regenerated at every experiment size.
        let i = Domain::new("i", n);
        let ijk = generate_relation(&i, &j, &k, DENSITY, &mut rng);
        let ijk_ids = normalize_relation(&ijk)?;
        save_to_json(&relation_tuples(&ijk), "IJK", &format!("_{n}"), out)?;

        let nnz = compute_nonzero_index(i.len(), &ijk_ids, &jkl_grouped, &klm_grouped);

        // Intuitive builder: joins while it builds, drops short rows.
        if intuitive.below_time_limit(TIME_LIMIT_SECS) {
            let times = time_repeat(REPEATS, NUMBER, || {
                let nnz = compute_nonzero_index(i.len(), &ijk_ids, &jkl_grouped, &klm_grouped);
                let _ = LpInstance::build(&nnz, RowPolicy::AtLeastTwoTerms);
            });
            let record = TimingRecord::from_durations("intuitive", n, &times);
            log_step(&record);
            intuitive.push(record);
        }

        // Fast builder: joins while it builds, keeps every nonempty row.
        if fast.below_time_limit(TIME_LIMIT_SECS) {
            let times = time_repeat(REPEATS, NUMBER, || {
                let nnz = compute_nonzero_index(i.len(), &ijk_ids, &jkl_grouped, &klm_grouped);
                let _ = LpInstance::build(&nnz, RowPolicy::NonEmpty);
            });
            let record = TimingRecord::from_durations("fast", n, &times);
            log_step(&record);
            fast.push(record);
        }

        // Prejoined builder: consumes the non-zero index as-is.
        if prejoined.below_time_limit(TIME_LIMIT_SECS) {
            let times = time_repeat(REPEATS, NUMBER, || {
                let _ = LpInstance::build(&nnz, RowPolicy::NonEmpty);
            });
            let record = TimingRecord::from_durations("prejoined", n, &times);
            log_step(&record);
            prejoined.push(record);
        }
    }

    save_results(&intuitive, "intuitive", out)?;
    save_results(&fast, "fast", out)?;
    save_results(&prejoined, "prejoined", out)?;

    println!("results written to {}", out.display());
    Ok(())
}

fn log_step(record: &TimingRecord) {
    println!(
        "{}: n = {}, min {:.6}s, mean {:.6}s, median {:.6}s",
        record.builder, record.n, record.min_secs, record.mean_secs, record.median_secs
    );
}
