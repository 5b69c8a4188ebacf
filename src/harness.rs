//! Timing harness for repeated model builds.
//!
//! Wall-clock timing only, in the timeit.repeat mold: `number` calls per
//! repeat, `repeats` repeats, then min/mean/median over the repeats.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Run `f` `number` times per repeat, `repeats` times, returning the
/// wall-clock duration of each repeat.
pub fn time_repeat<F: FnMut()>(repeats: usize, number: usize, mut f: F) -> Vec<Duration> {
    let mut out = Vec::with_capacity(repeats);
    for _ in 0..repeats {
        let start = Instant::now();
        for _ in 0..number {
            f();
        }
        out.push(start.elapsed());
    }
    out
}

/// Summary of one builder at one experiment size.
#[derive(Debug, Clone, Serialize)]
pub struct TimingRecord {
    /// Builder name ("fast", "intuitive", ...)
    pub builder: String,
    /// |I| for this step
    pub n: usize,
    /// Fastest repeat, seconds
    pub min_secs: f64,
    /// Mean over repeats, seconds
    pub mean_secs: f64,
    /// Median over repeats, seconds
    pub median_secs: f64,
}

impl TimingRecord {
    /// Summarize a set of repeat durations.
    pub fn from_durations(builder: &str, n: usize, times: &[Duration]) -> Self {
        let mut secs: Vec<f64> = times.iter().map(Duration::as_secs_f64).collect();
        secs.sort_by(f64::total_cmp);

        let min = secs.first().copied().unwrap_or(0.0);
        let mean = if secs.is_empty() {
            0.0
        } else {
            secs.iter().sum::<f64>() / secs.len() as f64
        };
        let median = match secs.len() {
            0 => 0.0,
            len if len % 2 == 0 => (secs[len / 2 - 1] + secs[len / 2]) / 2.0,
            len => secs[len / 2],
        };

        Self {
            builder: builder.to_string(),
            n,
            min_secs: min,
            mean_secs: mean,
            median_secs: median,
        }
    }
}

/// Accumulated records for one builder across experiment sizes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultTable {
    /// Records in the order they were produced
    pub records: Vec<TimingRecord>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: TimingRecord) {
        self.records.push(record);
    }

    /// True while the accumulated mean times have not spent the budget.
    /// Gates whether a builder gets to run the next experiment size.
    pub fn below_time_limit(&self, limit_secs: f64) -> bool {
        self.records.iter().map(|r| r.mean_secs).sum::<f64>() < limit_secs
    }
}

/// The experiment axis: `start`, then strides growing by `inc` each step.
///
/// `incremental_range(1, 101, 10, 10)` yields 1, 11, 31, 61; iteration
/// stops once the value reaches `stop`.
pub fn incremental_range(
    start: usize,
    stop: usize,
    step: usize,
    inc: usize,
) -> impl Iterator<Item = usize> {
    let mut value = start;
    let mut step = step;
    std::iter::from_fn(move || {
        if value >= stop {
            return None;
        }
        let current = value;
        value += step;
        step += inc;
        Some(current)
    })
}
