//! JSON persistence of experiment data.
//!
//! Index sets, label tuples and result tables are written as plain JSON
//! arrays so other implementations of the benchmark can consume the same
//! instances.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::harness::ResultTable;
use crate::relation::Relation;

/// Write `value` to `<dir>/<name><suffix>.json`, creating `dir` as needed.
/// Returns the path written.
pub fn save_to_json<T: Serialize + ?Sized>(
    value: &T,
    name: &str,
    suffix: &str,
    dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{name}{suffix}.json"));
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(path)
}

/// A relation's label tuples as a JSON-ready list of lists.
pub fn relation_tuples(rel: &Relation) -> Vec<Vec<String>> {
    rel.iter().cloned().collect()
}

/// Write a result table to `<dir>/results_<name>.json`.
pub fn save_results(table: &ResultTable, name: &str, dir: &Path) -> Result<PathBuf> {
    save_to_json(&table.records, &format!("results_{name}"), "", dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::TimingRecord;
    use std::time::Duration;

    #[test]
    fn test_save_relation_tuples() {
        let dir = tempfile::tempdir().unwrap();

        let mut rel = Relation::new(3);
        rel.insert(vec!["j1".into(), "k2".into(), "l3".into()]);
        rel.insert(vec!["j2".into(), "k1".into(), "l1".into()]);

        let path = save_to_json(&relation_tuples(&rel), "JKL", "", dir.path()).unwrap();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("JKL.json"));

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0][0], "j1");
        assert_eq!(value[1][2], "l1");
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_save_with_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let ns = vec![1usize, 11, 31];
        let path = save_to_json(&ns, "IJK", "_11", dir.path()).unwrap();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("IJK_11.json"));
    }

    #[test]
    fn test_save_results() {
        let dir = tempfile::tempdir().unwrap();

        let mut table = ResultTable::new();
        table.push(TimingRecord::from_durations(
            "fast",
            11,
            &[Duration::from_millis(5)],
        ));
        let path = save_results(&table, "ijklm", dir.path()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["builder"], "fast");
        assert_eq!(value[0]["n"], 11);
    }
}
