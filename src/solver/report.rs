//! CSV report emission.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the per-epoch average best fitness to a CSV file.
///
/// One row per epoch, 0-indexed, under the header
/// `epoch,avg best fitness`.
pub fn write_csv<P: AsRef<Path>>(path: P, avg_best_fitness: &[f64]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "epoch,avg best fitness")?;
    for (epoch, avg) in avg_best_fitness.iter().enumerate() {
        writeln!(writer, "{epoch},{avg}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("report.csv");

        write_csv(&path, &[0.25, 0.5, 1.0]).expect("write csv");

        let contents = fs::read_to_string(&path).expect("read csv back");
        assert_eq!(
            contents,
            "epoch,avg best fitness\n0,0.25\n1,0.5\n2,1\n"
        );
    }

    #[test]
    fn test_empty_history_writes_header_only() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[]).expect("write csv");

        let contents = fs::read_to_string(&path).expect("read csv back");
        assert_eq!(contents, "epoch,avg best fitness\n");
    }
}
