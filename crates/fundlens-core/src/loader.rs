//! CSV loading into a raw table
//!
//! The dataset location is always an explicit argument; there is no
//! fallback file path or implicit data directory. The loader keeps every
//! cell as the string it arrived as — all typing happens later in
//! `normalize` — and tolerates ragged rows by padding or truncating them
//! to the header width.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::Result;
use crate::models::RawTable;

/// Load a raw table from any reader
pub fn load_reader<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let width = columns.len();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
        // Ragged rows happen in hand-edited exports; square them off
        row.resize(width, String::new());
        rows.push(row);
    }

    debug!(columns = width, rows = rows.len(), "Loaded raw table");
    Ok(RawTable::new(columns, rows))
}

/// Load a raw table from a CSV file at an explicit path
pub fn load_path(path: &Path) -> Result<RawTable> {
    let file = File::open(path)?;
    load_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_reader() {
        let csv = "Startup Name,Amount in USD\nAcme,\"$1,000\"\nZen Labs,500";
        let table = load_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.columns, vec!["Startup Name", "Amount in USD"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 1), Some("$1,000"));
        assert_eq!(table.cell(1, 0), Some("Zen Labs"));
    }

    #[test]
    fn test_load_reader_squares_ragged_rows() {
        let csv = "A,B,C\n1,2\n1,2,3,4";
        let table = load_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        // Short row padded with empty cells
        assert_eq!(table.cell(0, 2), Some(""));
        // Long row truncated to the header width
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_load_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Startup,Amount").unwrap();
        writeln!(file, "Acme,100").unwrap();
        file.flush().unwrap();

        let table = load_path(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, 0), Some("Acme"));
    }

    #[test]
    fn test_load_path_missing_file() {
        let err = load_path(Path::new("/nonexistent/funding.csv")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
