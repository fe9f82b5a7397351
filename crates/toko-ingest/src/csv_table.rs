use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// One legacy export, read as positional rows with the header row stripped.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a legacy CSV export into a [`RawTable`].
///
/// The first non-blank record is treated as the header row and dropped; the
/// legacy exporter always writes one. Cells are trimmed and BOM-stripped,
/// fully blank records are skipped, and ragged rows are accepted as-is
/// (short rows read missing cells as empty downstream).
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut header_seen = false;
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }
        rows.push(row);
    }
    Ok(RawTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn header_row_is_stripped() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "tbl_buku.csv", "id,title,price,group\n1001,Buku A,5000,30\n");
        let table = read_raw_table(&path).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "1001");
    }

    #[test]
    fn blank_rows_and_padding_are_dropped() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "tbl_buku.csv",
            "id,title\n,,\n 1001 , Buku A \n,\n",
        );
        let table = read_raw_table(&path).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["1001".to_string(), "Buku A".to_string()]);
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "tbl_jual.csv", "a,b,c\nINV1,2020-01-01\n");
        let table = read_raw_table(&path).unwrap();
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn empty_file_yields_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "tbl_buku.csv", "");
        let table = read_raw_table(&path).unwrap();
        assert!(table.rows.is_empty());
    }
}
