//! Export-folder discovery and table matching.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use toko_model::TableKind;

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Matches CSV files to legacy tables by filename token.
///
/// Stems are uppercased and matched against table codes with the longest
/// code tried first, so `TBL_RETUR_DETAIL` lands on `RETUR_DETAIL` and not
/// `RETUR`. When a table matches more than one file the first (filename
/// order) wins and the rest are ignored with a warning.
pub fn discover_tables(csv_files: &[PathBuf]) -> BTreeMap<TableKind, PathBuf> {
    let mut kinds_by_length: Vec<TableKind> = TableKind::all().to_vec();
    kinds_by_length.sort_by_key(|kind| std::cmp::Reverse(kind.code().len()));

    let mut discovered: BTreeMap<TableKind, PathBuf> = BTreeMap::new();
    for path in csv_files {
        let stem = path
            .file_stem()
            .and_then(|value| value.to_str())
            .unwrap_or("")
            .to_uppercase();
        let padded = format!("_{stem}_");
        let Some(kind) = kinds_by_length
            .iter()
            .copied()
            .find(|kind| padded.contains(&format!("_{}_", kind.code())))
        else {
            debug!(file = %path.display(), "no table matches filename, skipping");
            continue;
        };
        if let Some(existing) = discovered.get(&kind) {
            warn!(
                table = %kind,
                kept = %existing.display(),
                ignored = %path.display(),
                "duplicate export for table, keeping first"
            );
            continue;
        }
        discovered.insert(kind, path.clone());
    }
    discovered
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed_dir(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            std::fs::write(dir.path().join(name), "h\nr\n").unwrap();
        }
        dir
    }

    #[test]
    fn lists_only_csv_sorted() {
        let dir = seed_dir(&["b_buku.csv", "a_jual.CSV", "notes.txt"]);
        let files = list_csv_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].file_name().unwrap().to_str().unwrap().starts_with('a'));
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            list_csv_files(&missing),
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn longest_code_wins() {
        let dir = seed_dir(&["tbl_retur.csv", "tbl_retur_detail.csv", "tbl_jual_detail.csv"]);
        let files = list_csv_files(dir.path()).unwrap();
        let discovered = discover_tables(&files);
        assert!(discovered.contains_key(&TableKind::ReturHeader));
        assert!(discovered.contains_key(&TableKind::ReturDetail));
        assert!(discovered.contains_key(&TableKind::SalesDetail));
        assert!(!discovered.contains_key(&TableKind::SalesHeader));
    }

    #[test]
    fn duplicate_table_keeps_first_file() {
        let dir = seed_dir(&["a_buku.csv", "b_buku.csv"]);
        let files = list_csv_files(dir.path()).unwrap();
        let discovered = discover_tables(&files);
        let kept = discovered.get(&TableKind::Book).unwrap();
        assert_eq!(kept.file_name().unwrap(), "a_buku.csv");
    }

    #[test]
    fn unrelated_files_are_skipped() {
        let dir = seed_dir(&["export_summary.csv", "tbl_pelanggan.csv"]);
        let files = list_csv_files(dir.path()).unwrap();
        let discovered = discover_tables(&files);
        assert_eq!(discovered.len(), 1);
        assert!(discovered.contains_key(&TableKind::Customer));
    }
}
