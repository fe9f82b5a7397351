//! JSON output writers.
//!
//! The bundle file is shaped for a bulk multi-path store write; rejects and
//! stats are split out separately so an operator can review voided rows
//! without loading the full graph. Map keys are `BTreeMap`-ordered, so the
//! files are byte-stable across re-runs on the same input.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use toko_model::MigrationBundle;

pub const BUNDLE_FILE: &str = "bundle.json";
pub const REJECTS_FILE: &str = "rejects.json";
pub const STATS_FILE: &str = "stats.json";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

fn write_json<T: Serialize>(output_dir: &Path, file_name: &str, value: &T) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(file_name);
    let payload = serde_json::to_string_pretty(value).map_err(|source| ReportError::Serialize {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, payload).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Writes the full store-ready bundle, returns the file path.
pub fn write_bundle_json(output_dir: &Path, bundle: &MigrationBundle) -> Result<PathBuf> {
    write_json(output_dir, BUNDLE_FILE, bundle)
}

/// Writes the reject list for operator review.
pub fn write_rejects_json(output_dir: &Path, bundle: &MigrationBundle) -> Result<PathBuf> {
    write_json(output_dir, REJECTS_FILE, &bundle.rejects)
}

/// Writes the per-entity count summary.
pub fn write_stats_json(output_dir: &Path, bundle: &MigrationBundle) -> Result<PathBuf> {
    write_json(output_dir, STATS_FILE, &bundle.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;
    use toko_model::{MigrationStats, RejectKind, RejectedRow};

    fn empty_bundle() -> MigrationBundle {
        let mut bundle = MigrationBundle {
            products: BTreeMap::new(),
            customers: BTreeMap::new(),
            invoices: BTreeMap::new(),
            invoice_items: BTreeMap::new(),
            payments: BTreeMap::new(),
            non_faktur: BTreeMap::new(),
            payment_allocations: BTreeMap::new(),
            returns: BTreeMap::new(),
            return_items: BTreeMap::new(),
            stock_history: BTreeMap::new(),
            rejects: vec![RejectedRow {
                kind: RejectKind::Invoice,
                id: "INV9".to_string(),
                reason: "Not Validated".to_string(),
            }],
            stats: MigrationStats::default(),
            migrated_at: "2021-06-15T10:00:00Z".to_string(),
        };
        bundle.compute_stats();
        bundle
    }

    #[test]
    fn bundle_round_trips_through_json() {
        let dir = TempDir::new().unwrap();
        let bundle = empty_bundle();
        let path = write_bundle_json(dir.path(), &bundle).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let read_back: MigrationBundle = serde_json::from_str(&raw).unwrap();
        assert_eq!(read_back, bundle);
    }

    #[test]
    fn bundle_exposes_store_paths() {
        let dir = TempDir::new().unwrap();
        let path = write_bundle_json(dir.path(), &empty_bundle()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        for top_level in [
            "products",
            "customers",
            "invoices",
            "invoice_items",
            "payments",
            "non_faktur",
            "payment_allocations",
            "returns",
            "return_items",
            "stock_history",
        ] {
            assert!(value.get(top_level).is_some(), "missing path {top_level}");
        }
        assert_eq!(value["migratedAt"], "2021-06-15T10:00:00Z");
    }

    #[test]
    fn rejects_file_holds_reason_strings() {
        let dir = TempDir::new().unwrap();
        let path = write_rejects_json(dir.path(), &empty_bundle()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["type"], "invoice");
        assert_eq!(value[0]["reason"], "Not Validated");
    }

    #[test]
    fn stats_file_counts_rejects() {
        let dir = TempDir::new().unwrap();
        let path = write_stats_json(dir.path(), &empty_bundle()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["voidCount"], 1);
        assert_eq!(value["products"], 0);
    }

    #[test]
    fn output_dir_is_created_on_demand() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out").join("deep");
        let path = write_stats_json(&nested, &empty_bundle()).unwrap();
        assert!(path.exists());
    }
}
