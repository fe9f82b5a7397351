//! Typed loading of a whole export folder.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use toko_model::{
    BookRow, CashDetailRow, CustomerRow, NonFakturRow, ReceivableDetailRow, ReceivableHeaderRow,
    ReturDetailRow, ReturHeaderRow, SalesDetailRow, SalesHeaderRow, StockLedgerRow, TableKind,
    TableSet,
};

use crate::csv_table::read_raw_table;
use crate::discovery::{discover_tables, list_csv_files};
use crate::error::Result;

/// Discovers and loads every recognized export in `dir` into typed rows.
pub fn load_export_folder(dir: &Path) -> Result<TableSet> {
    let csv_files = list_csv_files(dir)?;
    let discovered = discover_tables(&csv_files);
    load_tables(&discovered)
}

/// Loads already-discovered exports into typed rows.
///
/// Tables with no matching file stay at their defaults (`None` for the
/// mandatory masters, empty for the rest); the pipeline decides what that
/// means. Unreadable files abort the load, nothing partial is returned.
pub fn load_tables(discovered: &BTreeMap<TableKind, PathBuf>) -> Result<TableSet> {
    let mut tables = TableSet::default();
    for (kind, path) in discovered {
        let raw = read_raw_table(path)?;
        let row_count = raw.rows.len();
        match kind {
            TableKind::Book => {
                tables.books = Some(raw.rows.iter().map(|row| BookRow::from_row(row)).collect());
            }
            TableKind::Customer => {
                tables.customers = Some(
                    raw.rows
                        .iter()
                        .map(|row| CustomerRow::from_row(row))
                        .collect(),
                );
            }
            TableKind::SalesHeader => {
                tables.sales_headers = raw
                    .rows
                    .iter()
                    .map(|row| SalesHeaderRow::from_row(row))
                    .collect();
            }
            TableKind::SalesDetail => {
                tables.sales_details = raw
                    .rows
                    .iter()
                    .map(|row| SalesDetailRow::from_row(row))
                    .collect();
            }
            TableKind::ReceivableHeader => {
                tables.receivable_headers = raw
                    .rows
                    .iter()
                    .map(|row| ReceivableHeaderRow::from_row(row))
                    .collect();
            }
            TableKind::ReceivableDetail => {
                tables.receivable_details = raw
                    .rows
                    .iter()
                    .map(|row| ReceivableDetailRow::from_row(row))
                    .collect();
            }
            TableKind::CashDetail => {
                tables.cash_details = raw
                    .rows
                    .iter()
                    .map(|row| CashDetailRow::from_row(row))
                    .collect();
            }
            TableKind::NonFaktur => {
                tables.non_faktur = raw
                    .rows
                    .iter()
                    .map(|row| NonFakturRow::from_row(row))
                    .collect();
            }
            TableKind::ReturHeader => {
                tables.retur_headers = raw
                    .rows
                    .iter()
                    .map(|row| ReturHeaderRow::from_row(row))
                    .collect();
            }
            TableKind::ReturDetail => {
                tables.retur_details = raw
                    .rows
                    .iter()
                    .map(|row| ReturDetailRow::from_row(row))
                    .collect();
            }
            TableKind::StockLedger => {
                tables.stock_ledger = raw
                    .rows
                    .iter()
                    .map(|row| StockLedgerRow::from_row(row))
                    .collect();
            }
        }
        info!(table = %kind, file = %path.display(), rows = row_count, "table loaded");
    }
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_typed_rows_per_table() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("tbl_buku.csv"),
            "id,title,price,group\n1001,Buku A,5000,30\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("tbl_pelanggan.csv"),
            "id,name,phone,saldo\nC1,Budi,0812,0\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("tbl_tunai_detail.csv"),
            "invoice,amount\nINV1,5000\n",
        )
        .unwrap();

        let tables = load_export_folder(dir.path()).unwrap();
        assert_eq!(tables.books.as_ref().unwrap().len(), 1);
        assert_eq!(tables.customers.as_ref().unwrap()[0].name, "Budi");
        assert_eq!(tables.cash_details[0].invoice_id, "INV1");
        assert!(tables.sales_headers.is_empty());
        assert!(tables.books.is_some());
    }

    #[test]
    fn unmatched_masters_stay_unsupplied() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("tbl_jual.csv"), "h\nINV1\n").unwrap();
        let tables = load_export_folder(dir.path()).unwrap();
        assert!(tables.books.is_none());
        assert!(tables.customers.is_none());
        assert_eq!(tables.sales_headers.len(), 1);
    }
}
