#![deny(unsafe_code)]

//! Typed row records for the eleven legacy exports.
//!
//! The legacy ERP emits positionally-indexed CSV rows. Each table gets one
//! record type and one `from_row` mapper so column indices are consulted in
//! exactly one place; the rest of the pipeline works with named fields.
//! Missing trailing cells read as empty strings (the exports are ragged).

/// Reads a cell by index, tolerating short rows.
fn cell(row: &[String], index: usize) -> String {
    row.get(index).map(|value| value.trim().to_string()).unwrap_or_default()
}

/// Product master (`BUKU`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub id: String,
    pub title: String,
    pub price: String,
    pub group_id: String,
}

impl BookRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            title: cell(row, 1),
            price: cell(row, 2),
            group_id: cell(row, 3),
        }
    }
}

/// Customer master (`PELANGGAN`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub opening_balance: String,
}

impl CustomerRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            name: cell(row, 1),
            phone: cell(row, 2),
            opening_balance: cell(row, 3),
        }
    }
}

/// Sales header (`JUAL`), one row per invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesHeaderRow {
    pub id: String,
    pub date: String,
    pub customer_id: String,
    pub customer_name: String,
    pub total_bruto: String,
    pub total_diskon: String,
    pub total_netto: String,
    pub validated_by: String,
    pub void_by: String,
}

impl SalesHeaderRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            date: cell(row, 1),
            customer_id: cell(row, 2),
            customer_name: cell(row, 3),
            total_bruto: cell(row, 4),
            total_diskon: cell(row, 5),
            total_netto: cell(row, 6),
            validated_by: cell(row, 7),
            void_by: cell(row, 8),
        }
    }
}

/// Sales detail (`JUAL_DETAIL`), one row per invoice line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesDetailRow {
    pub invoice_id: String,
    pub product_id: String,
    pub qty: String,
    pub price: String,
    pub discount_pct: String,
    pub subtotal: String,
}

impl SalesDetailRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            invoice_id: cell(row, 0),
            product_id: cell(row, 1),
            qty: cell(row, 2),
            price: cell(row, 3),
            discount_pct: cell(row, 4),
            subtotal: cell(row, 5),
        }
    }
}

/// Receivables header (`PIUTANG`), one row per settlement payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivableHeaderRow {
    pub id: String,
    pub date: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount: String,
    pub memo: String,
    pub validated_by: String,
    pub void_by: String,
}

impl ReceivableHeaderRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            date: cell(row, 1),
            customer_id: cell(row, 2),
            customer_name: cell(row, 3),
            amount: cell(row, 4),
            memo: cell(row, 5),
            validated_by: cell(row, 6),
            void_by: cell(row, 7),
        }
    }
}

/// Receivables detail (`PIUTANG_DETAIL`), allocation of a payment to an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivableDetailRow {
    pub payment_id: String,
    pub invoice_id: String,
    pub amount: String,
}

impl ReceivableDetailRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            payment_id: cell(row, 0),
            invoice_id: cell(row, 1),
            amount: cell(row, 2),
        }
    }
}

/// Cash detail (`TUNAI_DETAIL`), cash paid at invoice time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashDetailRow {
    pub invoice_id: String,
    pub amount: String,
}

impl CashDetailRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            invoice_id: cell(row, 0),
            amount: cell(row, 1),
        }
    }
}

/// Non-invoice charges (`NON_FAKTUR`), receivables not tied to a sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonFakturRow {
    pub id: String,
    pub date: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount: String,
    pub memo: String,
    pub validated_by: String,
    pub void_by: String,
}

impl NonFakturRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            date: cell(row, 1),
            customer_id: cell(row, 2),
            customer_name: cell(row, 3),
            amount: cell(row, 4),
            memo: cell(row, 5),
            validated_by: cell(row, 6),
            void_by: cell(row, 7),
        }
    }
}

/// Return header (`RETUR`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturHeaderRow {
    pub id: String,
    pub date: String,
    pub invoice_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount: String,
    pub source_ref: String,
    pub validated_by: String,
    pub void_by: String,
}

impl ReturHeaderRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            id: cell(row, 0),
            date: cell(row, 1),
            invoice_id: cell(row, 2),
            customer_id: cell(row, 3),
            customer_name: cell(row, 4),
            amount: cell(row, 5),
            source_ref: cell(row, 6),
            validated_by: cell(row, 7),
            void_by: cell(row, 8),
        }
    }
}

/// Return detail (`RETUR_DETAIL`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturDetailRow {
    pub retur_id: String,
    pub product_id: String,
    pub qty: String,
    pub subtotal: String,
}

impl ReturDetailRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            retur_id: cell(row, 0),
            product_id: cell(row, 1),
            qty: cell(row, 2),
            subtotal: cell(row, 3),
        }
    }
}

/// Stock ledger (`STOK_HISTORY`), append-only stock change log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLedgerRow {
    pub ref_id: String,
    pub product_id: String,
    pub title: String,
    pub memo: String,
    pub stock_before: String,
    pub stock_after: String,
    pub date: String,
}

impl StockLedgerRow {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            ref_id: cell(row, 0),
            product_id: cell(row, 1),
            title: cell(row, 2),
            memo: cell(row, 3),
            stock_before: cell(row, 4),
            stock_after: cell(row, 5),
            date: cell(row, 6),
        }
    }
}
