#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Target audience of a product, derived from the legacy group id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Audience {
    Guru,
    Siswa,
}

/// Settlement status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Lunas,
    Belum,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Lunas => "LUNAS",
            PaymentStatus::Belum => "BELUM",
        }
    }
}

/// Direction of a money movement relative to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

/// Which legacy table a payment originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentSource {
    Pelunasan,
    Tunai,
    NonFaktur,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub title: String,
    pub price: i64,
    /// School grade 1-12 parsed from the title, 0 when absent.
    pub grade: u8,
    pub publisher: String,
    pub audience: Audience,
    /// Seeded to zero; live stock is owned by the store after migration.
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub opening_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub customer_id: String,
    pub customer_name: String,
    pub date: String,
    pub total_bruto: i64,
    pub total_diskon: i64,
    pub total_netto: i64,
    pub total_retur: i64,
    pub paid: i64,
    pub total_qty: i64,
    pub status_pembayaran: PaymentStatus,
    /// `<store-safe customer name>_<status>`, a store-friendly grouping key.
    pub composite_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub invoice_id: String,
    pub product_id: String,
    pub title: String,
    pub price: i64,
    pub qty: i64,
    pub discount_pct: i64,
    pub subtotal: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub customer_id: String,
    pub customer_name: String,
    pub date: String,
    pub direction: Direction,
    pub source: PaymentSource,
    pub amount: i64,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAllocation {
    pub payment_id: String,
    pub invoice_id: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retur {
    pub invoice_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub date: String,
    pub direction: Direction,
    pub amount: i64,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturItem {
    pub retur_id: String,
    pub product_id: String,
    pub title: String,
    /// Effective unit price, `subtotal / qty` when qty > 0.
    pub price: i64,
    pub qty: i64,
    pub subtotal: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHistoryEntry {
    pub product_id: String,
    pub title: String,
    pub memo: String,
    pub stock_before: i64,
    pub stock_after: i64,
    pub delta: i64,
    pub actor: String,
    /// ISO date, resolved with a fallback chain during materialization.
    pub date: String,
}

/// Composite key builders.
///
/// Keys are deterministic functions of their parents so a re-run over the
/// same input lands on the same store paths.
pub fn invoice_item_key(invoice_id: &str, product_id: &str) -> String {
    format!("ITEM_{invoice_id}_{product_id}")
}

pub fn allocation_key(payment_id: &str, invoice_id: &str) -> String {
    format!("ALLOC_{payment_id}_{invoice_id}")
}

pub fn cash_payment_key(invoice_id: &str) -> String {
    format!("PAY_CASH_{invoice_id}")
}

pub fn retur_item_key(retur_id: &str, product_id: &str) -> String {
    format!("RITEM_{retur_id}_{product_id}")
}

pub fn stock_history_key(ref_id: &str, product_id: &str, row_index: usize) -> String {
    format!("HIST_{ref_id}_{product_id}_{row_index}")
}
