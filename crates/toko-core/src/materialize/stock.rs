use std::collections::BTreeMap;

use chrono::NaiveDate;

use toko_model::{Customer, StockHistoryEntry, StockLedgerRow, stock_history_key};
use toko_transform::{is_excluded_book_id, parse_amount, parse_ledger_date, sanitize_id};

/// Actor label for back-office reference codes (`PS`, `MR`).
const ACTOR_ADMIN: &str = "ADMIN";
/// Actor label for reference codes nothing in the migration recognizes.
const ACTOR_SYSTEM: &str = "SYSTEM";

/// Builds the stock-history map from the `STOK_HISTORY` ledger.
///
/// Reference-code prefixes drive actor resolution: `PS`/`MR` are back-office
/// movements, `SL`/`RJ` resolve to the owning customer through the extended
/// owner index (and tag the memo with the name). The row index goes into the
/// key because the same (ref, product) pair legitimately repeats.
pub fn materialize_stock_history(
    rows: &[StockLedgerRow],
    invoice_owners: &BTreeMap<String, String>,
    customers: &BTreeMap<String, Customer>,
    book_titles: &BTreeMap<String, String>,
    fallback_date: NaiveDate,
) -> BTreeMap<String, StockHistoryEntry> {
    let mut history = BTreeMap::new();
    for (row_index, row) in rows.iter().enumerate() {
        let ref_id = sanitize_id(&row.ref_id);
        let product_id = sanitize_id(&row.product_id);
        if ref_id.is_empty() && product_id.is_empty() {
            continue;
        }
        if is_excluded_book_id(&row.product_id) {
            continue;
        }
        let date = parse_ledger_date(&row.date, fallback_date)
            .format("%Y-%m-%d")
            .to_string();
        let mut memo = row.memo.clone();
        let actor = if ref_id.starts_with("PS") || ref_id.starts_with("MR") {
            ACTOR_ADMIN.to_string()
        } else if ref_id.starts_with("SL") || ref_id.starts_with("RJ") {
            let owner_name = invoice_owners
                .get(&ref_id)
                .and_then(|customer_id| customers.get(customer_id))
                .map(|customer| customer.name.clone());
            match owner_name {
                Some(name) => {
                    memo.push_str(" + ");
                    memo.push_str(&name);
                    name
                }
                None => ACTOR_ADMIN.to_string(),
            }
        } else {
            ACTOR_SYSTEM.to_string()
        };
        let stock_before = parse_amount(&row.stock_before);
        let stock_after = parse_amount(&row.stock_after);
        history.insert(
            stock_history_key(&ref_id, &product_id, row_index),
            StockHistoryEntry {
                title: book_titles
                    .get(&product_id)
                    .cloned()
                    .unwrap_or_else(|| row.title.clone()),
                product_id,
                memo,
                stock_before,
                stock_after,
                delta: stock_after - stock_before,
                actor,
                date,
            },
        );
    }
    history
}
