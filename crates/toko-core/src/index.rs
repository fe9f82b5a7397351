//! Cross-table lookup indexes built before entity materialization.

use std::collections::BTreeMap;

use toko_model::{Invoice, Product, Retur};

/// product id -> title, so line items denormalize without repeated joins.
pub fn build_book_titles(products: &BTreeMap<String, Product>) -> BTreeMap<String, String> {
    products
        .iter()
        .map(|(id, product)| (id.clone(), product.title.clone()))
        .collect()
}

/// invoice id -> owning customer id, from materialized (valid) invoices.
pub fn build_invoice_owners(invoices: &BTreeMap<String, Invoice>) -> BTreeMap<String, String> {
    invoices
        .iter()
        .map(|(id, invoice)| (id.clone(), invoice.customer_id.clone()))
        .collect()
}

/// Extends the owner index so return ids resolve to a customer too.
///
/// Stock-ledger rows reference sales (`SL`) and returns (`RJ`) by their own
/// ids; mapping both through one index saves a second pass over headers.
pub fn extend_owners_with_returns(
    owners: &mut BTreeMap<String, String>,
    returns: &BTreeMap<String, Retur>,
) {
    for (id, retur) in returns {
        if retur.customer_id.is_empty() {
            continue;
        }
        owners.insert(id.clone(), retur.customer_id.clone());
    }
}
