use std::collections::BTreeMap;

use toko_model::{
    Direction, Invoice, RejectKind, RejectedRow, Retur, ReturDetailRow, ReturHeaderRow, ReturItem,
    retur_item_key,
};
use toko_transform::{check_validity, is_excluded_book_id, parse_amount, sanitize_id};

use crate::derive::ReturnAdjustment;

/// Builds the return map from the `RETUR` headers.
///
/// The same approval gate as invoices applies. Customer linkage prefers the
/// parent invoice; a return whose invoice is gone still materializes from its
/// own customer columns. Invoice adjustments are collected as deltas and
/// applied later in the derivation pass, so invoice mutation happens in one
/// place.
pub fn materialize_returns(
    rows: &[ReturHeaderRow],
    invoices: &BTreeMap<String, Invoice>,
    rejects: &mut Vec<RejectedRow>,
) -> (BTreeMap<String, Retur>, Vec<ReturnAdjustment>) {
    let mut returns = BTreeMap::new();
    let mut adjustments = Vec::new();
    for row in rows {
        let key = sanitize_id(&row.id);
        if key.is_empty() {
            continue;
        }
        let validity = check_validity(&row.validated_by, &row.void_by);
        if let Some(reason) = validity.reject_reason() {
            rejects.push(RejectedRow {
                kind: RejectKind::Return,
                id: row.id.clone(),
                reason,
            });
            continue;
        }
        let invoice_id = sanitize_id(&row.invoice_id);
        let amount = parse_amount(&row.amount);
        let (customer_id, customer_name) = match invoices.get(&invoice_id) {
            Some(invoice) => (invoice.customer_id.clone(), invoice.customer_name.clone()),
            None => (sanitize_id(&row.customer_id), row.customer_name.clone()),
        };
        if invoices.contains_key(&invoice_id) {
            adjustments.push(ReturnAdjustment {
                invoice_id: invoice_id.clone(),
                amount,
            });
        }
        returns.insert(
            key,
            Retur {
                invoice_id,
                customer_id,
                customer_name,
                date: row.date.clone(),
                direction: Direction::Out,
                amount,
                memo: format!("Retur No: {}", row.source_ref),
            },
        );
    }
    (returns, adjustments)
}

/// Builds the return-item map from the `RETUR_DETAIL` rows.
///
/// Items without a materialized parent return are orphans from rejected
/// headers and are dropped. The detail rows carry no unit price, so it is
/// derived from the subtotal.
pub fn materialize_retur_items(
    rows: &[ReturDetailRow],
    returns: &BTreeMap<String, Retur>,
    book_titles: &BTreeMap<String, String>,
) -> BTreeMap<String, ReturItem> {
    let mut items = BTreeMap::new();
    for row in rows {
        let retur_id = sanitize_id(&row.retur_id);
        let product_id = sanitize_id(&row.product_id);
        if retur_id.is_empty() || product_id.is_empty() {
            continue;
        }
        if !returns.contains_key(&retur_id) || is_excluded_book_id(&row.product_id) {
            continue;
        }
        let qty = parse_amount(&row.qty);
        let subtotal = parse_amount(&row.subtotal);
        let price = if qty > 0 { subtotal / qty } else { 0 };
        items.insert(
            retur_item_key(&retur_id, &product_id),
            ReturItem {
                title: book_titles.get(&product_id).cloned().unwrap_or_default(),
                retur_id,
                product_id,
                price,
                qty,
                subtotal,
            },
        );
    }
    items
}
