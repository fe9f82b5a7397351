use std::collections::BTreeMap;

use toko_model::{
    Invoice, InvoiceItem, PaymentStatus, RejectKind, RejectedRow, SalesDetailRow, SalesHeaderRow,
    invoice_item_key,
};
use toko_transform::{check_validity, is_excluded_book_id, parse_amount, sanitize_id};

/// Builds the invoice map from the `JUAL` headers.
///
/// Rows failing the approval gate land in the rejects list and are skipped
/// whole. A zero net with a positive gross is recomputed as gross minus
/// discount; the legacy exporter sometimes leaves net blank.
pub fn materialize_invoices(
    rows: &[SalesHeaderRow],
    rejects: &mut Vec<RejectedRow>,
) -> BTreeMap<String, Invoice> {
    let mut invoices = BTreeMap::new();
    for row in rows {
        let key = sanitize_id(&row.id);
        if key.is_empty() {
            continue;
        }
        let validity = check_validity(&row.validated_by, &row.void_by);
        if let Some(reason) = validity.reject_reason() {
            rejects.push(RejectedRow {
                kind: RejectKind::Invoice,
                id: row.id.clone(),
                reason,
            });
            continue;
        }
        let total_bruto = parse_amount(&row.total_bruto);
        let total_diskon = parse_amount(&row.total_diskon);
        let mut total_netto = parse_amount(&row.total_netto);
        if total_netto == 0 && total_bruto > 0 {
            total_netto = total_bruto - total_diskon;
        }
        invoices.insert(
            key,
            Invoice {
                customer_id: sanitize_id(&row.customer_id),
                customer_name: row.customer_name.clone(),
                date: row.date.clone(),
                total_bruto,
                total_diskon,
                total_netto,
                total_retur: 0,
                paid: 0,
                total_qty: 0,
                status_pembayaran: PaymentStatus::Belum,
                composite_status: String::new(),
            },
        );
    }
    invoices
}

/// Builds the invoice-item map from the `JUAL_DETAIL` rows.
///
/// Also accumulates per-invoice quantities, copied into the invoice during
/// the derivation pass. The `ITEM_<invoice>_<product>` key scheme means a
/// duplicate detail row for the same pair overwrites the earlier one.
pub fn materialize_invoice_items(
    rows: &[SalesDetailRow],
    book_titles: &BTreeMap<String, String>,
) -> (BTreeMap<String, InvoiceItem>, BTreeMap<String, i64>) {
    let mut items = BTreeMap::new();
    let mut qty_totals: BTreeMap<String, i64> = BTreeMap::new();
    for row in rows {
        let invoice_id = sanitize_id(&row.invoice_id);
        let product_id = sanitize_id(&row.product_id);
        if invoice_id.is_empty() || product_id.is_empty() {
            continue;
        }
        if is_excluded_book_id(&row.product_id) {
            continue;
        }
        let qty = parse_amount(&row.qty);
        *qty_totals.entry(invoice_id.clone()).or_insert(0) += qty;
        items.insert(
            invoice_item_key(&invoice_id, &product_id),
            InvoiceItem {
                title: book_titles.get(&product_id).cloned().unwrap_or_default(),
                invoice_id,
                product_id,
                price: parse_amount(&row.price),
                qty,
                discount_pct: parse_amount(&row.discount_pct),
                subtotal: parse_amount(&row.subtotal),
            },
        );
    }
    (items, qty_totals)
}
