//! Post-materialization derivation: the only place invoices are written twice.

use std::collections::BTreeMap;

use toko_model::{Invoice, PaymentAllocation, PaymentStatus};
use toko_transform::store_safe_key;

/// Absorbs rounding noise left behind by the legacy system; a remainder of
/// at most this many currency units still counts as settled.
pub const SETTLEMENT_TOLERANCE: i64 = 100;

/// A deferred invoice adjustment collected while materializing returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnAdjustment {
    pub invoice_id: String,
    pub amount: i64,
}

/// Applies return deltas and payment aggregates to every invoice.
///
/// Order matters: return deltas first, so settlement is judged against the
/// post-return net. Adjustments for invoices not in the map (rejected or
/// missing headers) are ignored; the return itself was already recorded.
pub fn apply_derivations(
    invoices: &mut BTreeMap<String, Invoice>,
    allocations: &BTreeMap<String, PaymentAllocation>,
    adjustments: &[ReturnAdjustment],
    qty_totals: &BTreeMap<String, i64>,
) {
    for adjustment in adjustments {
        if let Some(invoice) = invoices.get_mut(&adjustment.invoice_id) {
            invoice.total_retur += adjustment.amount;
            invoice.total_netto -= adjustment.amount;
        }
    }

    let mut paid_totals: BTreeMap<&str, i64> = BTreeMap::new();
    for allocation in allocations.values() {
        *paid_totals.entry(allocation.invoice_id.as_str()).or_insert(0) += allocation.amount;
    }

    for (invoice_id, invoice) in invoices.iter_mut() {
        invoice.paid = paid_totals.get(invoice_id.as_str()).copied().unwrap_or(0);
        invoice.total_qty = qty_totals.get(invoice_id).copied().unwrap_or(0);
        let remaining = invoice.total_netto - invoice.paid;
        invoice.status_pembayaran = if remaining <= SETTLEMENT_TOLERANCE {
            PaymentStatus::Lunas
        } else {
            PaymentStatus::Belum
        };
        invoice.composite_status = format!(
            "{}_{}",
            store_safe_key(&invoice.customer_name),
            invoice.status_pembayaran.as_str()
        );
    }
}
