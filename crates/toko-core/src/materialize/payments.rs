use std::collections::BTreeMap;

use toko_model::{
    CashDetailRow, Direction, Invoice, NonFakturRow, Payment, PaymentAllocation, PaymentSource,
    ReceivableDetailRow, ReceivableHeaderRow, RejectKind, RejectedRow, allocation_key,
    cash_payment_key,
};
use toko_transform::{check_validity, parse_amount, sanitize_id};

const MEMO_PELUNASAN: &str = "Pelunasan Piutang";
const MEMO_TUNAI: &str = "Pembayaran Tunai Awal";
const MEMO_NON_FAKTUR: &str = "Non Faktur";

fn memo_or(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "NULL" {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Builds settlement payments from the `PIUTANG` headers.
pub fn materialize_receivable_payments(
    rows: &[ReceivableHeaderRow],
    rejects: &mut Vec<RejectedRow>,
) -> BTreeMap<String, Payment> {
    let mut payments = BTreeMap::new();
    for row in rows {
        let key = sanitize_id(&row.id);
        if key.is_empty() {
            continue;
        }
        let validity = check_validity(&row.validated_by, &row.void_by);
        if let Some(reason) = validity.reject_reason() {
            rejects.push(RejectedRow {
                kind: RejectKind::Payment,
                id: row.id.clone(),
                reason,
            });
            continue;
        }
        payments.insert(
            key,
            Payment {
                customer_id: sanitize_id(&row.customer_id),
                customer_name: row.customer_name.clone(),
                date: row.date.clone(),
                direction: Direction::In,
                source: PaymentSource::Pelunasan,
                amount: parse_amount(&row.amount),
                memo: memo_or(&row.memo, MEMO_PELUNASAN),
            },
        );
    }
    payments
}

/// Builds allocations from the `PIUTANG_DETAIL` rows.
///
/// An allocation without its payment is an orphan from a rejected or missing
/// header; it is dropped so paid totals never count money that was voided.
pub fn materialize_receivable_allocations(
    rows: &[ReceivableDetailRow],
    payments: &BTreeMap<String, Payment>,
) -> BTreeMap<String, PaymentAllocation> {
    let mut allocations = BTreeMap::new();
    for row in rows {
        let payment_id = sanitize_id(&row.payment_id);
        let invoice_id = sanitize_id(&row.invoice_id);
        if payment_id.is_empty() || invoice_id.is_empty() {
            continue;
        }
        if !payments.contains_key(&payment_id) {
            continue;
        }
        allocations.insert(
            allocation_key(&payment_id, &invoice_id),
            PaymentAllocation {
                payment_id,
                invoice_id,
                amount: parse_amount(&row.amount),
            },
        );
    }
    allocations
}

/// Synthesizes cash payments from the `TUNAI_DETAIL` rows.
///
/// Cash taken at invoice time has no header of its own in the legacy system;
/// each row becomes a `PAY_CASH_<invoice>` payment dated to its invoice plus
/// a 1:1 allocation. Rows pointing at unknown invoices or carrying no money
/// are skipped.
pub fn materialize_cash_payments(
    rows: &[CashDetailRow],
    invoices: &BTreeMap<String, Invoice>,
    payments: &mut BTreeMap<String, Payment>,
    allocations: &mut BTreeMap<String, PaymentAllocation>,
) {
    for row in rows {
        let invoice_id = sanitize_id(&row.invoice_id);
        if invoice_id.is_empty() {
            continue;
        }
        let Some(invoice) = invoices.get(&invoice_id) else {
            continue;
        };
        let amount = parse_amount(&row.amount);
        if amount <= 0 {
            continue;
        }
        let payment_id = cash_payment_key(&invoice_id);
        payments.insert(
            payment_id.clone(),
            Payment {
                customer_id: invoice.customer_id.clone(),
                customer_name: invoice.customer_name.clone(),
                date: invoice.date.clone(),
                direction: Direction::In,
                source: PaymentSource::Tunai,
                amount,
                memo: MEMO_TUNAI.to_string(),
            },
        );
        allocations.insert(
            allocation_key(&payment_id, &invoice_id),
            PaymentAllocation {
                payment_id,
                invoice_id,
                amount,
            },
        );
    }
}

/// Builds the non-invoice charge map from the `NON_FAKTUR` rows.
pub fn materialize_non_faktur(
    rows: &[NonFakturRow],
    rejects: &mut Vec<RejectedRow>,
) -> BTreeMap<String, Payment> {
    let mut charges = BTreeMap::new();
    for row in rows {
        let key = sanitize_id(&row.id);
        if key.is_empty() {
            continue;
        }
        let validity = check_validity(&row.validated_by, &row.void_by);
        if let Some(reason) = validity.reject_reason() {
            rejects.push(RejectedRow {
                kind: RejectKind::Charge,
                id: row.id.clone(),
                reason,
            });
            continue;
        }
        charges.insert(
            key,
            Payment {
                customer_id: sanitize_id(&row.customer_id),
                customer_name: row.customer_name.clone(),
                date: row.date.clone(),
                direction: Direction::In,
                source: PaymentSource::NonFaktur,
                amount: parse_amount(&row.amount),
                memo: memo_or(&row.memo, MEMO_NON_FAKTUR),
            },
        );
    }
    charges
}

#[cfg(test)]
mod tests {
    use super::*;
    use toko_model::PaymentStatus;

    fn receivable(id: &str, memo: &str, void: &str) -> ReceivableHeaderRow {
        ReceivableHeaderRow {
            id: id.to_string(),
            date: "2020-02-01".to_string(),
            customer_id: "C1".to_string(),
            customer_name: "Budi".to_string(),
            amount: "25000".to_string(),
            memo: memo.to_string(),
            validated_by: "ADMIN".to_string(),
            void_by: void.to_string(),
        }
    }

    fn invoice(customer_id: &str, date: &str) -> Invoice {
        Invoice {
            customer_id: customer_id.to_string(),
            customer_name: "Budi".to_string(),
            date: date.to_string(),
            total_bruto: 100_000,
            total_diskon: 0,
            total_netto: 100_000,
            total_retur: 0,
            paid: 0,
            total_qty: 0,
            status_pembayaran: PaymentStatus::Belum,
            composite_status: String::new(),
        }
    }

    #[test]
    fn receivable_memo_defaults() {
        let mut rejects = Vec::new();
        let payments =
            materialize_receivable_payments(&[receivable("PAY1", "NULL", "NULL")], &mut rejects);
        assert_eq!(payments["PAY1"].memo, "Pelunasan Piutang");
        assert_eq!(payments["PAY1"].source, PaymentSource::Pelunasan);
        assert_eq!(payments["PAY1"].direction, Direction::In);
    }

    #[test]
    fn voided_receivable_is_rejected() {
        let mut rejects = Vec::new();
        let payments =
            materialize_receivable_payments(&[receivable("PAY1", "", "SPV")], &mut rejects);
        assert!(payments.is_empty());
        assert_eq!(rejects[0].kind, RejectKind::Payment);
        assert_eq!(rejects[0].reason, "Void By SPV");
    }

    #[test]
    fn orphan_allocations_are_dropped() {
        let payments = BTreeMap::new();
        let rows = vec![ReceivableDetailRow {
            payment_id: "PAY9".to_string(),
            invoice_id: "INV1".to_string(),
            amount: "10000".to_string(),
        }];
        assert!(materialize_receivable_allocations(&rows, &payments).is_empty());
    }

    #[test]
    fn cash_rows_synthesize_payment_and_allocation() {
        let invoices = BTreeMap::from([("INV1".to_string(), invoice("C1", "2020-01-05"))]);
        let mut payments = BTreeMap::new();
        let mut allocations = BTreeMap::new();
        let rows = vec![
            CashDetailRow {
                invoice_id: "INV1".to_string(),
                amount: "40000".to_string(),
            },
            CashDetailRow {
                invoice_id: "INV_MISSING".to_string(),
                amount: "40000".to_string(),
            },
            CashDetailRow {
                invoice_id: "INV1".to_string(),
                amount: "0".to_string(),
            },
        ];
        materialize_cash_payments(&rows, &invoices, &mut payments, &mut allocations);
        assert_eq!(payments.len(), 1);
        let payment = &payments["PAY_CASH_INV1"];
        assert_eq!(payment.date, "2020-01-05");
        assert_eq!(payment.memo, "Pembayaran Tunai Awal");
        assert_eq!(payment.source, PaymentSource::Tunai);
        assert_eq!(
            allocations["ALLOC_PAY_CASH_INV1_INV1"].amount,
            40_000
        );
    }

    #[test]
    fn non_faktur_keeps_own_memo() {
        let mut rejects = Vec::new();
        let rows = vec![NonFakturRow {
            id: "NF1".to_string(),
            date: "2020-03-01".to_string(),
            customer_id: "C2".to_string(),
            customer_name: "Toko Sari".to_string(),
            amount: "12000".to_string(),
            memo: "Titipan konsinyasi".to_string(),
            validated_by: "ADMIN".to_string(),
            void_by: "NULL".to_string(),
        }];
        let charges = materialize_non_faktur(&rows, &mut rejects);
        assert_eq!(charges["NF1"].memo, "Titipan konsinyasi");
        assert_eq!(charges["NF1"].source, PaymentSource::NonFaktur);
    }
}
