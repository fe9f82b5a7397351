#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::{
    Customer, Invoice, InvoiceItem, Payment, PaymentAllocation, Product, Retur, ReturItem,
    StockHistoryEntry,
};

/// Which source table a rejected row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectKind {
    Invoice,
    Payment,
    Return,
    Charge,
}

/// A row excluded by the approval-workflow gate, kept for operator review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRow {
    #[serde(rename = "type")]
    pub kind: RejectKind,
    pub id: String,
    pub reason: String,
}

/// Per-entity record counts plus the reject count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationStats {
    pub products: usize,
    pub customers: usize,
    pub invoices: usize,
    pub invoice_items: usize,
    pub payments: usize,
    pub non_faktur: usize,
    pub payment_allocations: usize,
    pub returns: usize,
    pub return_items: usize,
    pub stock_history: usize,
    pub void_count: usize,
}

/// The assembled migration output.
///
/// Field names are the top-level paths of the target hierarchical store; the
/// whole bundle is suitable for one bulk multi-path write. Maps are `BTreeMap`
/// so serialization order is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationBundle {
    pub products: BTreeMap<String, Product>,
    pub customers: BTreeMap<String, Customer>,
    pub invoices: BTreeMap<String, Invoice>,
    pub invoice_items: BTreeMap<String, InvoiceItem>,
    pub payments: BTreeMap<String, Payment>,
    pub non_faktur: BTreeMap<String, Payment>,
    pub payment_allocations: BTreeMap<String, PaymentAllocation>,
    pub returns: BTreeMap<String, Retur>,
    pub return_items: BTreeMap<String, ReturItem>,
    pub stock_history: BTreeMap<String, StockHistoryEntry>,
    pub rejects: Vec<RejectedRow>,
    pub stats: MigrationStats,
    /// Injected clock value; the only field not derived from the input.
    #[serde(rename = "migratedAt")]
    pub migrated_at: String,
}

impl MigrationBundle {
    /// Recomputes the stats block from the entity maps.
    pub fn compute_stats(&mut self) {
        self.stats = MigrationStats {
            products: self.products.len(),
            customers: self.customers.len(),
            invoices: self.invoices.len(),
            invoice_items: self.invoice_items.len(),
            payments: self.payments.len(),
            non_faktur: self.non_faktur.len(),
            payment_allocations: self.payment_allocations.len(),
            returns: self.returns.len(),
            return_items: self.return_items.len(),
            stock_history: self.stock_history.len(),
            void_count: self.rejects.len(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_serializes_with_type_field() {
        let reject = RejectedRow {
            kind: RejectKind::Invoice,
            id: "INV9".to_string(),
            reason: "Not Validated".to_string(),
        };
        let json = serde_json::to_value(&reject).expect("serialize reject");
        assert_eq!(json["type"], "invoice");
        assert_eq!(json["reason"], "Not Validated");
    }

    #[test]
    fn stats_track_map_sizes() {
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
                kind: RejectKind::Return,
                id: "RET1".to_string(),
                reason: "Void By ADMIN".to_string(),
            }],
            stats: MigrationStats::default(),
            migrated_at: "2020-01-01T00:00:00Z".to_string(),
        };
        bundle.compute_stats();
        assert_eq!(bundle.stats.void_count, 1);
        assert_eq!(bundle.stats.products, 0);
    }
}
