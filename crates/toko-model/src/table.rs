#![deny(unsafe_code)]

use std::fmt;

use crate::record::{
    BookRow, CashDetailRow, CustomerRow, NonFakturRow, ReceivableDetailRow, ReceivableHeaderRow,
    ReturDetailRow, ReturHeaderRow, SalesDetailRow, SalesHeaderRow, StockLedgerRow,
};

/// The eleven legacy exports this migration understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableKind {
    Book,
    Customer,
    SalesHeader,
    SalesDetail,
    ReceivableHeader,
    ReceivableDetail,
    CashDetail,
    NonFaktur,
    ReturHeader,
    ReturDetail,
    StockLedger,
}

impl TableKind {
    /// All tables in a stable order.
    pub fn all() -> [TableKind; 11] {
        [
            TableKind::Book,
            TableKind::Customer,
            TableKind::SalesHeader,
            TableKind::SalesDetail,
            TableKind::ReceivableHeader,
            TableKind::ReceivableDetail,
            TableKind::CashDetail,
            TableKind::NonFaktur,
            TableKind::ReturHeader,
            TableKind::ReturDetail,
            TableKind::StockLedger,
        ]
    }

    /// Token matched against export filenames (uppercased stems).
    pub fn code(self) -> &'static str {
        match self {
            TableKind::Book => "BUKU",
            TableKind::Customer => "PELANGGAN",
            TableKind::SalesHeader => "JUAL",
            TableKind::SalesDetail => "JUAL_DETAIL",
            TableKind::ReceivableHeader => "PIUTANG",
            TableKind::ReceivableDetail => "PIUTANG_DETAIL",
            TableKind::CashDetail => "TUNAI_DETAIL",
            TableKind::NonFaktur => "NON_FAKTUR",
            TableKind::ReturHeader => "RETUR",
            TableKind::ReturDetail => "RETUR_DETAIL",
            TableKind::StockLedger => "STOK_HISTORY",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TableKind::Book => "Product master",
            TableKind::Customer => "Customer master",
            TableKind::SalesHeader => "Sales invoice headers",
            TableKind::SalesDetail => "Sales invoice line items",
            TableKind::ReceivableHeader => "Receivable settlement payments",
            TableKind::ReceivableDetail => "Payment-to-invoice allocations",
            TableKind::CashDetail => "Cash paid at invoice time",
            TableKind::NonFaktur => "Non-invoice charges",
            TableKind::ReturHeader => "Return headers",
            TableKind::ReturDetail => "Return line items",
            TableKind::StockLedger => "Stock change ledger",
        }
    }

    /// Column layout, in positional order. The index of a name in this slice
    /// is its column index in the export.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Book => &["id", "title", "price", "group id"],
            TableKind::Customer => &["id", "name", "phone", "opening balance"],
            TableKind::SalesHeader => &[
                "id",
                "date",
                "customer id",
                "customer name",
                "gross",
                "discount",
                "net",
                "validated by",
                "void by",
            ],
            TableKind::SalesDetail => &[
                "invoice id",
                "product id",
                "qty",
                "price",
                "discount %",
                "subtotal",
            ],
            TableKind::ReceivableHeader => &[
                "id",
                "date",
                "customer id",
                "customer name",
                "amount",
                "memo",
                "validated by",
                "void by",
            ],
            TableKind::ReceivableDetail => &["payment id", "invoice id", "amount"],
            TableKind::CashDetail => &["invoice id", "amount"],
            TableKind::NonFaktur => &[
                "id",
                "date",
                "customer id",
                "customer name",
                "amount",
                "memo",
                "validated by",
                "void by",
            ],
            TableKind::ReturHeader => &[
                "id",
                "date",
                "invoice id",
                "customer id",
                "customer name",
                "amount",
                "source ref",
                "validated by",
                "void by",
            ],
            TableKind::ReturDetail => &["return id", "product id", "qty", "subtotal"],
            TableKind::StockLedger => &[
                "ref id",
                "product id",
                "title",
                "memo",
                "stock before",
                "stock after",
                "date",
            ],
        }
    }

    /// The migration refuses to run without the master tables.
    pub fn is_mandatory(self) -> bool {
        matches!(self, TableKind::Book | TableKind::Customer)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// All loaded source tables, typed at the ingest boundary.
///
/// The master tables are `Option` so "not supplied" is distinguishable from
/// "supplied but empty"; every other table defaults to empty.
#[derive(Debug, Default, Clone)]
pub struct TableSet {
    pub books: Option<Vec<BookRow>>,
    pub customers: Option<Vec<CustomerRow>>,
    pub sales_headers: Vec<SalesHeaderRow>,
    pub sales_details: Vec<SalesDetailRow>,
    pub receivable_headers: Vec<ReceivableHeaderRow>,
    pub receivable_details: Vec<ReceivableDetailRow>,
    pub cash_details: Vec<CashDetailRow>,
    pub non_faktur: Vec<NonFakturRow>,
    pub retur_headers: Vec<ReturHeaderRow>,
    pub retur_details: Vec<ReturDetailRow>,
    pub stock_ledger: Vec<StockLedgerRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let codes: Vec<&str> = TableKind::all().iter().map(|kind| kind.code()).collect();
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
    }

    #[test]
    fn only_masters_are_mandatory() {
        let mandatory: Vec<TableKind> = TableKind::all()
            .into_iter()
            .filter(|kind| kind.is_mandatory())
            .collect();
        assert_eq!(mandatory, vec![TableKind::Book, TableKind::Customer]);
    }
}
