pub mod bundle;
pub mod entity;
pub mod error;
pub mod record;
pub mod table;

pub use bundle::{MigrationBundle, MigrationStats, RejectKind, RejectedRow};
pub use entity::{
    Audience, Customer, Direction, Invoice, InvoiceItem, Payment, PaymentAllocation, PaymentSource,
    PaymentStatus, Product, Retur, ReturItem, StockHistoryEntry, allocation_key, cash_payment_key,
    invoice_item_key, retur_item_key, stock_history_key,
};
pub use error::{MigrateError, Result};
pub use record::{
    BookRow, CashDetailRow, CustomerRow, NonFakturRow, ReceivableDetailRow, ReceivableHeaderRow,
    ReturDetailRow, ReturHeaderRow, SalesDetailRow, SalesHeaderRow, StockLedgerRow,
};
pub use table::{TableKind, TableSet};
