//! Entity materializers, one module per entity family.
//!
//! Each materializer is a forward loop over one source table: rows in, keyed
//! entity map out, rejects appended for rows the approval gate refuses.

mod customers;
mod invoices;
mod payments;
mod products;
mod returns;
mod stock;

pub use customers::materialize_customers;
pub use invoices::{materialize_invoice_items, materialize_invoices};
pub use payments::{
    materialize_cash_payments, materialize_non_faktur, materialize_receivable_allocations,
    materialize_receivable_payments,
};
pub use products::materialize_products;
pub use returns::{materialize_retur_items, materialize_returns};
pub use stock::materialize_stock_history;
