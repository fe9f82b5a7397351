//! The migration pipeline with explicit stages.
//!
//! Data flows strictly forward:
//! 1. **Masters**: products and customers (mandatory)
//! 2. **Indexes**: book titles, invoice owners
//! 3. **Materialize**: invoices, items, payments, allocations, returns, stock
//! 4. **Derive**: return deltas, paid totals, settlement status
//! 5. **Assemble**: bundle + rejects + stats
//!
//! One invocation is a pure function of the loaded tables and the injected
//! clock; there is no other ambient input.

use std::time::Instant;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{info, info_span};

use toko_model::{MigrateError, MigrationBundle, MigrationStats, TableSet};

use crate::derive::apply_derivations;
use crate::index::{build_book_titles, build_invoice_owners, extend_owners_with_returns};
use crate::materialize::{
    materialize_cash_payments, materialize_customers, materialize_invoice_items,
    materialize_invoices, materialize_non_faktur, materialize_products,
    materialize_receivable_allocations, materialize_receivable_payments, materialize_retur_items,
    materialize_returns, materialize_stock_history,
};

/// Runs the whole migration over the loaded tables.
///
/// Fails fast when a master table was never supplied; a partial migration is
/// worse than none. `now` is the migration clock: it stamps the bundle and
/// backstops unparseable ledger dates, and is the only non-input the output
/// depends on.
pub fn run_migration(
    tables: &TableSet,
    now: DateTime<Utc>,
) -> Result<MigrationBundle, MigrateError> {
    let span = info_span!("migrate");
    let _guard = span.enter();
    let start = Instant::now();

    let books = tables
        .books
        .as_deref()
        .ok_or(MigrateError::MissingTable { table: "BUKU" })?;
    let customer_rows = tables
        .customers
        .as_deref()
        .ok_or(MigrateError::MissingTable { table: "PELANGGAN" })?;

    let mut rejects = Vec::new();

    let products = materialize_products(books);
    let customers = materialize_customers(customer_rows);
    let book_titles = build_book_titles(&products);

    let mut invoices = materialize_invoices(&tables.sales_headers, &mut rejects);
    let (invoice_items, qty_totals) =
        materialize_invoice_items(&tables.sales_details, &book_titles);

    let mut payments = materialize_receivable_payments(&tables.receivable_headers, &mut rejects);
    let mut payment_allocations =
        materialize_receivable_allocations(&tables.receivable_details, &payments);
    materialize_cash_payments(
        &tables.cash_details,
        &invoices,
        &mut payments,
        &mut payment_allocations,
    );
    let non_faktur = materialize_non_faktur(&tables.non_faktur, &mut rejects);

    let (returns, adjustments) =
        materialize_returns(&tables.retur_headers, &invoices, &mut rejects);
    let return_items = materialize_retur_items(&tables.retur_details, &returns, &book_titles);

    let mut invoice_owners = build_invoice_owners(&invoices);
    extend_owners_with_returns(&mut invoice_owners, &returns);
    let stock_history = materialize_stock_history(
        &tables.stock_ledger,
        &invoice_owners,
        &customers,
        &book_titles,
        now.date_naive(),
    );

    apply_derivations(&mut invoices, &payment_allocations, &adjustments, &qty_totals);

    let mut bundle = MigrationBundle {
        products,
        customers,
        invoices,
        invoice_items,
        payments,
        non_faktur,
        payment_allocations,
        returns,
        return_items,
        stock_history,
        rejects,
        stats: MigrationStats::default(),
        migrated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    bundle.compute_stats();

    info!(
        products = bundle.stats.products,
        customers = bundle.stats.customers,
        invoices = bundle.stats.invoices,
        payments = bundle.stats.payments,
        returns = bundle.stats.returns,
        stock_history = bundle.stats.stock_history,
        void_count = bundle.stats.void_count,
        duration_ms = start.elapsed().as_millis(),
        "migration complete"
    );

    Ok(bundle)
}
