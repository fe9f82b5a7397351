//! Core migration pipeline for the legacy bookstore ERP.
//!
//! Consumes the typed tables from `toko-ingest` and produces the store-ready
//! [`toko_model::MigrationBundle`]: reference indexes, entity materializers,
//! and the aggregation/derivation pass, in strict forward order.

pub mod derive;
pub mod index;
pub mod materialize;
pub mod pipeline;

pub use derive::{ReturnAdjustment, SETTLEMENT_TOLERANCE, apply_derivations};
pub use pipeline::run_migration;
