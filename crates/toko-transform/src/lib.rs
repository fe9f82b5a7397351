//! Value normalization for legacy bookstore-ERP exports.
//!
//! Every function in this crate is total: malformed input degrades to a safe
//! default (empty string, zero, fallback date) instead of an error, so a bad
//! source row never aborts a migration batch.
//!
//! - **identifier**: store-safe identifier sanitization
//! - **numeric**: dual-locale monetary parsing
//! - **title**: publisher/grade extraction from book titles
//! - **validity**: legacy approval-workflow gate
//! - **exclusion**: legacy placeholder-id filter
//! - **date**: ledger date resolution with fallback chain

pub mod normalization;

pub use normalization::date::parse_ledger_date;
pub use normalization::exclusion::is_excluded_book_id;
pub use normalization::identifier::{sanitize_id, store_safe_key};
pub use normalization::numeric::parse_amount;
pub use normalization::title::{TitleInfo, parse_book_title};
pub use normalization::validity::{RowValidity, check_validity};
