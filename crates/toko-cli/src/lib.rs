//! CLI library components for toko-migrate.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
