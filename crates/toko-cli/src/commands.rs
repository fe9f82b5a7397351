//! Command drivers for the toko-migrate CLI.

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use tracing::{info, info_span};

use toko_core::run_migration;
use toko_ingest::{discover_tables, list_csv_files, load_tables};
use toko_model::TableKind;
use toko_report::{write_bundle_json, write_rejects_json, write_stats_json};

use crate::summary::apply_table_style;
use crate::types::{MigrateOptions, MigrateResult};

/// Prints the supported legacy tables.
pub fn run_tables() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Description", "Columns"]);
    apply_table_style(&mut table);
    for kind in TableKind::all() {
        table.add_row(vec![
            kind.code().to_string(),
            kind.description().to_string(),
            kind.columns().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Runs one migration: discover, load, migrate, write.
pub fn run_migrate(options: &MigrateOptions) -> Result<MigrateResult> {
    let export_folder = &options.export_folder;
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| export_folder.join("output"));

    // =========================================================================
    // Stage 1: Discover and load the exports
    // =========================================================================
    let load_span = info_span!("load", folder = %export_folder.display());
    let load_start = Instant::now();
    let (discovered, tables) = load_span.in_scope(|| -> Result<_> {
        let csv_files = list_csv_files(export_folder).context("list export folder")?;
        let discovered = discover_tables(&csv_files);
        let tables = load_tables(&discovered).context("load exports")?;
        Ok((discovered.into_iter().collect::<Vec<_>>(), tables))
    })?;
    info!(
        table_count = discovered.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    // =========================================================================
    // Stage 2: Run the pipeline
    // =========================================================================
    let bundle = run_migration(&tables, Utc::now()).context("run migration")?;

    // =========================================================================
    // Stage 3: Write outputs
    // =========================================================================
    let (bundle_path, rejects_path, stats_path) = if options.dry_run {
        info!("output skipped (dry run)");
        (None, None, None)
    } else {
        let write_span = info_span!("write", output_dir = %output_dir.display());
        let write_start = Instant::now();
        let paths = write_span.in_scope(|| -> Result<_> {
            let bundle_path = write_bundle_json(&output_dir, &bundle).context("write bundle")?;
            let rejects_path = write_rejects_json(&output_dir, &bundle).context("write rejects")?;
            let stats_path = write_stats_json(&output_dir, &bundle).context("write stats")?;
            Ok((Some(bundle_path), Some(rejects_path), Some(stats_path)))
        })?;
        info!(
            duration_ms = write_start.elapsed().as_millis(),
            "output complete"
        );
        paths
    };

    let has_rejects = !bundle.rejects.is_empty();
    Ok(MigrateResult {
        output_dir,
        discovered,
        stats: bundle.stats,
        rejects: bundle.rejects,
        bundle_path,
        rejects_path,
        stats_path,
        has_rejects,
    })
}
