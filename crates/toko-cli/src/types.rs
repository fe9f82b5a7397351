use std::path::PathBuf;

use toko_model::{MigrationStats, RejectedRow, TableKind};

/// Options for one migration run, independent of the clap surface.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub export_folder: PathBuf,
    /// Defaults to `<export_folder>/output`.
    pub output_dir: Option<PathBuf>,
    /// Run the pipeline and report without writing output files.
    pub dry_run: bool,
}

/// Everything the summary printer needs about a finished run.
#[derive(Debug)]
pub struct MigrateResult {
    pub output_dir: PathBuf,
    pub discovered: Vec<(TableKind, PathBuf)>,
    pub stats: MigrationStats,
    pub rejects: Vec<RejectedRow>,
    pub bundle_path: Option<PathBuf>,
    pub rejects_path: Option<PathBuf>,
    pub stats_path: Option<PathBuf>,
    pub has_rejects: bool,
}
