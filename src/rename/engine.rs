use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::parser::{is_candidate, parse_texture_name};
use crate::progress::Progress;
use crate::scanner::FileEntry;

use super::name_builder::build_flat_name;
use super::types::{RenameOperation, RenameResult};

/// Errors that can occur during the rename pass
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Failed to rename '{from}' to '{to}': {source}")]
    FilesystemError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination already exists: {0}")]
    DestinationExists(String),
}

/// Options for the rename pass
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
}

/// Flatten every NBT-annotated texture filename in `entries`.
///
/// A single linear pass. Non-candidates are left alone without a report.
/// Candidates that fail the pattern are reported as skipped and the pass
/// continues. A filesystem failure aborts the pass on the spot, leaving
/// earlier renames in place.
pub fn rename_textures(
    target_dir: &Path,
    entries: &[FileEntry],
    options: &RenameOptions,
    progress: &mut Progress,
) -> Result<RenameResult, RenameError> {
    let mut result = RenameResult::new(options.dry_run);

    info!(
        "Processing {} entries in {}",
        entries.len(),
        target_dir.display()
    );

    for entry in entries {
        if !is_candidate(&entry.name) {
            trace!(name = %entry.name, "Not a candidate, leaving alone");
            continue;
        }

        match parse_texture_name(&entry.name) {
            Ok(parsed) => {
                debug!(
                    name = %parsed.original_name,
                    item = %parsed.item_type,
                    potion = %parsed.potion_type,
                    "Pattern matched"
                );

                let destination_name = build_flat_name(&parsed.item_type, &parsed.potion_type);
                let op = RenameOperation::new(entry.path.clone(), destination_name);

                if op.destination_path.exists() && !options.dry_run {
                    return Err(RenameError::DestinationExists(op.destination_name.clone()));
                }

                if !options.dry_run {
                    execute_rename(&op)?;
                }

                progress.renamed(&op.source_name, &op.destination_name);
                result.add_operation(op);
            }
            Err(e) => {
                debug!(name = %entry.name, error = %e, "Pattern mismatch");
                progress.skipped(&entry.name);
                result.add_skipped(entry.name.clone());
            }
        }
    }

    if !options.dry_run {
        info!("Renamed {} files", result.len());
    }

    Ok(result)
}

fn execute_rename(op: &RenameOperation) -> Result<(), RenameError> {
    info!("Renaming: {} -> {}", op.source_name, op.destination_name);

    fs::rename(&op.source_path, &op.destination_path).map_err(|e| RenameError::FilesystemError {
        from: op.source_name.clone(),
        to: op.destination_name.clone(),
        source: e,
    })
}
