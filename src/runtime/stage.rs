// src/runtime/stage.rs

//! Staging of working files into the shared volume.
//!
//! The whole host root is merge-copied into the shared directory so the
//! engine sees the pipeline sources, excluding directories that must not
//! leak into the shared volume: engine caches, prior results, and
//! tool-manager installations. The denylist applies at every level of the
//! tree. Dangling symlinks are skipped rather than failing the copy, and an
//! existing destination is merged into, not rejected.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::errors::Result;

/// Directory names never copied into the shared working directory.
pub const STAGING_DENYLIST: &[&str] = &[
    "latch",
    ".latch",
    "nextflow",
    ".nextflow",
    "work",
    "results",
    "miniconda",
    "anaconda3",
    "mambaforge",
];

/// Merge-copy `src` into `dest`, skipping [`STAGING_DENYLIST`] entries.
pub fn stage_working_files(src: &Path, dest: &Path) -> Result<()> {
    copy_tree(src, dest, STAGING_DENYLIST)
}

fn copy_tree(src: &Path, dest: &Path, denylist: &[&str]) -> Result<()> {
    fs::create_dir_all(dest).with_context(|| format!("creating directory {:?}", dest))?;

    for entry in fs::read_dir(src).with_context(|| format!("reading directory {:?}", src))? {
        let entry = entry.with_context(|| format!("reading entry in {:?}", src))?;
        let name = entry.file_name();

        if denylist.iter().any(|d| name == *d) {
            debug!(entry = ?name, "skipping denylisted entry during staging");
            continue;
        }

        let src_path = entry.path();
        let dest_path = dest.join(&name);

        // Follow symlinks; a dangling link has no target metadata and is
        // skipped instead of failing the whole staging step.
        let meta = match fs::metadata(&src_path) {
            Ok(meta) => meta,
            Err(err) if src_path.symlink_metadata().is_ok() => {
                debug!(path = ?src_path, error = %err, "skipping dangling symlink");
                continue;
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("reading metadata of {:?}", src_path))
                    .into());
            }
        };

        if meta.is_dir() {
            copy_tree(&src_path, &dest_path, denylist)?;
        } else {
            fs::copy(&src_path, &dest_path)
                .with_context(|| format!("copying {:?} to {:?}", src_path, dest_path))?;
        }
    }

    Ok(())
}
