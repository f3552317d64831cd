//! Local image artifact
//!
//! Persists a decoded image to disk. The image path holds either the
//! previous complete image or the new complete image, never a partial
//! write: bytes land in a temporary sibling file first and are renamed
//! into place.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CamError, Result};

/// Suffix for the in-progress temporary file
const PART_SUFFIX: &str = ".part";

/// Store image bytes at `path`, overwriting any previous artifact
pub fn store(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = part_path(path)?;

    write_all(&tmp, bytes).map_err(|e| {
        // Leave no stray temp file behind on a failed write
        let _ = fs::remove_file(&tmp);
        CamError::Artifact(format!("cannot write {}: {}", tmp.display(), e))
    })?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        CamError::Artifact(format!("cannot move image into {}: {}", path.display(), e))
    })?;

    Ok(())
}

fn write_all(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(())
}

/// Temporary sibling path: same directory, file name + ".part"
fn part_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CamError::Artifact(format!("image path {} has no file name", path.display())))?;

    let mut part_name = file_name.to_os_string();
    part_name.push(PART_SUFFIX);
    Ok(path.with_file_name(part_name))
}
