//! Pre-flight write-permission probe

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};

const MARKER_SUFFIX: &str = ".permission_test";

/// Confirm the destination accepts file creation by creating and then deleting
/// a sibling marker file. Succeeds only if both operations succeed; the real
/// destination is never touched.
///
/// Not reentrant-safe for concurrent probes on the same path.
pub fn check_write_permission(path: &Path) -> ConvertResult<()> {
    let marker = marker_path(path);

    let file = File::create(&marker).map_err(|e| {
        ConvertError::PermissionDenied(format!("cannot create {}: {}", marker.display(), e))
    })?;
    drop(file);

    fs::remove_file(&marker).map_err(|e| {
        ConvertError::PermissionDenied(format!("cannot delete {}: {}", marker.display(), e))
    })
}

fn marker_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(MARKER_SUFFIX);
    PathBuf::from(raw)
}
