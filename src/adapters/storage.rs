use crate::core::Storage;
use crate::utils::error::{GenError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes files on the local filesystem.
///
/// Content goes to a temporary file next to the destination, which is then
/// renamed over it. A failed run leaves the previous file in place and the
/// temporary file is removed when dropped.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let emit_err = |source: std::io::Error| GenError::EmitError {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(emit_err)?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(emit_err)?;
        tmp.write_all(data).map_err(emit_err)?;
        tmp.flush().map_err(emit_err)?;
        tmp.as_file().sync_all().map_err(emit_err)?;

        let file = tmp.persist(path).map_err(|e| emit_err(e.error))?;
        set_readable_permissions(&file).map_err(emit_err)?;

        tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}

// NamedTempFile creates files as 0600; generated sources are checked in like
// any other file.
#[cfg(unix)]
fn set_readable_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
