//! Filesystem steps

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

/// Create the project directory
///
/// Never merges into an existing directory: an existing path is
/// `AlreadyExists`, any other OS failure is `PermissionDenied`.
pub fn make_dir(path: &Utf8Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => {
            debug!("Created directory {}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::already_exists(path.as_str())),
        Err(e) => Err(Error::PermissionDenied {
            path: path.to_string(),
            source: e,
        }),
    }
}

/// Write a file relative to `dir`, creating or overwriting it
///
/// Intermediate subdirectories of `name` are created as needed.
pub fn write_file(dir: &Utf8Path, name: &str, content: &str) -> Result<Utf8PathBuf> {
    let path = dir.join(name);

    if let Some(parent) = path.parent() {
        if parent != dir {
            fs::create_dir_all(parent).map_err(|e| Error::IoWriteFailed {
                path: parent.to_string(),
                source: e,
            })?;
        }
    }

    fs::write(&path, content).map_err(|e| Error::IoWriteFailed {
        path: path.to_string(),
        source: e,
    })?;

    debug!("Wrote {}", path);
    Ok(path)
}

/// Write `README.md` with the project name as its heading
pub fn write_readme(dir: &Utf8Path, project_name: &str) -> Result<Utf8PathBuf> {
    write_file(dir, "README.md", &format!("# {}\n", project_name))
}
