//! Precondition checks run before any filesystem mutation
//!
//! None of these functions create, remove or modify anything. A request only
//! reaches the creation pipeline once every check has passed.

use crate::error::{Error, Result};
use camino::{Utf8Component, Utf8Path};
use newproject_core::ProjectKind;
use tracing::debug;

/// Token sequences a project name may not contain
const FORBIDDEN_SEQUENCES: [&str; 2] = ["&&", "||"];

/// Verify that the development root exists
pub fn verify_dev_root(path: &Utf8Path) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::dev_root_not_found(path.as_str()));
    }
    Ok(())
}

/// Verify that the projects folder of a kind exists
///
/// The folder is never created on the user's behalf.
pub fn verify_kind_folder(kind: ProjectKind, path: &Utf8Path) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::kind_folder_not_found(kind.to_string(), path.as_str()));
    }
    Ok(())
}

/// Verify project name syntax
///
/// Rejects empty names, any whitespace, `&&`, `||` and anything that is not a
/// single plain path component (separators, roots, `.` and `..`). Other shell
/// metacharacters pass.
pub fn verify_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, "name is empty"));
    }

    if name.chars().any(char::is_whitespace) {
        return Err(Error::invalid_name(name, "name can't contain whitespace"));
    }

    if let Some(seq) = FORBIDDEN_SEQUENCES.iter().find(|s| name.contains(**s)) {
        return Err(Error::invalid_name(name, format!("name can't contain '{}'", seq)));
    }

    if name.contains(['/', '\\']) {
        return Err(Error::invalid_name(name, "name can't contain a path separator"));
    }

    let mut components = Utf8Path::new(name).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Utf8Component::Normal(_)), None)
    ) {
        return Err(Error::invalid_name(name, "name must be a single path component"));
    }

    Ok(())
}

/// Verify that the project directory sits directly inside the kind folder
pub fn verify_contained(kind_folder: &Utf8Path, project_dir: &Utf8Path) -> Result<()> {
    if project_dir.parent() != Some(kind_folder) {
        return Err(Error::invalid_name(
            project_dir.as_str(),
            format!("project must be created directly inside {}", kind_folder),
        ));
    }
    Ok(())
}

/// Verify that the project directory does not exist yet
///
/// Advisory only: the directory creation step reports `AlreadyExists` itself
/// if another process wins the race.
pub fn verify_not_exists(path: &Utf8Path) -> Result<()> {
    if path.exists() {
        return Err(Error::already_exists(path.as_str()));
    }
    Ok(())
}

/// Paths a single creation request is checked against
#[derive(Debug, Clone, Copy)]
pub struct PathGuard<'a> {
    pub dev_root: &'a Utf8Path,
    pub kind: ProjectKind,
    pub kind_folder: &'a Utf8Path,
    pub project_dir: &'a Utf8Path,
}

impl PathGuard<'_> {
    /// Run every precondition in order, stopping at the first failure
    ///
    /// Order: development root, project name, kind folder, project directory.
    pub fn check(&self, project_name: &str) -> Result<()> {
        verify_dev_root(self.dev_root)?;
        verify_name(project_name)?;
        verify_contained(self.kind_folder, self.project_dir)?;
        verify_kind_folder(self.kind, self.kind_folder)?;
        verify_not_exists(self.project_dir)?;

        debug!("Preconditions passed for {}", self.project_dir);
        Ok(())
    }
}
