//! Shared utility functions for newproject crates

use crate::error::{Error, Result};
use camino::Utf8PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that a
/// relocated HOME (containers, test harnesses) is respected.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(Utf8PathBuf::from(home));
        }
    }

    let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
    Utf8PathBuf::from_path_buf(home)
        .map_err(|p| Error::invalid_config(format!("Home directory is not valid UTF-8: {:?}", p)))
}

/// Replace `{project_name}` placeholders in a template string
pub fn render_template(template: &str, project_name: &str) -> String {
    template.replace("{project_name}", project_name)
}
