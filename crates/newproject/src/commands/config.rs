//! `--check-config`: validate the configuration and report its layout

use anyhow::Result;
use camino::Utf8Path;
use newproject_core::ProjectKind;

use crate::output;

pub fn check(path: Option<&Utf8Path>) -> Result<()> {
    let spinner = output::spinner("Validating configuration...");
    let loaded = super::load_config(path);
    spinner.finish_and_clear();
    let config = loaded?;

    output::success(&format!("Configuration is valid: {}", config.source));

    output::header("Configuration");
    output::kv("Development directory", config.dev_root().as_str());

    let mut missing = 0;
    if !config.dev_root().is_dir() {
        output::warning(&format!("{} does not exist", config.dev_root()));
        missing += 1;
    }

    output::header("Project folders");
    for kind in ProjectKind::ALL {
        let Some(folder) = config.kind_folder(kind) else {
            output::kv(&kind.to_string(), "not configured");
            continue;
        };
        let state = if folder.is_dir() {
            "ok"
        } else {
            missing += 1;
            "missing"
        };
        output::kv(&kind.to_string(), &format!("{} ({})", folder, state));
    }

    if missing > 0 {
        println!();
        output::warning(&format!(
            "{} folder(s) missing; projects of those kinds can't be created until they exist",
            missing
        ));
    }

    Ok(())
}
