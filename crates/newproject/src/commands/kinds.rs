//! `--list-kinds`: show every kind with its flag, strategy and folder

use anyhow::Result;
use camino::Utf8Path;
use console::style;
use newproject_core::ProjectKind;

use crate::cli::KindFlags;
use crate::output;

pub fn list(path: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(path)?;

    output::header("Project kinds");
    for kind in ProjectKind::ALL {
        let folder = config
            .kind_folder(kind)
            .map(|f| f.to_string())
            .unwrap_or_else(|| "not configured".to_string());
        println!(
            "  {:<10} {:<14} {:<11} {}",
            style(KindFlags::flag_for(kind)).cyan(),
            kind.to_string(),
            kind.strategy_tag().to_string(),
            style(folder).dim()
        );
    }

    Ok(())
}
