//! Settings template command implementation

use std::fs;

use anyhow::{Context, Result};

use fletcher_patch::Settings;

use crate::cli::SettingsArgs;

pub fn execute(args: SettingsArgs) -> Result<()> {
    let template = Settings::default()
        .to_json()
        .context("Failed to render the settings template")?;
    match args.output {
        Some(path) => {
            fs::write(&path, template)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote settings template to {}", path.display());
        }
        None => println!("{template}"),
    }
    Ok(())
}
