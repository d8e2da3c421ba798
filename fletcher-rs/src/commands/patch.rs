//! Patch command implementation

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use fletcher_patch::{PatchSession, Settings};
use fletcher_records::{LoadOrder, PatchPlugin, Plugin};

use crate::cli::PatchArgs;

pub fn execute(args: PatchArgs) -> Result<()> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let load_order = read_load_order(&args.plugins)?;
    let patch_name = args
        .output
        .file_name()
        .map_or_else(|| "Patch.esp".to_string(), |n| n.to_string_lossy().into_owned());
    let mut patch = PatchPlugin::new(patch_name);

    let summary = PatchSession::new(&settings).run(&load_order, &mut patch);

    write_patch(&args.output, &patch)
        .with_context(|| format!("Failed to write patch to {}", args.output.display()))?;

    println!("{summary}");
    if summary.is_noop() {
        println!("{}", "No records were modified".yellow());
    } else {
        println!(
            "Wrote {} record(s) to {}",
            patch.record_count(),
            args.output.display()
        );
    }
    Ok(())
}

fn read_load_order(paths: &[std::path::PathBuf]) -> Result<LoadOrder> {
    let mut load_order = LoadOrder::new();
    for path in paths {
        let file = File::open(path)
            .with_context(|| format!("Failed to open plugin {}", path.display()))?;
        let mut plugin: Plugin = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse plugin {}", path.display()))?;
        if plugin.name.is_empty() {
            // Fall back to the file name for layers that don't carry one.
            plugin.name = path
                .file_name()
                .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        }
        log::debug!(
            "Loaded {}: {} projectile(s), {} ammo record(s)",
            plugin.name(),
            plugin.projectiles().len(),
            plugin.ammo().len()
        );
        load_order
            .push(plugin)
            .with_context(|| format!("Failed to add plugin {}", path.display()))?;
    }
    Ok(load_order)
}

fn write_patch(path: &Path, patch: &PatchPlugin) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), patch)?;
    Ok(())
}
