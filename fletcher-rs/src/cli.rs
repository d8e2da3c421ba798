//! Root CLI structure for fletcher-rs

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fletcher-rs")]
#[command(about = "Rules-driven archery patcher for layered game-data plugins", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the patcher over a load order of plugin files
    Patch(PatchArgs),

    /// Write the default settings template
    Settings(SettingsArgs),
}

#[derive(Args)]
pub struct PatchArgs {
    /// Plugin files in load order (earliest first)
    #[arg(required = true)]
    pub plugins: Vec<PathBuf>,

    /// Path to the settings file (stock tuning is used when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Path to write the patch plugin to
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Path to write the template to (stdout when omitted)
    pub output: Option<PathBuf>,
}
