use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{CacheCommands, Commands};

/// Top-level CLI parser for the `vtrip` binary.
#[derive(Debug, Parser)]
#[command(name = "vtrip", version, about = "ValueTrip - offline travel result vault")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Vault directory (overrides vault.dir)
    #[arg(long, global = true)]
    pub vault_dir: Option<PathBuf>,

    /// Treat the network as unavailable
    #[arg(long, global = true)]
    pub offline: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            vault_dir: self.vault_dir.clone(),
            offline: self.offline,
        }
    }
}
