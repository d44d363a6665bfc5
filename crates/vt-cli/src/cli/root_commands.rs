use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Cache a search payload as the latest search.
    Save(SaveArgs),
    /// Render a search payload as result cards.
    Render(RenderArgs),
    /// Render the cached search.
    Show,
    /// Print the cached search payload.
    Restore,
    /// Re-rank the cached search against a budget and service weight.
    #[command(name = "what-if")]
    WhatIf(WhatIfArgs),
    /// Connectivity and vault state.
    Status,
    /// Vault maintenance.
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },
}

/// Arguments for `vtrip save`.
#[derive(Clone, Debug, Args)]
pub struct SaveArgs {
    /// Payload JSON file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: String,
}

/// Arguments for `vtrip render`.
#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// Payload JSON file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: String,
    /// Treat a payload that is silent on eco mode as eco mode on.
    #[arg(long)]
    pub eco: bool,
}

/// Arguments for `vtrip what-if`.
#[derive(Clone, Debug, Args)]
pub struct WhatIfArgs {
    /// Maximum budget in the cached search's currency.
    #[arg(long)]
    pub budget: Option<f64>,
    /// Weight given to value over price, 0 to 100.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub service_weight: Option<u8>,
    /// How many options to list.
    #[arg(long)]
    pub top: Option<usize>,
}

/// Vault maintenance.
#[derive(Clone, Debug, Subcommand)]
pub enum CacheCommands {
    /// Remove the cached search.
    Clear,
}
