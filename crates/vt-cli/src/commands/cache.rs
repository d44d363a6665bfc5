use serde::Serialize;

use crate::cli::{CacheCommands, GlobalFlags};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ClearResponse {
    cleared: bool,
    vault: String,
}

/// Handle `vtrip cache`.
pub fn handle(action: &CacheCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CacheCommands::Clear => output(
            &ClearResponse {
                cleared: ctx.vault.clear(),
                vault: ctx.vault_path().display().to_string(),
            },
            flags.format,
        ),
    }
}
