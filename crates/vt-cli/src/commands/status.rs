use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vtrip status`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.vault.status(&ctx.connectivity());
    output(&status, flags.format)
}
