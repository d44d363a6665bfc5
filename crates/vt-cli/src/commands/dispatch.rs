use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Save(args) => commands::save::handle(&args, ctx, flags),
        Commands::Render(args) => commands::render::handle(&args, ctx, flags),
        Commands::Show => commands::show::handle(ctx, flags),
        Commands::Restore => commands::restore::handle(ctx, flags),
        Commands::WhatIf(args) => commands::what_if::handle(&args, ctx, flags),
        Commands::Status => commands::status::handle(ctx, flags),
        Commands::Cache { action } => commands::cache::handle(&action, ctx, flags),
    }
}
