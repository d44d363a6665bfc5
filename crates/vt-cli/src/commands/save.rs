use chrono::{DateTime, Utc};
use serde::Serialize;
use vt_core::enums::SearchType;
use vt_core::pricing::enrich_payload;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SaveArgs;
use crate::commands::input::read_payload;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SaveResponse {
    captured_at: Option<DateTime<Utc>>,
    search_type: SearchType,
    currency: String,
    results: usize,
    dropped: usize,
    vault: String,
}

/// Handle `vtrip save`.
pub fn handle(args: &SaveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payload = read_payload(&args.input, &ctx.config.display.default_currency)?;
    let received = payload.results().len();
    let enriched = enrich_payload(&payload, ctx.bags());
    let snapshot = ctx.vault.persist(enriched);

    let results = snapshot.data.results().len();
    output(
        &SaveResponse {
            captured_at: snapshot.captured_at(),
            search_type: snapshot.data.search_type,
            currency: snapshot.data.currency,
            results,
            dropped: received - results,
            vault: ctx.vault_path().display().to_string(),
        },
        flags.format,
    )
}
