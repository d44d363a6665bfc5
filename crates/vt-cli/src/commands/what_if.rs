use anyhow::Context;
use serde::Serialize;
use vt_core::WhatIfWeights;
use vt_vault::status::EMPTY_VAULT_HINT;
use vt_whatif::{RankedOption, WhatIfSimulator};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WhatIfArgs;
use crate::context::AppContext;
use crate::output::output_with_rows;

#[derive(Debug, Serialize)]
struct WhatIfRow {
    rank: usize,
    fit: f64,
    summary: String,
}

#[derive(Debug, Serialize)]
struct WhatIfResponse<'a> {
    weights: WhatIfWeights,
    currency: Option<String>,
    ranking: Vec<RankedOption<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
}

fn weights(args: &WhatIfArgs, ctx: &AppContext) -> anyhow::Result<WhatIfWeights> {
    let budget = args.budget.unwrap_or(ctx.config.what_if.max_budget);
    let weights = match args.service_weight {
        Some(pct) => WhatIfWeights::from_percent(budget, pct),
        None => WhatIfWeights::new(budget, ctx.config.what_if.service_weight),
    };
    weights.context("invalid what-if weights")
}

/// Handle `vtrip what-if`.
pub fn handle(args: &WhatIfArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let weights = weights(args, ctx)?;
    let top = args.top.unwrap_or(ctx.config.what_if.top_n);

    let simulator = ctx.vault.load().map(|snapshot| WhatIfSimulator::from_snapshot(&snapshot));
    let Some(simulator) = simulator else {
        let empty = WhatIfResponse {
            weights,
            currency: None,
            ranking: Vec::new(),
            hint: Some(EMPTY_VAULT_HINT),
        };
        return output_with_rows(&empty, &[] as &[WhatIfRow], flags.format);
    };

    let ranking = simulator.recompute_top(&weights, top);
    let rows: Vec<WhatIfRow> = ranking
        .iter()
        .map(|ranked| WhatIfRow {
            rank: ranked.rank,
            fit: (ranked.fit * 1000.0).round() / 1000.0,
            summary: ranked.summary_line(simulator.currency()),
        })
        .collect();

    output_with_rows(
        &WhatIfResponse {
            weights,
            currency: Some(simulator.currency().to_string()),
            ranking,
            hint: None,
        },
        &rows,
        flags.format,
    )
}
