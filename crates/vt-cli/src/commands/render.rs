use serde::Serialize;
use vt_cards::{CardRecord, ResultsView, render_results};
use vt_core::pricing::enrich_payload;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::RenderArgs;
use crate::commands::input::read_payload;
use crate::context::AppContext;
use crate::output::output;

/// One card flattened for table output.
#[derive(Debug, Serialize)]
pub struct CardRow {
    pub title: String,
    pub price: String,
    pub details: Vec<String>,
    pub badges: Vec<String>,
    pub booking: String,
}

impl From<&CardRecord> for CardRow {
    fn from(card: &CardRecord) -> Self {
        Self {
            title: card.title.clone(),
            price: card.price.clone(),
            details: card
                .lines
                .iter()
                .chain(&card.price_details)
                .cloned()
                .collect(),
            badges: card.badges.iter().map(vt_cards::Badge::label).collect(),
            booking: card.booking_label().to_string(),
        }
    }
}

fn card_rows(cards: &[CardRecord]) -> Vec<CardRow> {
    cards.iter().map(CardRow::from).collect()
}

/// View-level lines printed above a table: header, freshness, notice, eco banner.
fn view_notices(view: &ResultsView) -> Vec<&str> {
    [
        view.header.as_deref(),
        view.freshness.as_deref(),
        view.message.as_deref(),
        view.eco_banner,
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Print a rendered view: the whole view, or one row per card for tables
/// followed by one titled table per comparison block.
pub fn print_view(view: &ResultsView, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(view, flags.format);
    }

    if !flags.quiet {
        for notice in view_notices(view) {
            eprintln!("{notice}");
        }
    }
    output(&card_rows(&view.cards), flags.format)?;
    for block in &view.comparisons {
        println!();
        println!("{}", block.title);
        output(&card_rows(&block.cards), flags.format)?;
    }
    Ok(())
}

/// Handle `vtrip render`.
pub fn handle(args: &RenderArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payload = read_payload(&args.input, &ctx.config.display.default_currency)?;
    let enriched = enrich_payload(&payload, ctx.bags());
    let view = render_results(&enriched, args.eco || ctx.config.display.eco_mode);
    print_view(&view, flags)
}
