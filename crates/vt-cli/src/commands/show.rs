use chrono::{DateTime, Utc};
use serde::Serialize;
use vt_cards::{ResultsView, render_results};
use vt_vault::status::{EMPTY_VAULT_HINT, OFFLINE_BANNER};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::render::print_view;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EmptyVault {
    cached: bool,
    hint: &'static str,
}

#[derive(Debug, Serialize)]
struct CachedView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    banner: Option<&'static str>,
    captured_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    view: &'a ResultsView,
}

/// Handle `vtrip show`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(snapshot) = ctx.vault.load() else {
        return output(
            &EmptyVault {
                cached: false,
                hint: EMPTY_VAULT_HINT,
            },
            flags.format,
        );
    };

    let banner = ctx.connectivity().is_offline().then_some(OFFLINE_BANNER);
    let view = render_results(&snapshot.data, ctx.config.display.eco_mode);

    if flags.format == OutputFormat::Table {
        if let Some(banner) = banner.filter(|_| !flags.quiet) {
            eprintln!("{banner}");
        }
        return print_view(&view, flags);
    }

    output(
        &CachedView {
            banner,
            captured_at: snapshot.captured_at(),
            view: &view,
        },
        flags.format,
    )
}
